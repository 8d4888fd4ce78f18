//! # access-by-role
//!
//! Role-based access control for CMS content.
//!
//! ## Features
//!
//! - **Access decisions**: restrict nodes and media to selected roles, with
//!   per-category bypass roles
//! - **Login redirects**: anonymous visitors denied a restricted page are sent
//!   to the login flow with their original path as post-login destination
//! - **Menu visibility**: published restricted pages stay visible in menus
//! - **Administration**: per-item, per-bundle and site-level settings
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use access_by_role::{AccessGateway, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/access.yaml").await?;
//!     let gateway = AccessGateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Library use
//!
//! ```rust
//! use access_by_role::access::{ItemKind, ProtectedItem, Restriction, decide};
//! use access_by_role::auth::{Principal, RoleSet};
//!
//! let item = ProtectedItem::new(ItemKind::Node, 1, "page")
//!     .with_restriction(Restriction::enabled_for(["editor"]));
//! let editor = Principal::authenticated(2, "ed", ["editor"]);
//! assert!(decide(&item, &editor, &RoleSet::new()).is_allow());
//! assert!(decide(&item, &Principal::anonymous(), &RoleSet::new()).is_deny());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod access;
pub mod admin;
pub mod auth;
pub mod config;
pub mod menu;
pub mod redirect;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use access::{AccessDecision, AccessManager, Decision, ItemKind, ProtectedItem, Restriction};
pub use auth::{Principal, RbacSystem, RoleSet};
pub use config::Config;
pub use redirect::{RedirectDecision, RedirectResolver};
pub use utils::error::{AccessError, Result};

use tracing::info;

/// The access gateway: configuration plus HTTP server
pub struct AccessGateway {
    config: Config,
    server: server::HttpServer,
}

impl AccessGateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { config, server })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting access gateway");
        info!("Listening on {}", self.config.server().address());

        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Version and commit the binary was built from
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Short commit hash, `unknown` outside a git checkout
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: env!("GIT_HASH"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
