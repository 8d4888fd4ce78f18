//! Storage layer for the access module
//!
//! Roles, content, bundle settings, site settings and accounts are owned by
//! the host system. This module defines the interfaces the access layer reads
//! and writes through, plus in-memory backends used by the gateway binary and
//! the tests.

/// In-memory storage backends
pub mod memory;

use crate::access::{BundleDefault, ItemKind, ProtectedItem, Restriction};
use crate::auth::rbac::Role;
use crate::auth::roles::Principal;
use crate::config::AccessConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub use memory::{
    InMemoryAccountStore, InMemoryBundleConfigStore, InMemoryContentStore, InMemoryRoleStore,
    InMemorySessionManager, InMemorySiteSettingsStore,
};

/// Role and permission storage
pub trait RoleStore: Send + Sync {
    /// All defined roles
    fn list_roles(&self) -> Result<Vec<Role>>;
    fn load_role(&self, role_id: &str) -> Result<Option<Role>>;
    /// Whether the role holds the permission; unknown roles hold nothing
    fn role_has_permission(&self, role_id: &str, permission: &str) -> Result<bool>;
}

/// Content entity storage
pub trait ContentStore: Send + Sync {
    fn load_item(&self, kind: ItemKind, id: u64) -> Result<Option<ProtectedItem>>;
    /// Create or replace an item; a replacement gets a newer revision
    fn save_item(&self, item: ProtectedItem) -> Result<()>;
    /// Update the two restriction attributes, bumping the revision
    fn save_restriction(
        &self,
        kind: ItemKind,
        id: u64,
        restriction: Restriction,
    ) -> Result<ProtectedItem>;
    /// Update the publication flag, bumping the revision
    fn set_published(&self, kind: ItemKind, id: u64, published: bool) -> Result<ProtectedItem>;
}

/// Per-bundle restriction settings
pub trait BundleConfigStore: Send + Sync {
    /// Settings for a bundle; unconfigured bundles are disabled
    fn get(&self, kind: ItemKind, bundle: &str) -> Result<BundleDefault>;
    fn set(&self, kind: ItemKind, bundle: &str, default: BundleDefault) -> Result<()>;
}

/// Site-wide settings
pub trait SiteSettingsStore: Send + Sync {
    fn redirect_path(&self) -> Result<Option<String>>;
    fn set_redirect_path(&self, path: Option<String>) -> Result<()>;
}

/// User account storage
pub trait AccountStore: Send + Sync {
    fn load_account(&self, uid: u64) -> Result<Option<Principal>>;
    fn delete_account(&self, uid: u64) -> Result<()>;
}

/// Session handling owned by the host's login mechanics
pub trait SessionManager: Send + Sync {
    fn logout(&self, principal: &Principal) -> Result<()>;
}

/// All storage collaborators, shared behind `Arc`
#[derive(Clone)]
pub struct StorageLayer {
    pub roles: Arc<dyn RoleStore>,
    pub content: Arc<dyn ContentStore>,
    pub bundles: Arc<dyn BundleConfigStore>,
    pub settings: Arc<dyn SiteSettingsStore>,
    pub accounts: Arc<dyn AccountStore>,
    pub sessions: Arc<dyn SessionManager>,
}

impl StorageLayer {
    /// Build in-memory stores seeded from configuration
    pub fn in_memory(settings: &AccessConfig) -> Result<Self> {
        info!("Initializing in-memory storage layer");

        let roles = InMemoryRoleStore::new();
        for role in &settings.roles {
            roles.upsert(role.to_role());
        }

        let content = InMemoryContentStore::new();
        for entry in &settings.content {
            content.save_item(entry.to_item())?;
        }

        let bundles = InMemoryBundleConfigStore::new();
        for entry in &settings.bundles {
            bundles.set(entry.kind, &entry.bundle, entry.to_default())?;
        }

        let site = InMemorySiteSettingsStore::new(settings.redirect.path.clone());

        let accounts = InMemoryAccountStore::new();
        for user in &settings.users {
            accounts.insert(user.to_principal());
        }

        debug!(
            roles = settings.roles.len(),
            items = settings.content.len(),
            bundles = settings.bundles.len(),
            users = settings.users.len(),
            "Seeded storage"
        );

        Ok(Self {
            roles: Arc::new(roles),
            content: Arc::new(content),
            bundles: Arc::new(bundles),
            settings: Arc::new(site),
            accounts: Arc::new(accounts),
            sessions: Arc::new(InMemorySessionManager::new()),
        })
    }
}
