//! Common test utilities for access-by-role
//!
//! # Usage
//!
//! ```rust
//! use crate::common::fixtures::{SiteFactory, PrincipalFactory};
//!
//! let state = SiteFactory::state();
//! let editor = PrincipalFactory::editor();
//! ```

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{PrincipalFactory, SiteFactory};
