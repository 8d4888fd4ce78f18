//! Role-Based Access Control (RBAC) system
//!
//! Resolves bypass roles, selectable roles and account permissions from the
//! role store on every call; nothing is snapshotted across requests.

mod bypass;
mod permissions;
mod system;
mod types;

// Re-export public types and structs
pub use system::RbacSystem;
pub use types::{PermissionCheck, RestrictionCategory, Role, RoleOption};
