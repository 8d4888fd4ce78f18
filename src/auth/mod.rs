//! Principals, roles and the RBAC system
//!
//! This module provides role-set utilities and the role-store backed RBAC
//! system used by every access decision.

pub mod rbac;
pub mod roles;

// Re-export commonly used types
pub use rbac::{RbacSystem, RestrictionCategory, Role, RoleOption};
pub use roles::{
    ANONYMOUS_ROLE, AUTHENTICATED_ROLE, Principal, RoleId, RoleSet, SUPERUSER_ID,
    is_reserved_role,
};
