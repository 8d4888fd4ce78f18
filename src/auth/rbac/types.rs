//! RBAC type definitions

use crate::auth::roles::RoleId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Role definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role identifier
    pub id: RoleId,
    /// Human readable label
    pub label: String,
    /// Permissions granted by this role
    #[serde(default)]
    pub permissions: HashSet<String>,
}

impl Role {
    pub fn new<I: Into<RoleId>, L: Into<String>>(id: I, label: L) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            permissions: HashSet::new(),
        }
    }

    pub fn with_permission<P: Into<String>>(mut self, permission: P) -> Self {
        self.permissions.insert(permission.into());
        self
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

/// Scope within which bypass grants and selectable roles are evaluated
///
/// Node and media grants are independent: bypassing one category says
/// nothing about the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionCategory {
    NodeAccess,
    MediaAccess,
}

impl RestrictionCategory {
    /// Permission exempting a role from this category's restrictions
    pub fn bypass_permission(self) -> &'static str {
        match self {
            RestrictionCategory::NodeAccess => "bypass node access by role",
            RestrictionCategory::MediaAccess => "bypass media access by role",
        }
    }

    /// Permission to set restrictions on individual items
    pub fn set_permission(self) -> &'static str {
        match self {
            RestrictionCategory::NodeAccess => "set node access by role",
            RestrictionCategory::MediaAccess => "set media access by role",
        }
    }

    /// Permission to manage per-bundle settings and the redirect path
    pub fn manage_permission(self) -> &'static str {
        match self {
            RestrictionCategory::NodeAccess => "manage node access by role",
            RestrictionCategory::MediaAccess => "manage media access by role",
        }
    }
}

/// Entry in the selectable-roles list offered to editors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleOption {
    pub id: RoleId,
    pub label: String,
}

/// Permission check result
#[derive(Debug, Clone)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Roles that granted the permission
    pub granted_by_roles: Vec<RoleId>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
