//! Access-control configuration

use super::*;
use crate::access::{BundleDefault, ItemKind, ProtectedItem, Restriction};
use crate::auth::rbac::Role;
use crate::auth::roles::{Principal, RoleId};
use crate::menu::Menu;
use crate::redirect::FederatedAuth;
use serde::{Deserialize, Serialize};

/// Root configuration of the access gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub redirect: RedirectConfig,
    #[serde(default)]
    pub federated_auth: FederatedAuth,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub bundles: Vec<BundleEntry>,
    #[serde(default)]
    pub roles: Vec<RoleEntry>,
    /// Seed accounts for the in-memory user directory
    #[serde(default)]
    pub users: Vec<UserEntry>,
    /// Seed content for the in-memory content store
    #[serde(default)]
    pub content: Vec<ContentEntry>,
    #[serde(default)]
    pub menus: Vec<Menu>,
}

/// Login redirect settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectConfig {
    /// Site-wide custom redirect path; empty or absent uses the default
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_login_path")]
    pub default_login_path: String,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            path: None,
            default_login_path: default_login_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_restricted_bundles")]
    pub restricted_bundles: Vec<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            restricted_bundles: default_restricted_bundles(),
        }
    }
}

/// Decision cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: default_cache_max_entries(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleEntry {
    pub kind: ItemKind,
    pub bundle: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub default_roles: Vec<RoleId>,
}

impl BundleEntry {
    pub fn to_default(&self) -> BundleDefault {
        BundleDefault {
            enabled: self.enabled,
            default_allowed_roles: self.default_roles.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEntry {
    pub id: RoleId,
    pub label: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl RoleEntry {
    pub fn to_role(&self) -> Role {
        self.permissions
            .iter()
            .fold(Role::new(self.id.clone(), self.label.clone()), |role, perm| {
                role.with_permission(perm.clone())
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<RoleId>,
}

impl UserEntry {
    pub fn to_principal(&self) -> Principal {
        Principal::authenticated(self.id, self.name.clone(), self.roles.iter().cloned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub kind: ItemKind,
    pub id: u64,
    pub bundle: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_true")]
    pub published: bool,
    /// Restriction attributes; absent means the item lacks the fields
    #[serde(default = "default_restriction")]
    pub restriction: Option<Restriction>,
}

fn default_restriction() -> Option<Restriction> {
    Some(Restriction::disabled())
}

impl ContentEntry {
    pub fn to_item(&self) -> ProtectedItem {
        let mut item = ProtectedItem::new(self.kind, self.id, self.bundle.clone())
            .with_title(self.title.clone())
            .with_published(self.published);
        item.restriction = self.restriction.clone();
        item
    }
}
