//! In-memory storage backends

use super::{
    AccountStore, BundleConfigStore, ContentStore, RoleStore, SessionManager, SiteSettingsStore,
};
use crate::access::{BundleDefault, ItemKind, ProtectedItem, Restriction};
use crate::auth::rbac::Role;
use crate::auth::roles::Principal;
use crate::utils::error::{AccessError, Result};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Role storage keyed by role id
#[derive(Debug, Default)]
pub struct InMemoryRoleStore {
    roles: RwLock<HashMap<String, Role>>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a role
    pub fn upsert(&self, role: Role) {
        self.roles.write().insert(role.id.clone(), role);
    }

    pub fn grant(&self, role_id: &str, permission: &str) -> Result<()> {
        let mut roles = self.roles.write();
        let role = roles
            .get_mut(role_id)
            .ok_or_else(|| AccessError::not_found(format!("role {}", role_id)))?;
        role.permissions.insert(permission.to_string());
        Ok(())
    }

    pub fn revoke(&self, role_id: &str, permission: &str) -> Result<()> {
        let mut roles = self.roles.write();
        let role = roles
            .get_mut(role_id)
            .ok_or_else(|| AccessError::not_found(format!("role {}", role_id)))?;
        role.permissions.remove(permission);
        Ok(())
    }
}

impl RoleStore for InMemoryRoleStore {
    fn list_roles(&self) -> Result<Vec<Role>> {
        Ok(self.roles.read().values().cloned().collect())
    }

    fn load_role(&self, role_id: &str) -> Result<Option<Role>> {
        Ok(self.roles.read().get(role_id).cloned())
    }

    fn role_has_permission(&self, role_id: &str, permission: &str) -> Result<bool> {
        Ok(self
            .roles
            .read()
            .get(role_id)
            .is_some_and(|role| role.has_permission(permission)))
    }
}

/// Content storage keyed by `(kind, id)`
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    items: DashMap<(ItemKind, u64), ProtectedItem>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn update<F>(&self, kind: ItemKind, id: u64, apply: F) -> Result<ProtectedItem>
    where
        F: FnOnce(&mut ProtectedItem),
    {
        let mut entry = self
            .items
            .get_mut(&(kind, id))
            .ok_or_else(|| AccessError::not_found(format!("{} {}", kind, id)))?;
        apply(entry.value_mut());
        entry.revision += 1;
        Ok(entry.value().clone())
    }
}

impl ContentStore for InMemoryContentStore {
    fn load_item(&self, kind: ItemKind, id: u64) -> Result<Option<ProtectedItem>> {
        Ok(self.items.get(&(kind, id)).map(|entry| entry.value().clone()))
    }

    fn save_item(&self, mut item: ProtectedItem) -> Result<()> {
        // A replaced item must not share a revision with its predecessor
        if let Some(existing) = self.items.get(&(item.kind, item.id)) {
            item.revision = item.revision.max(existing.revision + 1);
        }
        self.items.insert((item.kind, item.id), item);
        Ok(())
    }

    fn save_restriction(
        &self,
        kind: ItemKind,
        id: u64,
        restriction: Restriction,
    ) -> Result<ProtectedItem> {
        self.update(kind, id, |item| item.restriction = Some(restriction))
    }

    fn set_published(&self, kind: ItemKind, id: u64, published: bool) -> Result<ProtectedItem> {
        self.update(kind, id, |item| item.published = published)
    }
}

/// Bundle settings keyed by `(kind, bundle)`
#[derive(Debug, Default)]
pub struct InMemoryBundleConfigStore {
    bundles: DashMap<(ItemKind, String), BundleDefault>,
}

impl InMemoryBundleConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BundleConfigStore for InMemoryBundleConfigStore {
    fn get(&self, kind: ItemKind, bundle: &str) -> Result<BundleDefault> {
        Ok(self
            .bundles
            .get(&(kind, bundle.to_string()))
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    fn set(&self, kind: ItemKind, bundle: &str, default: BundleDefault) -> Result<()> {
        self.bundles.insert((kind, bundle.to_string()), default);
        Ok(())
    }
}

/// Site settings held in a single lock
#[derive(Debug, Default)]
pub struct InMemorySiteSettingsStore {
    redirect_path: RwLock<Option<String>>,
}

impl InMemorySiteSettingsStore {
    pub fn new(redirect_path: Option<String>) -> Self {
        Self {
            redirect_path: RwLock::new(redirect_path),
        }
    }
}

impl SiteSettingsStore for InMemorySiteSettingsStore {
    fn redirect_path(&self) -> Result<Option<String>> {
        Ok(self.redirect_path.read().clone())
    }

    fn set_redirect_path(&self, path: Option<String>) -> Result<()> {
        *self.redirect_path.write() = path;
        Ok(())
    }
}

/// Accounts keyed by uid
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: DashMap<u64, Principal>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, principal: Principal) {
        self.accounts.insert(principal.id, principal);
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn load_account(&self, uid: u64) -> Result<Option<Principal>> {
        Ok(self.accounts.get(&uid).map(|entry| entry.value().clone()))
    }

    fn delete_account(&self, uid: u64) -> Result<()> {
        self.accounts
            .remove(&uid)
            .map(|_| ())
            .ok_or_else(|| AccessError::not_found(format!("account {}", uid)))
    }
}

/// Records logouts so callers can observe them
#[derive(Debug, Default)]
pub struct InMemorySessionManager {
    logouts: DashMap<u64, DateTime<Utc>>,
}

impl InMemorySessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// When the account was last logged out, if ever
    pub fn logged_out_at(&self, uid: u64) -> Option<DateTime<Utc>> {
        self.logouts.get(&uid).map(|entry| *entry.value())
    }
}

impl SessionManager for InMemorySessionManager {
    fn logout(&self, principal: &Principal) -> Result<()> {
        self.logouts.insert(principal.id, Utc::now());
        Ok(())
    }
}
