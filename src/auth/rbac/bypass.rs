//! Bypass registry and selectable roles

use crate::auth::roles::{RoleSet, is_reserved_role};
use crate::utils::error::Result;
use tracing::debug;

use super::system::RbacSystem;
use super::types::{RestrictionCategory, RoleOption};

impl RbacSystem {
    /// Roles holding the bypass permission for `category`
    ///
    /// Reads the role store on each call so permission changes show up on
    /// the next request.
    pub fn bypass_roles(&self, category: RestrictionCategory) -> Result<RoleSet> {
        let permission = category.bypass_permission();
        let mut bypassing = RoleSet::new();
        for role in self.store.list_roles()? {
            if self.store.role_has_permission(&role.id, permission)? {
                bypassing.insert(role.id);
            }
        }
        debug!(?category, roles = bypassing.len(), "Resolved bypass roles");
        Ok(bypassing)
    }

    /// Roles an editor may choose as restricting roles for `category`
    ///
    /// Excludes the reserved roles and every role that bypasses the category.
    pub fn selectable_roles(&self, category: RestrictionCategory) -> Result<Vec<RoleOption>> {
        let bypassing = self.bypass_roles(category)?;
        let options = self
            .list_roles()?
            .into_iter()
            .filter(|role| !is_reserved_role(&role.id) && !bypassing.contains(&role.id))
            .map(|role| RoleOption {
                id: role.id,
                label: role.label,
            })
            .collect();
        Ok(options)
    }

    /// Whether `role_id` may be chosen as a restricting role for `category`
    pub fn is_selectable(&self, category: RestrictionCategory, role_id: &str) -> Result<bool> {
        Ok(self
            .selectable_roles(category)?
            .iter()
            .any(|option| option.id == role_id))
    }
}
