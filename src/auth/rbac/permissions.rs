//! Permission checks for principals

use crate::auth::roles::Principal;
use crate::utils::error::Result;

use super::system::RbacSystem;
use super::types::PermissionCheck;

impl RbacSystem {
    /// Check whether any of the principal's roles grants `permission`
    pub fn check_permission_detailed(
        &self,
        principal: &Principal,
        permission: &str,
    ) -> Result<PermissionCheck> {
        let mut granted_by_roles = Vec::new();
        for role in &principal.roles {
            if self.store.role_has_permission(role, permission)? {
                granted_by_roles.push(role.clone());
            }
        }

        // The superuser holds every permission
        if granted_by_roles.is_empty() && principal.is_superuser() {
            return Ok(PermissionCheck {
                granted: true,
                granted_by_roles,
                denial_reason: None,
            });
        }

        let granted = !granted_by_roles.is_empty();
        Ok(PermissionCheck {
            granted,
            granted_by_roles,
            denial_reason: (!granted).then(|| format!("Missing permission: {}", permission)),
        })
    }

    /// Whether the principal holds `permission`
    pub fn has_permission(&self, principal: &Principal, permission: &str) -> Result<bool> {
        Ok(self.check_permission_detailed(principal, permission)?.granted)
    }
}
