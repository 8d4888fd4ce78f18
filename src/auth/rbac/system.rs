//! RBAC system core functionality

use crate::storage::RoleStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

use super::types::Role;

/// RBAC system backed by an external role store
#[derive(Clone)]
pub struct RbacSystem {
    /// Role and permission storage
    pub(super) store: Arc<dyn RoleStore>,
}

impl std::fmt::Debug for RbacSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RbacSystem").finish_non_exhaustive()
    }
}

impl RbacSystem {
    /// Create a new RBAC system
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        info!("Initializing RBAC system");
        Self { store }
    }

    /// List all roles, sorted by id
    pub fn list_roles(&self) -> Result<Vec<Role>> {
        let mut roles = self.store.list_roles()?;
        roles.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(roles)
    }

    /// Get role by id
    pub fn get_role(&self, role_id: &str) -> Result<Option<Role>> {
        self.store.load_role(role_id)
    }

    /// Labels for the given role ids, in id order; unknown ids fall back to the id
    pub fn role_labels<'a, I>(&self, role_ids: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut labels = Vec::new();
        for id in role_ids {
            let label = match self.store.load_role(id)? {
                Some(role) => role.label,
                None => id.clone(),
            };
            labels.push(label);
        }
        Ok(labels)
    }
}
