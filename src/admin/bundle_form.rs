//! Per-bundle restriction settings

use super::ensure_selectable;
use crate::access::{BundleDefault, ItemKind};
use crate::auth::rbac::RbacSystem;
use crate::auth::roles::{Principal, RoleId};
use crate::storage::BundleConfigStore;
use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSettingsSubmission {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub default_roles: Vec<RoleId>,
}

#[derive(Clone)]
pub struct BundleSettingsForm {
    rbac: Arc<RbacSystem>,
    bundles: Arc<dyn BundleConfigStore>,
}

impl BundleSettingsForm {
    pub fn new(rbac: Arc<RbacSystem>, bundles: Arc<dyn BundleConfigStore>) -> Self {
        Self { rbac, bundles }
    }

    pub fn load(&self, kind: ItemKind, bundle: &str) -> Result<BundleDefault> {
        self.bundles.get(kind, bundle)
    }

    /// Persist the settings of a bundle; requires the category's manage permission
    pub fn submit(
        &self,
        kind: ItemKind,
        bundle: &str,
        submission: BundleSettingsSubmission,
        principal: &Principal,
    ) -> Result<BundleDefault> {
        let category = kind.category();
        if !self.rbac.has_permission(principal, category.manage_permission())? {
            return Err(AccessError::forbidden(format!(
                "Missing permission: {}",
                category.manage_permission()
            )));
        }
        ensure_selectable(&self.rbac, category, "default_roles", &submission.default_roles)?;

        let default = BundleDefault {
            enabled: submission.enabled,
            default_allowed_roles: submission.default_roles.into_iter().collect(),
        };
        self.bundles.set(kind, bundle, default.clone())?;

        info!(
            kind = %kind,
            bundle,
            enabled = default.enabled,
            by = principal.id,
            "Updated bundle access settings"
        );
        Ok(default)
    }
}
