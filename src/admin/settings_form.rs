//! Site redirect settings

use crate::access::{AccessManager, ItemKind};
use crate::auth::rbac::RbacSystem;
use crate::auth::roles::Principal;
use crate::redirect::is_external;
use crate::storage::SiteSettingsStore;
use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

pub const INTERNAL_PATH_MESSAGE: &str = "Internal URLs must start with a /";

/// Accept empty, site-relative (`/...`) or external paths
pub fn validate_redirect_path(path: &str) -> Result<()> {
    if path.is_empty() || path.starts_with('/') || is_external(path) {
        Ok(())
    } else {
        Err(AccessError::validation("redirect_path", INTERNAL_PATH_MESSAGE))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSubmission {
    #[serde(default)]
    pub redirect_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsView {
    pub redirect_path: String,
}

#[derive(Clone)]
pub struct SettingsForm {
    rbac: Arc<RbacSystem>,
    settings: Arc<dyn SiteSettingsStore>,
    access: AccessManager,
}

impl SettingsForm {
    pub fn new(
        rbac: Arc<RbacSystem>,
        settings: Arc<dyn SiteSettingsStore>,
        access: AccessManager,
    ) -> Self {
        Self {
            rbac,
            settings,
            access,
        }
    }

    pub fn build(&self) -> Result<SettingsView> {
        Ok(SettingsView {
            redirect_path: self.settings.redirect_path()?.unwrap_or_default(),
        })
    }

    pub fn validate(&self, submission: &SettingsSubmission) -> Result<()> {
        validate_redirect_path(&submission.redirect_path)
    }

    /// Persist the redirect path and flush cached decisions
    pub fn submit(&self, submission: SettingsSubmission, principal: &Principal) -> Result<()> {
        let permission = ItemKind::Node.category().manage_permission();
        if !self.rbac.has_permission(principal, permission)? {
            return Err(AccessError::forbidden(format!(
                "Missing permission: {}",
                permission
            )));
        }
        self.validate(&submission)?;

        let path = Some(submission.redirect_path).filter(|path| !path.is_empty());
        info!(redirect_path = ?path, by = principal.id, "Updated redirect settings");
        self.settings.set_redirect_path(path)?;
        self.access.invalidate_all();
        Ok(())
    }
}
