//! Per-item restriction widget

use super::ensure_selectable;
use crate::access::{AccessManager, ItemKind, ProtectedItem, Restriction};
use crate::auth::rbac::{RbacSystem, RoleOption};
use crate::auth::roles::{Principal, RoleId, RoleSet};
use crate::storage::{BundleConfigStore, ContentStore};
use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Error shown when restriction is switched on without roles
pub const NO_ROLES_SELECTED: &str =
    "Select at least one role-based protection, or uncheck the \"Protect access by role\" checkbox.";

const NO_PERMISSION: &str = "Your user account does not have permission to change access by role.";
const BUNDLE_DISABLED: &str = "This must be enabled on the content type configuration form.";

/// Submitted restriction values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRestrictionSubmission {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub roles: Vec<RoleId>,
}

/// What the editor sees for an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRestrictionView {
    pub enabled: bool,
    pub selected_roles: Vec<RoleId>,
    pub options: Vec<RoleOption>,
    /// Widget is read-only for this principal
    pub disabled: bool,
    pub disabled_reason: Option<String>,
    /// "Currently visible to" notice, when restriction is on
    pub current_notice: Option<String>,
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSubmitOutcome {
    pub item: ProtectedItem,
    pub message: Option<String>,
}

#[derive(Clone)]
pub struct ItemRestrictionForm {
    rbac: Arc<RbacSystem>,
    content: Arc<dyn ContentStore>,
    bundles: Arc<dyn BundleConfigStore>,
    access: AccessManager,
}

impl ItemRestrictionForm {
    pub fn new(
        rbac: Arc<RbacSystem>,
        content: Arc<dyn ContentStore>,
        bundles: Arc<dyn BundleConfigStore>,
        access: AccessManager,
    ) -> Self {
        Self {
            rbac,
            content,
            bundles,
            access,
        }
    }

    fn notice(&self, roles: &RoleSet) -> Result<Option<String>> {
        let labels = self.rbac.role_labels(roles)?;
        Ok((!labels.is_empty()).then(|| {
            format!(
                "This page is currently only visible to the following roles: {}.",
                labels.join(", ")
            )
        }))
    }

    /// Build the widget state for `item`
    pub fn build(&self, item: &ProtectedItem, principal: &Principal) -> Result<ItemRestrictionView> {
        let category = item.kind.category();
        let bundle = self.bundles.get(item.kind, &item.bundle)?;
        let can_set = self.rbac.has_permission(principal, category.set_permission())?;

        let disabled_reason = if !bundle.enabled {
            Some(BUNDLE_DISABLED.to_string())
        } else if !can_set {
            Some(NO_PERMISSION.to_string())
        } else {
            None
        };

        let enabled = item.restriction_enabled();
        let allowed = item.allowed_roles();
        let current_notice = if enabled { self.notice(&allowed)? } else { None };

        Ok(ItemRestrictionView {
            enabled,
            selected_roles: allowed.iter().cloned().collect(),
            options: self.rbac.selectable_roles(category)?,
            disabled: disabled_reason.is_some(),
            disabled_reason,
            current_notice,
        })
    }

    /// Check a submission before anything is persisted
    pub fn validate(&self, kind: ItemKind, submission: &ItemRestrictionSubmission) -> Result<()> {
        if submission.enabled && submission.roles.is_empty() {
            return Err(AccessError::validation("roles", NO_ROLES_SELECTED));
        }
        ensure_selectable(&self.rbac, kind.category(), "roles", &submission.roles)
    }

    /// Create an item with restriction off and the bundle's default roles preselected
    pub fn create_item<S: Into<String>>(
        &self,
        kind: ItemKind,
        id: u64,
        bundle: S,
    ) -> Result<ProtectedItem> {
        let bundle = bundle.into();
        let defaults = self.bundles.get(kind, &bundle)?;
        let item = ProtectedItem::new(kind, id, bundle).with_restriction(Restriction {
            enabled: false,
            allowed_roles: defaults.default_allowed_roles,
        });
        self.content.save_item(item)?;
        self.access.invalidate_item(kind, id);

        // Reload to pick up the revision assigned by the store
        self.content
            .load_item(kind, id)?
            .ok_or_else(|| AccessError::not_found(format!("{} {}", kind, id)))
    }

    /// Persist the restriction attributes of an existing item
    pub fn submit(
        &self,
        kind: ItemKind,
        id: u64,
        submission: ItemRestrictionSubmission,
        principal: &Principal,
    ) -> Result<ItemSubmitOutcome> {
        let category = kind.category();
        if !self.rbac.has_permission(principal, category.set_permission())? {
            return Err(AccessError::forbidden(NO_PERMISSION));
        }

        let item = self
            .content
            .load_item(kind, id)?
            .ok_or_else(|| AccessError::not_found(format!("{} {}", kind, id)))?;
        if !self.bundles.get(kind, &item.bundle)?.enabled {
            return Err(AccessError::forbidden(BUNDLE_DISABLED));
        }

        self.validate(kind, &submission)?;

        let restriction = Restriction {
            enabled: submission.enabled,
            allowed_roles: submission.roles.into_iter().collect(),
        };
        let message = if restriction.enabled {
            self.notice(&restriction.allowed_roles)?
        } else {
            None
        };

        let item = self.content.save_restriction(kind, id, restriction)?;
        self.access.invalidate_item(kind, id);

        info!(
            kind = %kind,
            item = id,
            enabled = item.restriction_enabled(),
            roles = ?item.allowed_roles(),
            by = principal.id,
            "Updated access restriction"
        );

        Ok(ItemSubmitOutcome { item, message })
    }
}
