//! Administrative submissions
//!
//! Typed request/response models for the per-item restriction widget, the
//! per-bundle settings and the site redirect settings.

pub mod bundle_form;
pub mod item_form;
pub mod settings_form;

pub use bundle_form::{BundleSettingsForm, BundleSettingsSubmission};
pub use item_form::{
    ItemRestrictionForm, ItemRestrictionSubmission, ItemRestrictionView, ItemSubmitOutcome,
    NO_ROLES_SELECTED,
};
pub use settings_form::{
    INTERNAL_PATH_MESSAGE, SettingsForm, SettingsSubmission, SettingsView, validate_redirect_path,
};

use crate::auth::rbac::{RbacSystem, RestrictionCategory};
use crate::auth::roles::RoleId;
use crate::utils::error::{AccessError, Result};

/// Reject role ids that may not be chosen for `category`
pub(crate) fn ensure_selectable(
    rbac: &RbacSystem,
    category: RestrictionCategory,
    field: &str,
    roles: &[RoleId],
) -> Result<()> {
    let selectable = rbac.selectable_roles(category)?;
    if let Some(role) = roles
        .iter()
        .find(|role| !selectable.iter().any(|option| &option.id == *role))
    {
        return Err(AccessError::validation(
            field,
            format!("'{}' is not a selectable role", role),
        ));
    }
    Ok(())
}
