//! The access-decision predicate
//!
//! Pure functions deciding whether a principal may view a protected item.
//! Identical inputs always produce identical results, so outcomes may be
//! cached on `(role set, item id, revision)`.

use super::item::{ProtectedItem, Restriction};
use crate::auth::roles::{Principal, RoleId, RoleSet};
use serde::Serialize;

/// Outcome of an access check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Access is allowed
    Allow,
    /// Access is denied
    Deny,
}

impl Decision {
    #[inline]
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    #[inline]
    pub fn is_deny(&self) -> bool {
        matches!(self, Decision::Deny)
    }
}

/// Why a decision came out the way it did, for audit logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// Restriction is switched off
    Unrestricted,
    /// The item's bundle is not subject to restriction
    UnrestrictedBundle,
    /// The principal holds a bypass role for the category
    Bypass,
    /// The principal holds one of the allowed roles
    RoleGranted,
    /// Restriction is on and no allowed role matched
    NoMatchingRole,
    /// Restriction is on but no allowed role was ever selected
    NoAllowedRoles,
    /// The item carries no restriction attributes
    NoRestrictionData,
}

/// Decision plus the evidence behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessDecision {
    pub decision: Decision,
    pub reason: DecisionReason,
    /// Roles that granted access (bypass or allowed roles held)
    pub granted_by: Vec<RoleId>,
}

impl AccessDecision {
    pub fn allow(reason: DecisionReason) -> Self {
        Self {
            decision: Decision::Allow,
            reason,
            granted_by: Vec::new(),
        }
    }

    pub fn deny(reason: DecisionReason) -> Self {
        Self {
            decision: Decision::Deny,
            reason,
            granted_by: Vec::new(),
        }
    }

    fn granted(reason: DecisionReason, roles: RoleSet) -> Self {
        Self {
            decision: Decision::Allow,
            reason,
            granted_by: roles.iter().cloned().collect(),
        }
    }

    pub fn is_allow(&self) -> bool {
        self.decision.is_allow()
    }

    pub fn is_deny(&self) -> bool {
        self.decision.is_deny()
    }
}

/// Decide whether `principal` may view `item`
pub fn decide(item: &ProtectedItem, principal: &Principal, bypass_roles: &RoleSet) -> Decision {
    evaluate(item, principal, bypass_roles).decision
}

/// Like [`decide`], keeping the reason
pub fn evaluate(
    item: &ProtectedItem,
    principal: &Principal,
    bypass_roles: &RoleSet,
) -> AccessDecision {
    evaluate_restriction(item.restriction.as_ref(), &principal.roles, bypass_roles)
}

/// Core predicate over raw restriction data and a role set
///
/// Absent or empty restriction data denies unless a bypass role applies.
pub fn evaluate_restriction(
    restriction: Option<&Restriction>,
    roles: &RoleSet,
    bypass_roles: &RoleSet,
) -> AccessDecision {
    if let Some(restriction) = restriction {
        if !restriction.enabled {
            return AccessDecision::allow(DecisionReason::Unrestricted);
        }
    }

    let bypassing = roles.intersection(bypass_roles);
    if !bypassing.is_empty() {
        return AccessDecision::granted(DecisionReason::Bypass, bypassing);
    }

    let Some(restriction) = restriction else {
        return AccessDecision::deny(DecisionReason::NoRestrictionData);
    };

    if restriction.allowed_roles.is_empty() {
        return AccessDecision::deny(DecisionReason::NoAllowedRoles);
    }

    let matching = roles.intersection(&restriction.allowed_roles);
    if matching.is_empty() {
        AccessDecision::deny(DecisionReason::NoMatchingRole)
    } else {
        AccessDecision::granted(DecisionReason::RoleGranted, matching)
    }
}
