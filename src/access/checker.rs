//! Per-kind access checkers

use super::decision::{AccessDecision, DecisionReason, evaluate, evaluate_restriction};
use super::item::{ItemKind, ProtectedItem, Restriction};
use crate::auth::rbac::RbacSystem;
use crate::auth::roles::Principal;
use crate::utils::error::Result;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Default media bundles subject to role restriction
pub const DEFAULT_RESTRICTED_MEDIA_BUNDLES: [&str; 2] = ["restricted_image", "restricted_document"];

/// Access check for one kind of protected item
pub trait AccessChecker: Send + Sync {
    /// Kind of item this checker handles
    fn kind(&self) -> ItemKind;

    /// Decide whether `principal` may view `item`
    fn check(&self, item: &ProtectedItem, principal: &Principal) -> Result<AccessDecision>;
}

/// Checker for content nodes
#[derive(Debug, Clone)]
pub struct NodeAccessChecker {
    rbac: Arc<RbacSystem>,
}

impl NodeAccessChecker {
    pub fn new(rbac: Arc<RbacSystem>) -> Self {
        Self { rbac }
    }
}

impl AccessChecker for NodeAccessChecker {
    fn kind(&self) -> ItemKind {
        ItemKind::Node
    }

    fn check(&self, item: &ProtectedItem, principal: &Principal) -> Result<AccessDecision> {
        let bypass = self.rbac.bypass_roles(ItemKind::Node.category())?;
        let decision = evaluate(item, principal, &bypass);
        debug!(
            node = item.id,
            principal = principal.id,
            decision = ?decision.decision,
            reason = ?decision.reason,
            "Node access decision"
        );
        Ok(decision)
    }
}

/// Checker for media assets
///
/// Only media in a restricted bundle is evaluated; for those, the bundle
/// itself acts as the enable flag.
#[derive(Debug, Clone)]
pub struct MediaAccessChecker {
    rbac: Arc<RbacSystem>,
    restricted_bundles: HashSet<String>,
}

impl MediaAccessChecker {
    pub fn new<I, S>(rbac: Arc<RbacSystem>, restricted_bundles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rbac,
            restricted_bundles: restricted_bundles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_restricted_bundle(&self, bundle: &str) -> bool {
        self.restricted_bundles.contains(bundle)
    }
}

impl AccessChecker for MediaAccessChecker {
    fn kind(&self) -> ItemKind {
        ItemKind::Media
    }

    fn check(&self, item: &ProtectedItem, principal: &Principal) -> Result<AccessDecision> {
        if !self.is_restricted_bundle(&item.bundle) {
            return Ok(AccessDecision::allow(DecisionReason::UnrestrictedBundle));
        }

        let bypass = self.rbac.bypass_roles(ItemKind::Media.category())?;
        let effective = item.restriction.as_ref().map(|r| Restriction {
            enabled: true,
            allowed_roles: r.allowed_roles.clone(),
        });
        let decision = evaluate_restriction(effective.as_ref(), &principal.roles, &bypass);
        debug!(
            media = item.id,
            principal = principal.id,
            decision = ?decision.decision,
            reason = ?decision.reason,
            "Media access decision"
        );
        Ok(decision)
    }
}
