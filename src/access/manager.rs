//! Access manager dispatching to the registered checkers

use super::cache::{DecisionCache, DecisionKey};
use super::checker::{AccessChecker, MediaAccessChecker, NodeAccessChecker};
use super::decision::{AccessDecision, DecisionReason};
use super::item::{ItemKind, ProtectedItem};
use crate::auth::rbac::RbacSystem;
use crate::auth::roles::Principal;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, warn};

/// Entry point for every content read path
///
/// Direct views, menu rendering and listings all go through [`check`],
/// so they see identical results for identical inputs.
///
/// [`check`]: AccessManager::check
#[derive(Clone, Default)]
pub struct AccessManager {
    checkers: Vec<Arc<dyn AccessChecker>>,
    cache: Option<Arc<DecisionCache>>,
}

impl AccessManager {
    /// Manager with the node and media checkers registered
    pub fn new<I, S>(rbac: Arc<RbacSystem>, restricted_media_bundles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default()
            .with_checker(Arc::new(NodeAccessChecker::new(rbac.clone())))
            .with_checker(Arc::new(MediaAccessChecker::new(
                rbac,
                restricted_media_bundles,
            )))
    }

    /// Register a checker; the first registered checker for a kind wins
    pub fn with_checker(mut self, checker: Arc<dyn AccessChecker>) -> Self {
        self.checkers.push(checker);
        self
    }

    pub fn with_cache(mut self, cache: Arc<DecisionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn cache(&self) -> Option<&Arc<DecisionCache>> {
        self.cache.as_ref()
    }

    fn checker_for(&self, kind: ItemKind) -> Option<&Arc<dyn AccessChecker>> {
        self.checkers.iter().find(|checker| checker.kind() == kind)
    }

    /// Decide access for `principal` on `item`
    pub fn check(&self, item: &ProtectedItem, principal: &Principal) -> Result<AccessDecision> {
        let key = DecisionKey::new(&principal.roles, item);
        if let Some(cached) = self.cache.as_ref().and_then(|cache| cache.get(&key)) {
            return Ok(cached);
        }

        let decision = match self.checker_for(item.kind) {
            Some(checker) => checker.check(item, principal)?,
            None => {
                warn!(kind = %item.kind, item = item.id, "No access checker registered, denying");
                AccessDecision::deny(DecisionReason::NoRestrictionData)
            }
        };

        if let Some(cache) = &self.cache {
            cache.insert(key, decision.clone());
        }
        Ok(decision)
    }

    /// Like [`check`](Self::check), turning collaborator failures into a denial
    pub fn check_or_deny(&self, item: &ProtectedItem, principal: &Principal) -> AccessDecision {
        self.check(item, principal).unwrap_or_else(|e| {
            warn!(kind = %item.kind, item = item.id, error = %e, "Access check failed, denying");
            AccessDecision::deny(DecisionReason::NoRestrictionData)
        })
    }

    /// Call after an item's restriction or publication state changed
    pub fn invalidate_item(&self, kind: ItemKind, id: u64) {
        if let Some(cache) = &self.cache {
            cache.invalidate_item(kind, id);
        }
    }

    /// Call after any role-permission change or settings flush
    pub fn invalidate_all(&self) {
        if let Some(cache) = &self.cache {
            debug!("Flushing access decision cache");
            cache.invalidate_all();
        }
    }
}
