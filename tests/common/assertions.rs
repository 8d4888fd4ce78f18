//! Custom test assertions

use access_by_role::access::{AccessDecision, DecisionReason};
use access_by_role::redirect::RedirectDecision;

/// Assertions for access decisions
pub trait DecisionAssertions {
    fn assert_allowed(&self);
    fn assert_denied_because(&self, reason: DecisionReason);
}

impl DecisionAssertions for AccessDecision {
    fn assert_allowed(&self) {
        assert!(self.is_allow(), "Expected allow, got {:?}", self);
    }

    fn assert_denied_because(&self, reason: DecisionReason) {
        assert!(self.is_deny(), "Expected deny, got {:?}", self);
        assert_eq!(self.reason, reason);
    }
}

/// Assertions for login redirects
pub trait RedirectAssertions {
    fn assert_target(&self, expected: &str);
    fn assert_tagged(&self, tag: &str);
}

impl RedirectAssertions for Option<RedirectDecision> {
    fn assert_target(&self, expected: &str) {
        let decision = self.as_ref().expect("Expected a login redirect");
        assert_eq!(decision.target, expected);
        assert_eq!(decision.status, 301);
    }

    fn assert_tagged(&self, tag: &str) {
        let decision = self.as_ref().expect("Expected a login redirect");
        assert!(
            decision.cache.tags.iter().any(|t| t == tag),
            "Expected cache tag {:?} in {:?}",
            tag,
            decision.cache.tags
        );
    }
}
