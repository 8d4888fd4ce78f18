//! Content access by role
//!
//! The access-decision predicate, per-kind checkers and the decision cache.

pub mod cache;
pub mod checker;
pub mod decision;
pub mod item;
pub mod manager;

pub use cache::{CacheStats, DecisionCache, DecisionKey};
pub use checker::{
    AccessChecker, DEFAULT_RESTRICTED_MEDIA_BUNDLES, MediaAccessChecker, NodeAccessChecker,
};
pub use decision::{
    AccessDecision, Decision, DecisionReason, decide, evaluate, evaluate_restriction,
};
pub use item::{BundleDefault, ItemKind, ProtectedItem, Restriction};
pub use manager::AccessManager;
