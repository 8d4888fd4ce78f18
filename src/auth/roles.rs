//! Role identifiers, role sets and the requesting principal

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Opaque role identifier
pub type RoleId = String;

/// Role every visitor without an account holds
pub const ANONYMOUS_ROLE: &str = "anonymous";
/// Role every logged-in account holds
pub const AUTHENTICATED_ROLE: &str = "authenticated";
/// Account id of the site superuser
pub const SUPERUSER_ID: u64 = 1;

/// Roles that can never be chosen as a restricting role
pub const RESERVED_ROLES: [&str; 2] = [ANONYMOUS_ROLE, AUTHENTICATED_ROLE];

/// Whether a role id is one of the reserved system roles
pub fn is_reserved_role(role: &str) -> bool {
    RESERVED_ROLES.contains(&role)
}

/// A flat set of role identifiers
///
/// Backed by an ordered set so that iteration, serialization and the cache
/// fingerprint are stable for equal sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<RoleId>);

impl RoleSet {
    /// Create an empty role set
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Add a role, returning whether it was newly inserted
    pub fn insert<S: Into<RoleId>>(&mut self, role: S) -> bool {
        self.0.insert(role.into())
    }

    pub fn remove(&mut self, role: &str) -> bool {
        self.0.remove(role)
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleId> {
        self.0.iter()
    }

    /// Whether the two sets share at least one role
    pub fn intersects(&self, other: &RoleSet) -> bool {
        // Walk the smaller set
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|role| large.contains(role))
    }

    /// Roles present in both sets
    pub fn intersection(&self, other: &RoleSet) -> RoleSet {
        self.0.intersection(&other.0).cloned().collect()
    }

    /// This set with `anonymous` and `authenticated` removed
    pub fn without_reserved(&self) -> RoleSet {
        self.0
            .iter()
            .filter(|role| !is_reserved_role(role))
            .cloned()
            .collect()
    }

    /// Roles from this set that are absent from `other`
    pub fn difference(&self, other: &RoleSet) -> RoleSet {
        self.0.difference(&other.0).cloned().collect()
    }

    /// Whether the set is exactly `{authenticated}`
    pub fn is_authenticated_only(&self) -> bool {
        self.len() == 1 && self.contains(AUTHENTICATED_ROLE)
    }

    /// Stable hash of the set, used as part of decision cache keys
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

impl<S: Into<RoleId>> FromIterator<S> for RoleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a RoleSet {
    type Item = &'a RoleId;
    type IntoIter = std::collections::btree_set::Iter<'a, RoleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The user a request is evaluated for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Account id, 0 for anonymous visitors
    pub id: u64,
    /// Account name
    pub name: String,
    /// Roles held by the principal, including the reserved ones
    pub roles: RoleSet,
    /// Whether the principal has no account session
    pub is_anonymous: bool,
}

impl Principal {
    /// An anonymous visitor
    pub fn anonymous() -> Self {
        Self {
            id: 0,
            name: String::new(),
            roles: RoleSet::from_iter([ANONYMOUS_ROLE]),
            is_anonymous: true,
        }
    }

    /// A logged-in account; the `authenticated` role is always added
    pub fn authenticated<S, I, R>(id: u64, name: S, roles: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = R>,
        R: Into<RoleId>,
    {
        let mut roles: RoleSet = roles.into_iter().collect();
        roles.insert(AUTHENTICATED_ROLE);
        Self {
            id,
            name: name.into(),
            roles,
            is_anonymous: false,
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn is_superuser(&self) -> bool {
        !self.is_anonymous && self.id == SUPERUSER_ID
    }

    /// An authenticated, non-superuser account holding no real role
    pub fn is_degenerate(&self) -> bool {
        !self.is_anonymous && !self.is_superuser() && self.roles.is_authenticated_only()
    }
}
