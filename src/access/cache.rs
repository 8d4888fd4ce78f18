//! Decision cache with explicit invalidation
//!
//! Entries are keyed on the principal's role-set fingerprint, the item and
//! its revision. Bumping an item's revision already makes old entries
//! unreachable; `invalidate_item` drops them eagerly. Role-permission changes
//! affect every entry and must call `invalidate_all`.

use super::decision::AccessDecision;
use super::item::{ItemKind, ProtectedItem};
use crate::auth::roles::RoleSet;
use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Cache key for a single decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecisionKey {
    pub roles_fingerprint: u64,
    pub kind: ItemKind,
    pub item_id: u64,
    pub revision: u64,
}

impl DecisionKey {
    pub fn new(roles: &RoleSet, item: &ProtectedItem) -> Self {
        Self {
            roles_fingerprint: roles.fingerprint(),
            kind: item.kind,
            item_id: item.id,
            revision: item.revision,
        }
    }
}

/// Hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Concurrent decision cache
#[derive(Debug)]
pub struct DecisionCache {
    entries: DashMap<DecisionKey, AccessDecision>,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for DecisionCache {
    fn default() -> Self {
        Self::new(10_000)
    }
}

impl DecisionCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &DecisionKey) -> Option<AccessDecision> {
        match self.entries.get(key) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value().clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, key: DecisionKey, decision: AccessDecision) {
        if self.max_entries == 0 {
            return;
        }
        // Full flush keeps the bound without tracking recency
        if self.entries.len() >= self.max_entries {
            debug!(entries = self.entries.len(), "Decision cache full, flushing");
            self.entries.clear();
        }
        self.entries.insert(key, decision);
    }

    /// Drop every cached decision for one item
    pub fn invalidate_item(&self, kind: ItemKind, item_id: u64) {
        self.entries
            .retain(|key, _| !(key.kind == kind && key.item_id == item_id));
        debug!(%kind, item_id, "Invalidated cached decisions for item");
    }

    /// Drop everything, e.g. after a role-permission change
    pub fn invalidate_all(&self) {
        self.entries.clear();
        debug!("Invalidated all cached decisions");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}
