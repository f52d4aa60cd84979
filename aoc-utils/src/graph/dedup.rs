//! Visited-state policies for the searches.

use std::collections::HashSet;
use std::hash::Hash;

/// Decides whether a state is new to the search.
pub trait Dedup<T> {
    /// Records `value`, returning `true` if no equivalent state was recorded before.
    fn insert(&mut self, value: &T) -> bool;
}

/// Treats every state as new, so states may be revisited.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDedup;

impl<T> Dedup<T> for NoDedup {
    fn insert(&mut self, _value: &T) -> bool {
        true
    }
}

/// Considers two states equivalent when `key` maps them to the same value.
#[derive(Debug, Clone)]
pub struct DedupBy<F, K> {
    key: F,
    seen: HashSet<K>,
}

impl<F, K> DedupBy<F, K> {
    pub fn new(key: F) -> Self {
        Self {
            key,
            seen: HashSet::new(),
        }
    }

    /// Number of distinct keys recorded so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl<T, F, K> Dedup<T> for DedupBy<F, K>
where
    F: FnMut(&T) -> K,
    K: Hash + Eq,
{
    fn insert(&mut self, value: &T) -> bool {
        self.seen.insert((self.key)(value))
    }
}
