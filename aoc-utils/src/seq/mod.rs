//! Lazy sequence helpers
//!
//! [`SeqExt`] is implemented for every [`Iterator`], so importing it is enough to
//! get the extra adapters and terminals on any sequence. Everything stays lazy and
//! single-pass: an adapter pulls exactly as many items from its source as it needs
//! to produce the next one, and dropping the iterator discards the rest.
//!
//! Operations std already provides are not duplicated:
//!
//! | Need | Use |
//! |------|-----|
//! | skip / zip / take while | [`Iterator::skip`], [`Iterator::zip`], [`Iterator::take_while`] |
//! | indexed | [`Iterator::enumerate`] |
//! | tap | [`Iterator::inspect`] |
//! | sum / multiply | [`Iterator::sum`] (empty → 0), [`Iterator::product`] (empty → 1) |
//! | min / max | [`Iterator::min`], [`Iterator::max`] (empty → `None`) |
//! | last | [`Iterator::last`] (drains the source) |
//!
//! # Example
//!
//! ```rust
//! use aoc_utils::seq::SeqExt;
//!
//! let groups: Vec<Vec<i32>> = (1..=5).groups_of(3).collect();
//! assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5]]);
//!
//! let windows: Vec<Vec<i32>> = (1..=5).windowed(3).collect();
//! assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
//!
//! let lcm = [4u64, 6, 10].into_iter().lcm();
//! assert_eq!(lcm, 60);
//! ```

mod adapters;

use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;
use itertools::structs::Combinations;
use num_integer::Integer;

pub use adapters::{DistinctBy, GroupsOf, Iterate, SkipLast, TakeEvery, TakeUntil, Windowed};

/// Extra adapters and terminal operations for any iterator.
pub trait SeqExt: Iterator + Sized {
    /// Returns the first item, pulling at most one item from the source.
    fn first(mut self) -> Option<Self::Item> {
        self.next()
    }

    /// Returns the first item or `default` when the sequence is empty.
    fn first_or(mut self, default: Self::Item) -> Self::Item {
        self.next().unwrap_or(default)
    }

    /// Drops the last `n` items by emitting each item `n` pulls late.
    ///
    /// Buffers exactly `n` items. `skip_last(0)` passes the sequence through unchanged.
    fn skip_last(self, n: usize) -> SkipLast<Self> {
        SkipLast::new(self, n)
    }

    /// Splits the sequence into consecutive chunks of `size`.
    ///
    /// The final chunk is emitted even when shorter than `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn groups_of(self, size: usize) -> GroupsOf<Self> {
        GroupsOf::new(self, size)
    }

    /// Sliding windows of exactly `size` items.
    ///
    /// Nothing is emitted until `size` items have been seen. Every window is a freshly
    /// allocated `Vec`, so holding on to one never observes later windows.
    fn windowed(self, size: usize) -> Windowed<Self>
    where
        Self::Item: Clone,
    {
        Windowed::new(self, size)
    }

    /// Keeps the first occurrence of each value.
    fn distinct(self) -> DistinctBy<Self, fn(&Self::Item) -> Self::Item, Self::Item>
    where
        Self::Item: Clone + Hash + Eq,
    {
        DistinctBy::new(self, <Self::Item as Clone>::clone)
    }

    /// Keeps the first item for each key derived by `key`.
    fn distinct_by<K, F>(self, key: F) -> DistinctBy<Self, F, K>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        DistinctBy::new(self, key)
    }

    /// Stops right before the first item for which `predicate` holds.
    fn take_until<P>(self, predicate: P) -> TakeUntil<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeUntil::new(self, predicate)
    }

    /// Emits every `every`-th item, starting after `skip_initial` items.
    ///
    /// `every == 0` yields nothing.
    fn take_every(self, every: usize, skip_initial: usize) -> TakeEvery<Self> {
        TakeEvery::new(self, every, skip_initial)
    }

    /// All `k`-item combinations in source order.
    fn combinations_of(self, k: usize) -> Combinations<Self>
    where
        Self::Item: Clone,
    {
        Itertools::combinations(self, k)
    }

    /// Folds the sequence into a map.
    ///
    /// Both callbacks see the map built so far, so `value` can aggregate
    /// incrementally (a later item with the same key overwrites the entry).
    fn to_map<K, V, KF, VF>(self, mut key: KF, mut value: VF) -> HashMap<K, V>
    where
        K: Hash + Eq,
        KF: FnMut(&Self::Item, &HashMap<K, V>) -> K,
        VF: FnMut(&Self::Item, &HashMap<K, V>) -> V,
    {
        let mut map = HashMap::new();
        for item in self {
            let k = key(&item, &map);
            let v = value(&item, &map);
            map.insert(k, v);
        }
        map
    }

    /// Counts how often each value occurs.
    fn count_frequencies(self) -> HashMap<Self::Item, usize>
    where
        Self::Item: Clone + Hash + Eq,
    {
        self.to_map(
            |item, _| item.clone(),
            |item, counts| counts.get(item).copied().unwrap_or(0) + 1,
        )
    }

    /// Number of items matching `predicate`.
    fn count_where<P>(self, predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).count()
    }

    /// Position of the first item equal to `value`.
    fn index_of(mut self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.position(|item| item == *value)
    }

    /// The first item with the greatest key.
    ///
    /// Unlike [`Iterator::max_by_key`] ties keep the earliest item and the key only
    /// needs `PartialOrd`. Returns `None` for an empty sequence.
    fn max_by_key_first<K, F>(self, mut key: F) -> Option<Self::Item>
    where
        K: PartialOrd,
        F: FnMut(&Self::Item) -> K,
    {
        let mut best: Option<(K, Self::Item)> = None;
        for item in self {
            let k = key(&item);
            if best.as_ref().is_none_or(|(best_key, _)| k > *best_key) {
                best = Some((k, item));
            }
        }
        best.map(|(_, item)| item)
    }

    /// Least common multiple of all items; `1` for an empty sequence.
    fn lcm(self) -> Self::Item
    where
        Self::Item: Integer + From<u8>,
    {
        self.fold(<Self::Item as From<u8>>::from(1), |acc, x| acc.lcm(&x))
    }

    /// Hands the whole sequence to `f`, for ad hoc composition inside a chain.
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<I: Iterator> SeqExt for I {}

/// Infinite sequence starting at `seed` where each next value is `step(previous, index)`.
///
/// ```rust
/// use aoc_utils::seq::iterate;
///
/// let powers: Vec<u32> = iterate(1, |x, _| x * 2).take(5).collect();
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
/// ```
pub fn iterate<T, F>(seed: T, step: F) -> Iterate<T, F>
where
    F: FnMut(&T, usize) -> T,
{
    Iterate::new(seed, step)
}

#[cfg(test)]
mod tests;
