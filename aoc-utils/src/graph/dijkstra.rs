//! Lowest-cost-first traversal.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use std::ops::Add;
use std::rc::Rc;

use log::trace;

use super::dedup::{Dedup, DedupBy, NoDedup};
use super::path::PathItem;

/// Heap entry ordered so that [`BinaryHeap`] pops the smallest distance first and,
/// among equal distances, the earliest pushed.
struct Queued<T, D> {
    order: usize,
    item: Rc<PathItem<T, D>>,
}

impl<T, D: Ord> PartialEq for Queued<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, D: Ord> Eq for Queued<T, D> {}

impl<T, D: Ord> PartialOrd for Queued<T, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, D: Ord> Ord for Queued<T, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .item
            .distance
            .cmp(&self.item.distance)
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// Lazy Dijkstra traversal, see [`dijkstra`].
pub struct Dijkstra<T, D, N, C, V = NoDedup> {
    heap: BinaryHeap<Queued<T, D>>,
    next: N,
    cost: C,
    visited: V,
    pending: Option<Rc<PathItem<T, D>>>,
    pushed: usize,
    emitted: usize,
}

impl<T, D: Ord, N, C> Dijkstra<T, D, N, C, NoDedup> {
    fn new(starts: impl IntoIterator<Item = (T, D)>, next: N, cost: C) -> Self {
        let mut search = Self {
            heap: BinaryHeap::new(),
            next,
            cost,
            visited: NoDedup,
            pending: None,
            pushed: 0,
            emitted: 0,
        };
        for (value, distance) in starts {
            search.push(PathItem::root(value, distance));
        }
        search
    }

    /// Skips states whose `key` was already settled.
    ///
    /// A key is recorded when its first (cheapest) item is popped, and any later
    /// item with the same key is discarded, so each key is emitted once at its
    /// minimal distance.
    pub fn dedup_by<K, F>(self, key: F) -> Dijkstra<T, D, N, C, DedupBy<F, K>>
    where
        F: FnMut(&T) -> K,
        K: Hash + Eq,
    {
        Dijkstra {
            heap: self.heap,
            next: self.next,
            cost: self.cost,
            visited: DedupBy::new(key),
            pending: self.pending,
            pushed: self.pushed,
            emitted: self.emitted,
        }
    }
}

impl<T, D: Ord, N, C, V> Dijkstra<T, D, N, C, V> {
    fn push(&mut self, item: Rc<PathItem<T, D>>) {
        self.heap.push(Queued {
            order: self.pushed,
            item,
        });
        self.pushed += 1;
    }
}

impl<T, D, N, I, C, V> Iterator for Dijkstra<T, D, N, C, V>
where
    D: Copy + Ord + Add<Output = D>,
    N: FnMut(&T, &PathItem<T, D>) -> I,
    I: IntoIterator<Item = T>,
    C: FnMut(&T, &T) -> D,
    V: Dedup<T>,
{
    type Item = Rc<PathItem<T, D>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(previous) = self.pending.take() {
            for value in (self.next)(&previous.value, &*previous) {
                let distance = previous.distance + (self.cost)(&previous.value, &value);
                self.push(previous.child(value, distance));
            }
        }

        loop {
            let Some(Queued { item, .. }) = self.heap.pop() else {
                trace!("dijkstra exhausted after {} items", self.emitted);
                return None;
            };
            if self.visited.insert(&item.value) {
                self.emitted += 1;
                self.pending = Some(Rc::clone(&item));
                return Some(item);
            }
        }
    }
}

/// Dijkstra traversal from `starts`, all at distance zero.
///
/// `next(value, item)` supplies successors and `cost(from, to)` the weight of the
/// step between them. Items come out in non-decreasing `distance`; equal distances
/// keep insertion order. Weights must be non-negative for the order to mean
/// "shortest first".
///
/// ```rust
/// use aoc_utils::graph::dijkstra;
///
/// // 0 -> 1 costs 5, 0 -> 2 costs 1, 2 -> 1 costs 1
/// let edges = [(0, 1, 5u32), (0, 2, 1), (2, 1, 1)];
/// let settled: Vec<(usize, u32)> = dijkstra(
///     [0usize],
///     |&node, _| edges.iter().filter(move |e| e.0 == node).map(|e| e.1),
///     |&from, &to| edges.iter().find(|e| e.0 == from && e.1 == to).unwrap().2,
/// )
/// .dedup_by(|&node| node)
/// .map(|item| (item.value, item.distance))
/// .collect();
///
/// assert_eq!(settled, vec![(0, 0), (2, 1), (1, 2)]);
/// ```
pub fn dijkstra<T, D, N, I, C>(
    starts: impl IntoIterator<Item = T>,
    next: N,
    cost: C,
) -> Dijkstra<T, D, N, C>
where
    D: Copy + Ord + Add<Output = D> + Default,
    N: FnMut(&T, &PathItem<T, D>) -> I,
    I: IntoIterator<Item = T>,
    C: FnMut(&T, &T) -> D,
{
    Dijkstra::new(
        starts.into_iter().map(|start| (start, D::default())),
        next,
        cost,
    )
}

/// Like [`dijkstra`], but each start carries its own initial distance.
pub fn dijkstra_with_offsets<T, D, N, I, C>(
    starts: impl IntoIterator<Item = (T, D)>,
    next: N,
    cost: C,
) -> Dijkstra<T, D, N, C>
where
    D: Copy + Ord + Add<Output = D>,
    N: FnMut(&T, &PathItem<T, D>) -> I,
    I: IntoIterator<Item = T>,
    C: FnMut(&T, &T) -> D,
{
    Dijkstra::new(starts, next, cost)
}
