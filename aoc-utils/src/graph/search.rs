//! Depth-first and breadth-first traversal over arbitrary state spaces.

use std::collections::VecDeque;
use std::hash::Hash;
use std::rc::Rc;

use log::trace;

use super::dedup::{Dedup, DedupBy, NoDedup};
use super::path::PathItem;

/// Storage for items waiting to be emitted.
pub trait Frontier<T>: Default {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    fn retain<P: FnMut(&T) -> bool>(&mut self, predicate: P);
}

/// Most recently pushed item first.
#[derive(Debug)]
pub struct Lifo<T>(Vec<T>);

impl<T> Default for Lifo<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Frontier<T> for Lifo<T> {
    fn push(&mut self, item: T) {
        self.0.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn retain<P: FnMut(&T) -> bool>(&mut self, predicate: P) {
        self.0.retain(predicate);
    }
}

/// First pushed item first.
#[derive(Debug)]
pub struct Fifo<T>(VecDeque<T>);

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> Frontier<T> for Fifo<T> {
    fn push(&mut self, item: T) {
        self.0.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn retain<P: FnMut(&T) -> bool>(&mut self, predicate: P) {
        self.0.retain(predicate);
    }
}

/// A lazy traversal emitting [`PathItem`]s in the order its frontier hands them out.
///
/// Successors of an item are only requested when the item after it is pulled, so
/// stopping right after finding a target never expands the target.
#[derive(Debug)]
pub struct Search<T, N, V, Q> {
    frontier: Q,
    next: N,
    visited: V,
    pending: Option<Rc<PathItem<T>>>,
    emitted: usize,
}

/// Depth-first search, see [`dfs`].
pub type Dfs<T, N, V = NoDedup> = Search<T, N, V, Lifo<Rc<PathItem<T>>>>;

/// Breadth-first search, see [`bfs`].
pub type Bfs<T, N, V = NoDedup> = Search<T, N, V, Fifo<Rc<PathItem<T>>>>;

impl<T, N, Q> Search<T, N, NoDedup, Q>
where
    Q: Frontier<Rc<PathItem<T>>>,
{
    fn new(starts: impl IntoIterator<Item = T>, next: N) -> Self {
        let mut frontier = Q::default();
        for start in starts {
            frontier.push(PathItem::root(start, 0));
        }
        Self {
            frontier,
            next,
            visited: NoDedup,
            pending: None,
            emitted: 0,
        }
    }

    /// Skips states whose `key` was already seen.
    ///
    /// Start states are recorded immediately, and successors are recorded when they
    /// are pushed, so every key is emitted at most once.
    pub fn dedup_by<K, F>(self, key: F) -> Search<T, N, DedupBy<F, K>, Q>
    where
        F: FnMut(&T) -> K,
        K: Hash + Eq,
    {
        let mut visited = DedupBy::new(key);
        let mut frontier = self.frontier;
        frontier.retain(|item| visited.insert(&item.value));
        Search {
            frontier,
            next: self.next,
            visited,
            pending: self.pending,
            emitted: self.emitted,
        }
    }
}

impl<T, N, I, V, Q> Iterator for Search<T, N, V, Q>
where
    N: FnMut(&T, &PathItem<T>) -> I,
    I: IntoIterator<Item = T>,
    V: Dedup<T>,
    Q: Frontier<Rc<PathItem<T>>>,
{
    type Item = Rc<PathItem<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(previous) = self.pending.take() {
            for value in (self.next)(&previous.value, &*previous) {
                if self.visited.insert(&value) {
                    self.frontier
                        .push(previous.child(value, previous.distance + 1));
                }
            }
        }

        let Some(current) = self.frontier.pop() else {
            trace!("search exhausted after {} items", self.emitted);
            return None;
        };
        self.emitted += 1;
        self.pending = Some(Rc::clone(&current));
        Some(current)
    }
}

/// Depth-first traversal from `starts`.
///
/// Items are emitted most-recently-pushed first; `next(value, item)` supplies the
/// successors of an emitted item. Without [`Search::dedup_by`] states can be visited
/// again, which is what searches over "same position, different history" need, but
/// it will not terminate on a cyclic graph.
///
/// ```rust
/// use aoc_utils::graph::dfs;
///
/// // Binary strings up to length 2
/// let all: Vec<String> = dfs([String::new()], |s: &String, _| {
///     if s.len() < 2 { vec![format!("{s}1"), format!("{s}0")] } else { vec![] }
/// })
/// .map(|item| item.value.clone())
/// .collect();
///
/// assert_eq!(all, ["", "0", "00", "01", "1", "10", "11"]);
/// ```
pub fn dfs<T, N, I>(starts: impl IntoIterator<Item = T>, next: N) -> Dfs<T, N>
where
    N: FnMut(&T, &PathItem<T>) -> I,
    I: IntoIterator<Item = T>,
{
    Search::new(starts, next)
}

/// Breadth-first traversal from `starts`.
///
/// Items are emitted in FIFO order, so `distance` never decreases along the output
/// and every item is exactly one step further than its parent.
///
/// ```rust
/// use aoc_utils::graph::bfs;
///
/// let reached = bfs([1u32], |&n, _| [n * 2, n + 1].into_iter().filter(|&m| m <= 10))
///     .dedup_by(|&n| n)
///     .find(|item| item.value == 10)
///     .unwrap();
///
/// assert_eq!(reached.distance, 4); // 1 -> 2 -> 4 -> 5 -> 10
/// ```
pub fn bfs<T, N, I>(starts: impl IntoIterator<Item = T>, next: N) -> Bfs<T, N>
where
    N: FnMut(&T, &PathItem<T>) -> I,
    I: IntoIterator<Item = T>,
{
    Search::new(starts, next)
}
