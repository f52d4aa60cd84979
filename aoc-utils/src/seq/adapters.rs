//! Iterator adapters backing [`SeqExt`](super::SeqExt).

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use std::iter::{FusedIterator, Fuse};

/// Delays the source by `n` items and drops the final `n`.
///
/// Created by [`SeqExt::skip_last`](super::SeqExt::skip_last).
#[derive(Debug, Clone)]
pub struct SkipLast<I: Iterator> {
    iter: I,
    buffer: VecDeque<I::Item>,
    n: usize,
}

impl<I: Iterator> SkipLast<I> {
    pub(super) fn new(iter: I, n: usize) -> Self {
        Self {
            iter,
            buffer: VecDeque::with_capacity(n),
            n,
        }
    }
}

impl<I: Iterator> Iterator for SkipLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if self.n == 0 {
                return Some(item);
            }
            self.buffer.push_back(item);
            if self.buffer.len() > self.n {
                return self.buffer.pop_front();
            }
        }
    }
}

/// Consecutive non-overlapping chunks, the last one possibly shorter.
///
/// Created by [`SeqExt::groups_of`](super::SeqExt::groups_of).
#[derive(Debug, Clone)]
pub struct GroupsOf<I> {
    iter: Fuse<I>,
    size: usize,
}

impl<I: Iterator> GroupsOf<I> {
    pub(super) fn new(iter: I, size: usize) -> Self {
        assert!(size > 0, "group size must be positive");
        Self {
            iter: iter.fuse(),
            size,
        }
    }
}

impl<I: Iterator> Iterator for GroupsOf<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let group: Vec<_> = self.iter.by_ref().take(self.size).collect();
        (!group.is_empty()).then_some(group)
    }
}

impl<I: Iterator> FusedIterator for GroupsOf<I> {}

/// Overlapping windows of exactly `size` consecutive items.
///
/// Created by [`SeqExt::windowed`](super::SeqExt::windowed).
#[derive(Debug, Clone)]
pub struct Windowed<I: Iterator> {
    iter: I,
    buffer: VecDeque<I::Item>,
    size: usize,
}

impl<I: Iterator> Windowed<I> {
    pub(super) fn new(iter: I, size: usize) -> Self {
        Self {
            iter,
            buffer: VecDeque::with_capacity(size + 1),
            size,
        }
    }
}

impl<I> Iterator for Windowed<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 {
            return None;
        }
        loop {
            self.buffer.push_back(self.iter.next()?);
            if self.buffer.len() > self.size {
                self.buffer.pop_front();
            }
            if self.buffer.len() == self.size {
                return Some(self.buffer.iter().cloned().collect());
            }
        }
    }
}

/// First occurrence of every derived key, in source order.
///
/// Created by [`SeqExt::distinct`](super::SeqExt::distinct) and
/// [`SeqExt::distinct_by`](super::SeqExt::distinct_by).
#[derive(Debug, Clone)]
pub struct DistinctBy<I, F, K> {
    iter: I,
    key: F,
    seen: HashSet<K>,
}

impl<I, F, K> DistinctBy<I, F, K> {
    pub(super) fn new(iter: I, key: F) -> Self {
        Self {
            iter,
            key,
            seen: HashSet::new(),
        }
    }
}

impl<I, F, K> Iterator for DistinctBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self { iter, key, seen } = self;
        iter.find(|item| seen.insert(key(item)))
    }
}

/// Stops before the first item matching the predicate.
///
/// Created by [`SeqExt::take_until`](super::SeqExt::take_until).
#[derive(Debug, Clone)]
pub struct TakeUntil<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> TakeUntil<I, P> {
    pub(super) fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            done: false,
        }
    }
}

impl<I, P> Iterator for TakeUntil<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.iter.next()?;
        if (self.predicate)(&item) {
            self.done = true;
            None
        } else {
            Some(item)
        }
    }
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> FusedIterator for TakeUntil<I, P> {}

/// Every `every`-th item after an initial skip.
///
/// Created by [`SeqExt::take_every`](super::SeqExt::take_every).
#[derive(Debug, Clone)]
pub struct TakeEvery<I> {
    iter: I,
    every: usize,
    countdown: usize,
}

impl<I> TakeEvery<I> {
    pub(super) fn new(iter: I, every: usize, skip_initial: usize) -> Self {
        Self {
            iter,
            every,
            countdown: skip_initial,
        }
    }
}

impl<I: Iterator> Iterator for TakeEvery<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.every == 0 {
            return None;
        }
        loop {
            let item = self.iter.next()?;
            if self.countdown == 0 {
                self.countdown = self.every - 1;
                return Some(item);
            }
            self.countdown -= 1;
        }
    }
}

/// Infinite sequence `seed, f(seed, 0), f(f(seed, 0), 1), ...`.
///
/// Created by [`iterate`](super::iterate).
#[derive(Debug, Clone)]
pub struct Iterate<T, F> {
    next: Option<T>,
    step: F,
    index: usize,
}

impl<T, F> Iterate<T, F> {
    pub(super) fn new(seed: T, step: F) -> Self {
        Self {
            next: Some(seed),
            step,
            index: 0,
        }
    }
}

impl<T, F> Iterator for Iterate<T, F>
where
    F: FnMut(&T, usize) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.take()?;
        self.next = Some((self.step)(&current, self.index));
        self.index += 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
