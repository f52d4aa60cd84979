//! Extrapolation of eventually periodic sequences
//!
//! Simulations that settle into a loop ("what does the platform look like after a
//! billion spins?") only need to be run until the first repeated state.
//! [`CyclicSeq`] records that prefix and answers any index in O(1).
//!
//! ```rust
//! use aoc_utils::cyclic::CyclicSeq;
//!
//! let seq = CyclicSeq::detect([1, 2, 3, 4, 2, 3, 4, 2]).unwrap();
//! assert_eq!((seq.period_start(), seq.period_length()), (1, 3));
//! assert_eq!(*seq.get(1_000_000), 2);
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use log::debug;

use crate::error::CycleError;

/// An eventually periodic sequence: a prefix followed by an infinitely repeated
/// period. Holds exactly `period_start + period_length` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicSeq<T> {
    values: Vec<T>,
    period_start: usize,
    period_length: usize,
}

impl<T> CyclicSeq<T> {
    /// Consumes `source` until a value repeats, using the value itself as the key.
    pub fn detect(source: impl IntoIterator<Item = T>) -> Result<Self, CycleError>
    where
        T: Clone + Hash + Eq,
    {
        Self::detect_by(source, |value, _| value.clone())
    }

    /// Consumes `source` until `key(value, index)` returns a key seen before.
    ///
    /// If the key at index `i` was first produced at index `j`, the period starts at
    /// `j` and is `i - j` long. The repeating value is not stored and nothing after it
    /// is pulled from the source. Fails if the source ends first.
    pub fn detect_by<K, F>(
        source: impl IntoIterator<Item = T>,
        mut key: F,
    ) -> Result<Self, CycleError>
    where
        K: Hash + Eq,
        F: FnMut(&T, usize) -> K,
    {
        let mut first_seen: HashMap<K, usize> = HashMap::new();
        let mut values = Vec::new();

        for value in source {
            let index = values.len();
            match first_seen.entry(key(&value, index)) {
                Entry::Occupied(entry) => {
                    let period_start = *entry.get();
                    let period_length = index - period_start;
                    debug!("cycle detected: starts at {period_start}, length {period_length}");
                    return Ok(Self {
                        values,
                        period_start,
                        period_length,
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(index);
                    values.push(value);
                }
            }
        }

        debug!("no cycle detected after {} values", values.len());
        Err(CycleError::NoCycle {
            observed: values.len(),
        })
    }

    /// Index of the first value that belongs to the period.
    pub fn period_start(&self) -> usize {
        self.period_start
    }

    /// Length of the period, always at least one.
    pub fn period_length(&self) -> usize {
        self.period_length
    }

    /// The values observed before the first repetition.
    pub fn observed(&self) -> &[T] {
        &self.values
    }

    /// Value at any index of the infinite sequence.
    pub fn get(&self, index: usize) -> &T {
        if index < self.period_start {
            return &self.values[index];
        }
        let offset = (index - self.period_start) % self.period_length;
        &self.values[self.period_start + offset]
    }

    /// The infinite extrapolated sequence.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..).map(move |index| self.get(index))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_lookup_before_and_inside_period() {
        let seq = CyclicSeq::detect([1, 2, 3, 4, 2, 3, 4, 2, 3]).unwrap();
        assert_eq!(seq.period_start(), 1);
        assert_eq!(seq.period_length(), 3);
        assert_eq!(seq.observed(), &[1, 2, 3, 4]);

        assert_eq!(*seq.get(0), 1);
        assert_eq!(*seq.get(1), 2);
        assert_eq!(*seq.get(4), 2);
        assert_eq!(seq.get(1_000_000), seq.get(1 + (1_000_000 - 1) % 3));
    }

    #[test]
    fn test_stops_pulling_at_first_repeat() {
        let pulled = Cell::new(0);
        let source = [0, 1, 0, 1, 0].into_iter().inspect(|_| pulled.set(pulled.get() + 1));
        let seq = CyclicSeq::detect(source).unwrap();
        assert_eq!(pulled.get(), 3);
        assert_eq!((seq.period_start(), seq.period_length()), (0, 2));
    }

    #[test]
    fn test_detect_on_infinite_source() {
        // x -> x * 3 mod 7 cycles through 1, 3, 2, 6, 4, 5
        let seq = CyclicSeq::detect(std::iter::successors(Some(1u32), |x| Some(x * 3 % 7))).unwrap();
        assert_eq!(seq.period_length(), 6);
        let head: Vec<u32> = seq.iter().take(8).copied().collect();
        assert_eq!(head, vec![1, 3, 2, 6, 4, 5, 1, 3]);
    }

    #[test]
    fn test_detect_by_custom_key() {
        // Only the remainder matters for repetition
        let seq = CyclicSeq::detect_by(10..20, |value, _| value % 4).unwrap();
        assert_eq!(seq.observed(), &[10, 11, 12, 13]);
        assert_eq!((seq.period_start(), seq.period_length()), (0, 4));
        assert_eq!(*seq.get(5), 11);
    }

    #[test]
    fn test_no_cycle_is_an_error() {
        assert_eq!(
            CyclicSeq::detect([1, 2, 3]),
            Err(CycleError::NoCycle { observed: 3 })
        );
        assert_eq!(
            CyclicSeq::<u8>::detect([]),
            Err(CycleError::NoCycle { observed: 0 })
        );
    }

    #[test]
    fn test_immediate_fixed_point() {
        let seq = CyclicSeq::detect(["a", "a"]).unwrap();
        assert_eq!((seq.period_start(), seq.period_length()), (0, 1));
        assert_eq!(*seq.get(99), "a");
    }
}
