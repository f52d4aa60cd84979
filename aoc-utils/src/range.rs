//! Closed integer intervals
//!
//! [`Interval`] is the building block for puzzles that shift, split and merge
//! ranges of seeds, coordinates or ids without enumerating them.
//!
//! ```rust
//! use aoc_utils::range::Interval;
//!
//! let seeds = Interval::new(10, 20);
//! let holes = [Interval::new(12, 13), Interval::new(18, 25)];
//! assert_eq!(
//!     seeds.exclude_all(holes),
//!     vec![Interval::new(10, 11), Interval::new(14, 17)]
//! );
//! ```

use std::fmt;
use std::ops::RangeInclusive;

/// Closed interval `[start, end]` over `i64`, never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    /// Creates the interval between two bounds, in either order.
    pub fn new(a: i64, b: i64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of integers in the interval. `u128` because the full `i64` range
    /// holds 2^64 of them.
    pub fn size(&self) -> u128 {
        u128::from(self.end.abs_diff(self.start)) + 1
    }

    pub fn mid(&self) -> f64 {
        (self.start as f64 + self.end as f64) / 2.0
    }

    /// Midpoint rounded towards negative infinity.
    pub fn mid_floor(&self) -> i64 {
        (i128::from(self.start) + i128::from(self.end)).div_euclid(2) as i64
    }

    /// Sub-interval clamped to `self`.
    ///
    /// Both bounds are clamped into the interval, and `end` is raised to `start`
    /// if it falls before it, so the result is never empty.
    ///
    /// ```rust
    /// use aoc_utils::range::Interval;
    ///
    /// let r = Interval::new(5, 10);
    /// assert_eq!(r.slice(0, 7), Interval::new(5, 7));
    /// assert_eq!(r.slice(8, 100), Interval::new(8, 10));
    /// assert_eq!(r.slice(9, 2), Interval::new(9, 9));
    /// ```
    pub fn slice(&self, start: i64, end: i64) -> Self {
        let start = start.clamp(self.start, self.end);
        let end = end.clamp(start, self.end);
        Self { start, end }
    }

    /// Grows both ends by `amount`. A negative amount shrinks, and bounds that
    /// cross are swapped by [`Interval::new`].
    pub fn expand_by(&self, amount: i64) -> Self {
        Self::new(self.start - amount, self.end + amount)
    }

    pub fn shift_by(&self, amount: i64) -> Self {
        Self {
            start: self.start + amount,
            end: self.end + amount,
        }
    }

    /// Whether the intervals share at least one integer.
    pub fn intersects(&self, other: &Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn includes(&self, value: i64) -> bool {
        (self.start..=self.end).contains(&value)
    }

    /// Whether `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        self.intersects(other).then(|| Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Smallest interval covering both, including any gap between them.
    pub fn union(&self, other: &Interval) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The parts of `self` not covered by `other`, left to right.
    ///
    /// # Returns
    /// * No pieces when `other` covers `self`
    /// * `[self]` when they do not intersect
    /// * One piece when `other` covers one end
    /// * Two pieces when `other` sits strictly inside
    pub fn exclude(&self, other: &Interval) -> Vec<Interval> {
        if !self.intersects(other) {
            return vec![*self];
        }

        let mut pieces = Vec::with_capacity(2);
        if other.start > self.start {
            pieces.push(Self {
                start: self.start,
                end: other.start - 1,
            });
        }
        if other.end < self.end {
            pieces.push(Self {
                start: other.end + 1,
                end: self.end,
            });
        }
        pieces
    }

    /// The parts of `self` covered by none of `others`, left to right.
    ///
    /// `others` may overlap each other and come in any order.
    pub fn exclude_all(&self, others: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
        let mut others: Vec<Interval> = others
            .into_iter()
            .filter(|other| self.intersects(other))
            .collect();
        others.sort_unstable();

        let mut pieces = Vec::new();
        let mut cursor = self.start;
        for other in others {
            if other.start > cursor {
                pieces.push(Self {
                    start: cursor,
                    end: other.start - 1,
                });
            }
            if other.end >= self.end {
                return pieces;
            }
            cursor = cursor.max(other.end + 1);
        }
        pieces.push(Self {
            start: cursor,
            end: self.end,
        });
        pieces
    }

    pub fn iter(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }
}

impl IntoIterator for Interval {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<RangeInclusive<i64>> for Interval {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
