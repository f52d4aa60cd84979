//! Two-dimensional containers
//!
//! - [`Grid`]: a dense, rectangular grid backed by one contiguous `Vec`, with
//!   rotation and traversal helpers. Reads are tolerant (`None` outside the grid).
//! - [`SparseGrid`]: a coordinate map that tracks its bounding box and offers
//!   neighbor queries, BFS and post-order DFS.
//! - [`text`]: rotation helpers working on raw multi-line strings.
//!
//! # Example
//!
//! ```rust
//! use aoc_utils::grid::{Grid, Traversal};
//! use aoc_utils::vec::vec2;
//!
//! let grid = Grid::parse("ab\ncd\nef").unwrap();
//! assert_eq!(grid.get(vec2(1, 2)), Some(&'f'));
//! assert_eq!(grid.get(vec2(2, 0)), None);
//!
//! let rotated = grid.rotate_cw();
//! assert_eq!(rotated.to_string(), "eca\nfdb");
//!
//! let by_columns: String = grid
//!     .traverse(Traversal::Columns, false)
//!     .map(|cell| *cell.value)
//!     .collect();
//! assert_eq!(by_columns, "acebdf");
//! ```

pub mod dense;
pub mod sparse;
pub mod text;

pub use dense::Grid;
pub use sparse::{Bounds, SparseGrid};

use crate::vec::{Vec2, vec2};

/// A position paired with the value found there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell<V> {
    pub pos: Vec2,
    pub value: V,
}

/// Visiting order for [`Grid::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Traversal {
    /// Row by row, left to right inside a row.
    #[default]
    Lines,
    /// Column by column, top to bottom inside a column.
    Columns,
}

/// Perimeter of a `width` x `height` rectangle, clockwise from `top_left`, each
/// position exactly once.
pub(crate) fn border_positions(top_left: Vec2, width: usize, height: usize) -> Vec<Vec2> {
    let (w, h) = (width as i64, height as i64);
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let mut positions = Vec::with_capacity(2 * (width + height));
    positions.extend((0..w).map(|x| vec2(x, 0)));
    positions.extend((1..h).map(|y| vec2(w - 1, y)));
    if h > 1 {
        positions.extend((0..w - 1).rev().map(|x| vec2(x, h - 1)));
    }
    if w > 1 {
        positions.extend((1..h - 1).rev().map(|y| vec2(0, y)));
    }
    positions.into_iter().map(|pos| pos + top_left).collect()
}
