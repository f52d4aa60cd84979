//! Property-based tests for dense and sparse grids
//!
//! These tests verify the geometric invariants of rotation and transposition and
//! the bounding box bookkeeping of the sparse grid.

use aoc_utils::grid::{Bounds, Grid, SparseGrid};
use aoc_utils::vec::{Vec2, vec2};
use proptest::prelude::*;

fn numbered(width: usize, height: usize, seed: i64) -> Grid<i64> {
    Grid::create(width, height, |pos| pos.x * 31 + pos.y * 7 + seed)
}

/// **Feature: grid-utilities, Property 1: Rotation round trip**
///
/// *For any* dense grid, four clockwise rotations give back the original grid, and a
/// clockwise rotation is undone by a counter-clockwise one.
mod property_1_rotation_round_trip {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn four_quarter_turns_are_identity(
            width in 0usize..7,
            height in 0usize..7,
            seed in -100i64..100
        ) {
            let grid = numbered(width, height, seed);
            let turned = grid.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
            prop_assert_eq!(&turned, &grid);
            prop_assert_eq!(&grid.rotate_cw().rotate_ccw(), &grid);
            prop_assert_eq!(&grid.rotate_ccw().rotate_cw(), &grid);
        }

        #[test]
        fn clockwise_maps_cells(
            width in 1usize..7,
            height in 1usize..7,
            seed in -100i64..100
        ) {
            let grid = numbered(width, height, seed);
            let rotated = grid.rotate_cw();
            prop_assert_eq!((rotated.width(), rotated.height()), (height, width));

            for y in 0..width as i64 {
                for x in 0..height as i64 {
                    let source = vec2(y, height as i64 - 1 - x);
                    prop_assert_eq!(rotated.get(vec2(x, y)), grid.get(source));
                }
            }
        }
    }
}

/// **Feature: grid-utilities, Property 2: Transpose involution**
///
/// *For any* dense grid, transposing twice is the identity and every cell `(x, y)`
/// moves to `(y, x)`.
mod property_2_transpose_involution {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn transpose_twice_is_identity(
            width in 0usize..7,
            height in 0usize..7,
            seed in -100i64..100
        ) {
            let grid = numbered(width, height, seed);
            let transposed = grid.transpose();
            prop_assert_eq!((transposed.width(), transposed.height()), (height, width));
            prop_assert_eq!(&transposed.transpose(), &grid);

            for cell in grid.iter() {
                let moved = vec2(cell.pos.y, cell.pos.x);
                prop_assert_eq!(transposed.get(moved), Some(cell.value));
            }
        }
    }
}

/// **Feature: grid-utilities, Property 3: Sparse bounds invariant**
///
/// *For any* sequence of inserts and removals, the sparse grid's bounds are the
/// tightest box around the stored keys, or `None` once the grid is empty.
mod property_3_sparse_bounds {
    use super::*;

    fn tight_bounds(positions: impl IntoIterator<Item = Vec2>) -> Option<Bounds> {
        positions.into_iter().fold(None, |acc: Option<Bounds>, pos| {
            Some(acc.map_or_else(|| Bounds::of(pos), |bounds| bounds.extend(pos)))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn bounds_track_keys(
            ops in prop::collection::vec((-10i64..10, -10i64..10, any::<bool>()), 0..40)
        ) {
            let mut grid = SparseGrid::new();
            for (step, (x, y, remove)) in ops.into_iter().enumerate() {
                if remove {
                    grid.remove(vec2(x, y));
                } else {
                    grid.set(vec2(x, y), step);
                }

                let expected = tight_bounds(grid.iter().map(|cell| cell.pos));
                prop_assert_eq!(grid.bounds(), expected);
                if let Some(bounds) = grid.bounds() {
                    prop_assert!(grid.iter().all(|cell| bounds.contains(cell.pos)));
                    prop_assert_eq!(grid.width(), bounds.width());
                } else {
                    prop_assert!(grid.is_empty());
                }
            }
        }
    }
}
