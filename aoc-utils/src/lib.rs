//! Advent of Code utility library
//!
//! Building blocks that come up in almost every puzzle: coordinates, dense and
//! sparse grids, lazy graph searches, cycle extrapolation, interval arithmetic and
//! small text parsers.
//!
//! # Overview
//!
//! This library provides:
//! - [`seq`]: extra lazy adapters and terminals for every iterator ([`SeqExt`])
//! - [`vec`]: `Vec2`/`Vec3` integer coordinates with direction tables
//! - [`grid`]: a dense rectangular [`Grid`] and an unbounded [`SparseGrid`]
//! - [`graph`]: lazy DFS, BFS and Dijkstra over implicit graphs
//! - [`cyclic`]: [`CyclicSeq`] for indexing far into eventually periodic sequences
//! - [`parser`]: parser combinators, a type registry and line templates
//! - [`range`] and [`math`]: closed intervals and a quadratic solver
//!
//! # Quick Example
//!
//! ```
//! use aoc_utils::graph::bfs;
//! use aoc_utils::grid::Grid;
//! use aoc_utils::vec::vec2;
//!
//! let maze = Grid::parse("S.#\n..#\n#.E").unwrap();
//! let end = maze.iter().find(|cell| *cell.value == 'E').unwrap().pos;
//!
//! let steps = bfs([vec2(0, 0)], |pos, _| {
//!     pos.around4()
//!         .into_iter()
//!         .filter(|next| maze.get(*next).is_some_and(|c| *c != '#'))
//!         .collect::<Vec<_>>()
//! })
//! .dedup_by(|pos| *pos)
//! .find(|item| item.value == end)
//! .map(|item| item.distance);
//!
//! assert_eq!(steps, Some(4));
//! ```
//!
//! # Key Concepts
//!
//! ## Laziness
//!
//! Searches and sequence adapters only do work when pulled. Taking the first
//! matching item stops the search, and dropping the iterator cancels it.
//!
//! ## Logging
//!
//! Notable events (cycle detection, template compilation, search exhaustion,
//! sparse bounds recomputation) are emitted through the [`log`] facade at `debug`
//! and `trace` level. The library never installs a logger.

pub mod cyclic;
pub mod error;
pub mod graph;
pub mod grid;
pub mod math;
pub mod parser;
pub mod range;
pub mod seq;
pub mod vec;

// Re-export the most used types at the crate root
pub use cyclic::CyclicSeq;
pub use error::{CycleError, GridError, ParseError, RegistrationError};
pub use graph::PathItem;
pub use grid::{Grid, GridCell, SparseGrid};
pub use range::Interval;
pub use seq::SeqExt;
pub use vec::{Vec2, Vec3, vec2, vec3};
