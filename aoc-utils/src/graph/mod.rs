//! Generic state-space searches
//!
//! [`dfs`], [`bfs`] and [`dijkstra`] walk any state type `T`. The caller describes
//! the graph with a successor function `next(&value, &path_item)`, and each search is
//! an [`Iterator`] of [`PathItem`]s, so the usual adapters (`find`, `take_while`,
//! `filter`) drive it and dropping the iterator cancels it.
//!
//! By default states may be revisited. Attach `.dedup_by(key)` to keep one item per
//! key: DFS/BFS record keys when a state is pushed, Dijkstra when it is popped.
//!
//! # Example
//!
//! ```rust
//! use aoc_utils::graph::bfs;
//! use aoc_utils::vec::{Vec2, vec2};
//!
//! let walls = [vec2(1, 0), vec2(1, 1)];
//! let open = |p: &Vec2| (0..3).contains(&p.x) && (0..3).contains(&p.y) && !walls.contains(p);
//!
//! let target = bfs([vec2(0, 0)], |p: &Vec2, _| p.around4().into_iter().filter(open))
//!     .dedup_by(|p| *p)
//!     .find(|item| item.value == vec2(2, 0))
//!     .unwrap();
//!
//! assert_eq!(target.distance, 6);
//! assert_eq!(target.path().first(), Some(&&vec2(0, 0)));
//! ```

mod dedup;
mod dijkstra;
mod path;
mod search;

pub use dedup::{Dedup, DedupBy, NoDedup};
pub use dijkstra::{Dijkstra, dijkstra, dijkstra_with_offsets};
pub use path::{Ancestors, PathItem};
pub use search::{Bfs, Dfs, Fifo, Frontier, Lifo, Search, bfs, dfs};
