//! Sparse, unbounded grid keyed by coordinate.

use std::cell::Cell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;

use log::trace;

use super::{GridCell, border_positions};
use crate::graph::PathItem;
use crate::vec::{Vec2, vec2};

/// Search record produced by [`SparseGrid::bfs`] and [`dfs`]. The value is `None`
/// when the search stepped onto an unset position.
pub type GridPathItem<'a, T> = PathItem<GridCell<Option<&'a T>>>;

type Neighbors<T> = Rc<dyn Fn(Vec2, &SparseGrid<T>) -> Vec<Vec2>>;

/// Inclusive bounding box of a set of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    /// Box covering exactly one position.
    pub fn of(pos: Vec2) -> Self {
        Self {
            min_x: pos.x,
            min_y: pos.y,
            max_x: pos.x,
            max_y: pos.y,
        }
    }

    /// Box spanning both corners, in any order.
    pub fn spanning(a: Vec2, b: Vec2) -> Self {
        Self::of(a).extend(b)
    }

    /// Smallest box covering `self` and `pos`.
    pub fn extend(self, pos: Vec2) -> Self {
        Self {
            min_x: self.min_x.min(pos.x),
            min_y: self.min_y.min(pos.y),
            max_x: self.max_x.max(pos.x),
            max_y: self.max_y.max(pos.y),
        }
    }

    pub fn top_left(&self) -> Vec2 {
        vec2(self.min_x, self.min_y)
    }

    pub fn bot_right(&self) -> Vec2 {
        vec2(self.max_x, self.max_y)
    }

    pub fn width(&self) -> usize {
        (self.max_x - self.min_x + 1) as usize
    }

    pub fn height(&self) -> usize {
        (self.max_y - self.min_y + 1) as usize
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        (self.min_x..=self.max_x).contains(&pos.x) && (self.min_y..=self.max_y).contains(&pos.y)
    }
}

/// A map from [`Vec2`] to `T` that keeps track of the bounding box of its keys.
///
/// Bounds grow incrementally on [`set`](Self::set). [`remove`](Self::remove) may
/// shrink them, so it only marks the cache stale and the next read rescans the keys.
pub struct SparseGrid<T> {
    cells: HashMap<Vec2, T>,
    bounds: Cell<Option<Bounds>>,
    stale: Cell<bool>,
    neighbors: Option<Neighbors<T>>,
}

impl<T> SparseGrid<T> {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
            bounds: Cell::new(None),
            stale: Cell::new(false),
            neighbors: None,
        }
    }

    /// Builds a grid from rows, `(0, 0)` being the first value of the first row.
    /// Rows may differ in length.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = T>,
    {
        rows.into_iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.into_iter()
                    .enumerate()
                    .map(move |(x, value)| (vec2(x as i64, y as i64), value))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Inserts or overwrites, returning the previous value.
    pub fn set(&mut self, pos: Vec2, value: T) -> Option<T> {
        if !self.stale.get() {
            let bounds = match self.bounds.get() {
                Some(bounds) => bounds.extend(pos),
                None => Bounds::of(pos),
            };
            self.bounds.set(Some(bounds));
        }
        self.cells.insert(pos, value)
    }

    pub fn get(&self, pos: Vec2) -> Option<&T> {
        self.cells.get(&pos)
    }

    pub fn get_mut(&mut self, pos: Vec2) -> Option<&mut T> {
        self.cells.get_mut(&pos)
    }

    /// Whether a value is stored at `pos`, whatever that value is.
    pub fn has(&self, pos: Vec2) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Removes the value at `pos`. Bounds are recomputed on the next read.
    pub fn remove(&mut self, pos: Vec2) -> Option<T> {
        let removed = self.cells.remove(&pos);
        if removed.is_some() {
            self.stale.set(true);
        }
        removed
    }

    /// Position paired with whatever is stored there.
    pub fn cell(&self, pos: Vec2) -> GridCell<Option<&T>> {
        GridCell {
            pos,
            value: self.get(pos),
        }
    }

    /// Tight bounding box of all keys, `None` for an empty grid.
    pub fn bounds(&self) -> Option<Bounds> {
        if self.stale.get() {
            let recomputed = self
                .cells
                .keys()
                .fold(None, |acc: Option<Bounds>, &pos| {
                    Some(acc.map_or_else(|| Bounds::of(pos), |bounds| bounds.extend(pos)))
                });
            trace!("recomputed sparse grid bounds: {recomputed:?}");
            self.bounds.set(recomputed);
            self.stale.set(false);
        }
        self.bounds.get()
    }

    pub fn width(&self) -> usize {
        self.bounds().map_or(0, |bounds| bounds.width())
    }

    pub fn height(&self) -> usize {
        self.bounds().map_or(0, |bounds| bounds.height())
    }

    /// All stored cells, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = GridCell<&T>> + '_ {
        self.cells
            .iter()
            .map(|(&pos, value)| GridCell { pos, value })
    }

    /// Stored orthogonal neighbors of `pos`; missing ones are omitted.
    pub fn around4(&self, pos: Vec2) -> Vec<GridCell<&T>> {
        self.existing(pos.around4())
    }

    /// Stored orthogonal and diagonal neighbors of `pos`.
    pub fn around8(&self, pos: Vec2) -> Vec<GridCell<&T>> {
        self.existing(pos.around8())
    }

    fn existing(&self, positions: impl IntoIterator<Item = Vec2>) -> Vec<GridCell<&T>> {
        positions
            .into_iter()
            .filter_map(|pos| self.get(pos).map(|value| GridCell { pos, value }))
            .collect()
    }

    /// Replaces the adjacency used by [`bfs`](Self::bfs). The default is the stored
    /// orthogonal neighbors.
    pub fn set_neighbors(
        &mut self,
        neighbors: impl Fn(Vec2, &SparseGrid<T>) -> Vec<Vec2> + 'static,
    ) -> &mut Self {
        self.neighbors = Some(Rc::new(neighbors));
        self
    }

    fn neighbors_of(&self, pos: Vec2) -> Vec<Vec2> {
        match &self.neighbors {
            Some(neighbors) => neighbors(pos, self),
            None => pos.around4().into_iter().filter(|&p| self.has(p)).collect(),
        }
    }

    /// Breadth-first search from `starts` over the configured adjacency.
    ///
    /// `can_go_from_to(current, candidate)` vets every step and sees both items,
    /// so rules may depend on values, distances or the path so far. Positions are
    /// deduplicated when dequeued: the first item popped for a position wins.
    pub fn bfs<'a, P>(
        &'a self,
        can_go_from_to: P,
        starts: impl IntoIterator<Item = Vec2>,
    ) -> GridBfs<'a, T, P>
    where
        P: FnMut(&GridPathItem<'a, T>, &GridPathItem<'a, T>) -> bool,
    {
        GridBfs {
            grid: self,
            can_go_from_to,
            queue: starts
                .into_iter()
                .map(|pos| PathItem::root(self.cell(pos), 0))
                .collect(),
            visited: HashSet::new(),
            pending: None,
        }
    }

    /// Builds a grid with the same keys and transformed values.
    pub fn map<U>(&self, mut f: impl FnMut(&T, Vec2) -> U) -> SparseGrid<U> {
        let mapped: SparseGrid<U> = self
            .cells
            .iter()
            .map(|(&pos, value)| (pos, f(value, pos)))
            .collect();
        mapped.bounds.set(self.bounds());
        mapped.stale.set(false);
        mapped
    }

    /// Rows of the bounding box, top to bottom, each paired with its `y`.
    /// Unset positions yield `None`.
    pub fn lines(&self) -> impl Iterator<Item = (i64, Vec<GridCell<Option<&T>>>)> + '_ {
        let bounds = self.bounds();
        bounds
            .into_iter()
            .flat_map(|b| b.min_y..=b.max_y)
            .map(move |y| {
                let row = bounds
                    .into_iter()
                    .flat_map(|b| b.min_x..=b.max_x)
                    .map(|x| self.cell(vec2(x, y)))
                    .collect();
                (y, row)
            })
    }

    /// Columns of the bounding box, left to right, each paired with its `x`.
    pub fn columns(&self) -> impl Iterator<Item = (i64, Vec<GridCell<Option<&T>>>)> + '_ {
        let bounds = self.bounds();
        bounds
            .into_iter()
            .flat_map(|b| b.min_x..=b.max_x)
            .map(move |x| {
                let column = bounds
                    .into_iter()
                    .flat_map(|b| b.min_y..=b.max_y)
                    .map(|y| self.cell(vec2(x, y)))
                    .collect();
                (x, column)
            })
    }

    /// Perimeter of the bounding box clockwise from the top-left, each position once.
    pub fn borders(&self) -> impl Iterator<Item = GridCell<Option<&T>>> + '_ {
        let positions = match self.bounds() {
            Some(b) => border_positions(b.top_left(), b.width(), b.height()),
            None => Vec::new(),
        };
        positions.into_iter().map(move |pos| self.cell(pos))
    }

    /// Converts a window to nested rows. `window` defaults to the bounding box.
    pub fn to_2d_array<J>(
        &self,
        window: Option<Bounds>,
        mut f: impl FnMut(Option<&T>) -> J,
    ) -> Vec<Vec<J>> {
        let Some(window) = window.or_else(|| self.bounds()) else {
            return Vec::new();
        };
        (window.min_y..=window.max_y)
            .map(|y| {
                (window.min_x..=window.max_x)
                    .map(|x| f(self.get(vec2(x, y))))
                    .collect()
            })
            .collect()
    }
}

impl<T: fmt::Display> SparseGrid<T> {
    /// Renders a window as text, one line per row, `placeholder` for unset cells.
    pub fn render(&self, window: Option<Bounds>, placeholder: &str) -> String {
        self.to_2d_array(window, |value| match value {
            Some(value) => value.to_string(),
            None => placeholder.to_string(),
        })
        .into_iter()
        .map(|row| row.concat())
        .collect::<Vec<_>>()
        .join("\n")
    }
}

impl SparseGrid<char> {
    /// Parses one row per line, one cell per character, keeping every character.
    pub fn parse(text: &str) -> Self {
        Self::from_rows(text.lines().map(str::chars))
    }
}

impl<T> Default for SparseGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SparseGrid<T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            bounds: self.bounds.clone(),
            stale: self.stale.clone(),
            neighbors: self.neighbors.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseGrid")
            .field("cells", &self.cells)
            .field("bounds", &self.bounds())
            .field("custom_neighbors", &self.neighbors.is_some())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for SparseGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None, "."))
    }
}

impl<T> FromIterator<(Vec2, T)> for SparseGrid<T> {
    fn from_iter<I: IntoIterator<Item = (Vec2, T)>>(iter: I) -> Self {
        let mut grid = Self::new();
        grid.extend(iter);
        grid
    }
}

impl<T> Extend<(Vec2, T)> for SparseGrid<T> {
    fn extend<I: IntoIterator<Item = (Vec2, T)>>(&mut self, iter: I) {
        for (pos, value) in iter {
            self.set(pos, value);
        }
    }
}

/// Lazy breadth-first search over a [`SparseGrid`], see [`SparseGrid::bfs`].
pub struct GridBfs<'a, T, P> {
    grid: &'a SparseGrid<T>,
    can_go_from_to: P,
    queue: VecDeque<Rc<GridPathItem<'a, T>>>,
    visited: HashSet<Vec2>,
    pending: Option<Rc<GridPathItem<'a, T>>>,
}

impl<'a, T, P> Iterator for GridBfs<'a, T, P>
where
    P: FnMut(&GridPathItem<'a, T>, &GridPathItem<'a, T>) -> bool,
{
    type Item = Rc<GridPathItem<'a, T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current) = self.pending.take() {
            for pos in self.grid.neighbors_of(current.value.pos) {
                let candidate = current.child(self.grid.cell(pos), current.distance + 1);
                if (self.can_go_from_to)(&current, &candidate) {
                    self.queue.push_back(candidate);
                }
            }
        }

        while let Some(current) = self.queue.pop_front() {
            if self.visited.insert(current.value.pos) {
                self.pending = Some(Rc::clone(&current));
                return Some(current);
            }
        }
        None
    }
}

/// Depth-first walk over a [`SparseGrid`] that emits items on the way back up.
///
/// From the current item the walk steps to the first position returned by
/// `get_next(pos, grid)` that was not visited yet. When there is none, the current
/// item is emitted and the walk backtracks to its parent. Every item is therefore
/// emitted only after everything reachable from it was explored, and the start is
/// emitted last.
///
/// ```rust
/// use aoc_utils::grid::{SparseGrid, sparse};
/// use aoc_utils::vec::vec2;
///
/// let grid = SparseGrid::parse("###");
/// let order: Vec<i64> = sparse::dfs(&grid, |pos, g| {
///     pos.around4().into_iter().filter(|&p| g.has(p)).collect::<Vec<_>>()
/// }, vec2(0, 0))
/// .map(|item| item.value.pos.x)
/// .collect();
///
/// assert_eq!(order, vec![2, 1, 0]);
/// ```
pub fn dfs<T, N, I>(grid: &SparseGrid<T>, get_next: N, start: Vec2) -> GridDfs<'_, T, N>
where
    N: FnMut(Vec2, &SparseGrid<T>) -> I,
    I: IntoIterator<Item = Vec2>,
{
    GridDfs {
        grid,
        get_next,
        visited: HashSet::from([start]),
        current: Some(PathItem::root(grid.cell(start), 0)),
    }
}

/// Iterator returned by [`dfs`].
pub struct GridDfs<'a, T, N> {
    grid: &'a SparseGrid<T>,
    get_next: N,
    visited: HashSet<Vec2>,
    current: Option<Rc<GridPathItem<'a, T>>>,
}

impl<'a, T, N, I> Iterator for GridDfs<'a, T, N>
where
    N: FnMut(Vec2, &SparseGrid<T>) -> I,
    I: IntoIterator<Item = Vec2>,
{
    type Item = Rc<GridPathItem<'a, T>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.current.take()?;
            let step = (self.get_next)(current.value.pos, self.grid)
                .into_iter()
                .find(|pos| !self.visited.contains(pos));

            match step {
                Some(pos) => {
                    self.visited.insert(pos);
                    self.current = Some(current.child(self.grid.cell(pos), current.distance + 1));
                }
                None => {
                    self.current = current.parent.clone();
                    return Some(current);
                }
            }
        }
    }
}
