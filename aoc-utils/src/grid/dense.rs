//! Dense rectangular grid.

use std::fmt;
use std::ops::{Index, IndexMut};

use super::{GridCell, Traversal, border_positions};
use crate::error::GridError;
use crate::vec::{Vec2, vec2};

/// A rectangular grid stored row-major in a single `Vec`.
///
/// `x` indexes columns and `y` rows, `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Builds a `width` x `height` grid, calling `f` for each position row by row.
    pub fn create(width: usize, height: usize, mut f: impl FnMut(Vec2) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(vec2(x as i64, y as i64)));
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    /// Builds a grid from rows, which must all have the same length.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for (row, values) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(values);
            let actual = cells.len() - before;
            if row == 0 {
                width = actual;
            } else if actual != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }
            height += 1;
        }
        // A single empty row is still an empty grid
        if width == 0 {
            height = 0;
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Vec2) -> bool {
        self.offset(pos).is_some()
    }

    fn offset(&self, pos: Vec2) -> Option<usize> {
        let x = usize::try_from(pos.x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(pos.y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }

    fn pos_of(&self, offset: usize) -> Vec2 {
        vec2((offset % self.width) as i64, (offset / self.width) as i64)
    }

    /// Value at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Vec2) -> Option<&T> {
        self.offset(pos).map(|offset| &self.cells[offset])
    }

    pub fn get_mut(&mut self, pos: Vec2) -> Option<&mut T> {
        self.offset(pos).map(|offset| &mut self.cells[offset])
    }

    /// Value at `pos` with both coordinates wrapped around, as if the grid were tiled
    /// infinitely in every direction. `None` only for an empty grid.
    pub fn mod_get(&self, pos: Vec2) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let wrapped = vec2(
            pos.x.rem_euclid(self.width as i64),
            pos.y.rem_euclid(self.height as i64),
        );
        self.get(wrapped)
    }

    /// Overwrites the value at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: Vec2, value: T) {
        self[pos] = value;
    }

    /// All cells in the given order. `reverse` flips both axes, so
    /// `Traversal::Lines` with `reverse` starts at the bottom-right cell.
    pub fn traverse(
        &self,
        order: Traversal,
        reverse: bool,
    ) -> impl DoubleEndedIterator<Item = GridCell<&T>> + '_ {
        let (outer, inner) = match order {
            Traversal::Lines => (self.height, self.width),
            Traversal::Columns => (self.width, self.height),
        };
        let positions = (0..outer * inner).map(move |i| {
            let (major, minor) = (i / inner, i % inner);
            match order {
                Traversal::Lines => vec2(minor as i64, major as i64),
                Traversal::Columns => vec2(major as i64, minor as i64),
            }
        });
        let ordered: Box<dyn DoubleEndedIterator<Item = Vec2>> = if reverse {
            Box::new(positions.rev())
        } else {
            Box::new(positions)
        };
        ordered.map(move |pos| GridCell {
            pos,
            value: &self[pos],
        })
    }

    /// Cells row by row, same as `traverse(Traversal::Lines, false)`.
    pub fn iter(&self) -> impl Iterator<Item = GridCell<&T>> + '_ {
        self.cells.iter().enumerate().map(move |(offset, value)| GridCell {
            pos: self.pos_of(offset),
            value,
        })
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Columns, left to right, each top to bottom.
    pub fn columns(&self) -> impl Iterator<Item = Vec<&T>> + '_ {
        (0..self.width).map(move |x| {
            (0..self.height)
                .map(|y| &self.cells[y * self.width + x])
                .collect()
        })
    }

    /// Perimeter cells clockwise from the top-left corner, each exactly once.
    pub fn borders(&self) -> impl Iterator<Item = GridCell<&T>> + '_ {
        border_positions(Vec2::ZERO, self.width, self.height)
            .into_iter()
            .map(move |pos| GridCell {
                pos,
                value: &self[pos],
            })
    }

    /// Builds a grid of the same shape from each cell.
    pub fn map<U>(&self, mut f: impl FnMut(GridCell<&T>) -> U) -> Grid<U> {
        Grid {
            cells: self.iter().map(&mut f).collect(),
            width: self.width,
            height: self.height,
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Rotates a quarter turn clockwise: the left column becomes the top row.
    pub fn rotate_cw(&self) -> Self {
        let h = self.height as i64;
        Self::create(self.height, self.width, |p| self[vec2(p.y, h - 1 - p.x)].clone())
    }

    /// Rotates a quarter turn counter-clockwise: the right column becomes the top row.
    pub fn rotate_ccw(&self) -> Self {
        let w = self.width as i64;
        Self::create(self.height, self.width, |p| self[vec2(w - 1 - p.y, p.x)].clone())
    }

    /// Mirrors along the main diagonal.
    pub fn transpose(&self) -> Self {
        Self::create(self.height, self.width, |p| self[vec2(p.y, p.x)].clone())
    }
}

impl Grid<char> {
    /// Parses one row per line, one cell per character.
    ///
    /// A trailing newline is ignored; all lines must have the same length.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        Self::from_rows(text.lines().map(str::chars))
    }
}

impl<T> Index<Vec2> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Vec2) -> &T {
        match self.offset(pos) {
            Some(offset) => &self.cells[offset],
            None => panic!(
                "position {pos} outside {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

impl<T> IndexMut<Vec2> for Grid<T> {
    fn index_mut(&mut self, pos: Vec2) -> &mut T {
        match self.offset(pos) {
            Some(offset) => &mut self.cells[offset],
            None => panic!(
                "position {pos} outside {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for value in row {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
