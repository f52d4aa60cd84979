//! Integer coordinate types shared by the grids and the search toolkit.
//!
//! Both types derive structural `Eq`, `Hash` and `Ord`, so they can be used directly
//! as `HashMap`/`HashSet` keys.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 2D integer coordinate. `y` grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2 {
    pub x: i64,
    pub y: i64,
}

/// Shorthand constructor for [`Vec2`].
pub const fn vec2(x: i64, y: i64) -> Vec2 {
    Vec2 { x, y }
}

impl Vec2 {
    pub const ZERO: Vec2 = vec2(0, 0);
    pub const UP: Vec2 = vec2(0, -1);
    pub const RIGHT: Vec2 = vec2(1, 0);
    pub const DOWN: Vec2 = vec2(0, 1);
    pub const LEFT: Vec2 = vec2(-1, 0);

    /// Manhattan distance to `other`.
    pub fn manhattan(self, other: Vec2) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Orthogonal neighbors in [`DIRS_4`] order.
    pub fn around4(self) -> [Vec2; 4] {
        DIRS_4.map(|dir| self + dir)
    }

    /// All eight neighbors in [`DIRS_8`] order.
    pub fn around8(self) -> [Vec2; 8] {
        DIRS_8.map(|dir| self + dir)
    }
}

/// Orthogonal directions: up, right, down, left.
pub const DIRS_4: [Vec2; 4] = [Vec2::UP, Vec2::RIGHT, Vec2::DOWN, Vec2::LEFT];

/// Orthogonal and diagonal directions, clockwise starting from up.
pub const DIRS_8: [Vec2; 8] = [
    vec2(0, -1),
    vec2(1, -1),
    vec2(1, 0),
    vec2(1, 1),
    vec2(0, 1),
    vec2(-1, 1),
    vec2(-1, 0),
    vec2(-1, -1),
];

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        vec2(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        vec2(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Mul<i64> for Vec2 {
    type Output = Vec2;

    fn mul(self, factor: i64) -> Vec2 {
        vec2(self.x * factor, self.y * factor)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        vec2(-self.x, -self.y)
    }
}

impl From<(i64, i64)> for Vec2 {
    fn from((x, y): (i64, i64)) -> Self {
        vec2(x, y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A 3D integer coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

/// Shorthand constructor for [`Vec3`].
pub const fn vec3(x: i64, y: i64, z: i64) -> Vec3 {
    Vec3 { x, y, z }
}

impl Vec3 {
    pub const ZERO: Vec3 = vec3(0, 0, 0);

    /// Componentwise minimum.
    pub fn min(self, other: Vec3) -> Vec3 {
        vec3(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Componentwise maximum.
    pub fn max(self, other: Vec3) -> Vec3 {
        vec3(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    pub fn manhattan(self, other: Vec3) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }

    pub fn dot(self, other: Vec3) -> i64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        vec3(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn is_zero(self) -> bool {
        self == Vec3::ZERO
    }

    pub fn magnitude_squared(self) -> i64 {
        self.dot(self)
    }

    /// Walks from `self` to `end` one unit step per axis at a time, both ends included.
    ///
    /// Each step moves every axis that has not yet reached `end` by one, so for
    /// axis-aligned segments this visits every cell on the segment.
    pub fn line(self, end: Vec3) -> impl Iterator<Item = Vec3> {
        let delta = vec3(
            (end.x - self.x).signum(),
            (end.y - self.y).signum(),
            (end.z - self.z).signum(),
        );
        let mut current = Some(self);
        std::iter::from_fn(move || {
            let pos = current?;
            current = if pos == end {
                None
            } else {
                let mut step = pos;
                if step.x != end.x {
                    step.x += delta.x;
                }
                if step.y != end.y {
                    step.y += delta.y;
                }
                if step.z != end.z {
                    step.z += delta.z;
                }
                Some(step)
            };
            Some(pos)
        })
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        vec3(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        vec3(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i64> for Vec3 {
    type Output = Vec3;

    fn mul(self, factor: i64) -> Vec3 {
        vec3(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        vec3(-self.x, -self.y, -self.z)
    }
}

impl From<(i64, i64, i64)> for Vec3 {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        vec3(x, y, z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}
