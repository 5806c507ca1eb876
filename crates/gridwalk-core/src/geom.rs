//! Integer grid coordinates.
//!
//! Grid coordinates use a y-up convention: row 0 is the bottom of the map and
//! gravity (for walkers that care about it) points toward −y.

use std::fmt;

/// A 2D integer grid coordinate. X grows right, Y grows up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The point directly below (−y).
    #[inline]
    pub const fn below(self) -> Self {
        self.shift(0, -1)
    }

    /// The point directly above (+y).
    #[inline]
    pub const fn above(self) -> Self {
        self.shift(0, 1)
    }

    /// Whether `other` is one of the eight cells touching `self`.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        let (dx, dy) = (other.x - self.x, other.y - self.y);
        (dx, dy) != (0, 0) && dx.abs() <= 1 && dy.abs() <= 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts() {
        let p = Point::new(2, 3);
        assert_eq!(p.shift(-2, 1), Point::new(0, 4));
        assert_eq!(p.below(), Point::new(2, 2));
        assert_eq!(p.above(), Point::new(2, 4));
        assert_eq!(p.to_string(), "(2, 3)");
    }

    #[test]
    fn point_adjacency() {
        let p = Point::new(1, 1);
        assert!(p.is_adjacent(Point::ZERO));
        assert!(p.is_adjacent(Point::new(2, 1)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Point::new(3, 1)));
    }
}
