//! The [`Cell`] type: one grid position and its walkability.

use glam::Vec2;

use crate::geom::Point;

/// A single grid cell.
///
/// The world-space origin is computed once when the owning
/// [`Grid`](crate::Grid) is built. Search bookkeeping is not stored here.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    origin: Vec2,
    walkable: bool,
}

impl Cell {
    /// Create a walkable cell at `pos` with the given world-space origin.
    #[inline]
    pub const fn new(pos: Point, origin: Vec2) -> Self {
        Self {
            pos,
            origin,
            walkable: true,
        }
    }

    /// Set walkability (builder).
    #[inline]
    pub const fn with_walkable(mut self, walkable: bool) -> Self {
        self.walkable = walkable;
        self
    }

    /// Grid coordinates.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    /// World-space lower-left corner.
    #[inline]
    pub const fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub const fn is_walkable(&self) -> bool {
        self.walkable
    }

    #[inline]
    pub fn set_walkable(&mut self, walkable: bool) {
        self.walkable = walkable;
    }
}
