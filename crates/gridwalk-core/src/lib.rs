//! **gridwalk-core**: grid map types for walker pathfinding.
//!
//! This crate provides the types the pathfinding engine operates over:
//! integer geometry, walkable/blocked cells with cached world-space origins,
//! and a dense row-major grid that converts between world and cell
//! coordinates.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::Cell;
pub use geom::Point;
pub use glam::Vec2;
pub use grid::{Grid, GridError};
