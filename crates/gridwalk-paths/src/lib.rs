//! Shortest paths for grid walkers.
//!
//! This crate finds paths over a [`gridwalk_core::Grid`] with A\*
//! ([`PathSearch`]) under a pluggable movement rule set ([`NeighborPolicy`]):
//!
//! - [`DefaultWalker`]: 8-directional movement; diagonals only through a
//!   walkable horizontal neighbor
//! - [`PlatformerWalker`]: side-view movement under gravity (walk, fall,
//!   single and double jumps, one-cell gap jumps)
//! - [`Movement`]: either of the above, chosen at runtime
//!
//! Moves cost their octile distance (10 straight, 14 diagonal), which is
//! also the heuristic. [`Pathfinder`] wraps a grid and a search and answers
//! queries in world space, returning cell-center waypoints.
//!
//! # Example
//!
//! ```
//! use gridwalk_core::{Grid, Vec2};
//! use gridwalk_paths::{DefaultWalker, Pathfinder};
//!
//! let grid = Grid::new(3, 3, 1.0).unwrap();
//! let mut pf = Pathfinder::new(grid, DefaultWalker);
//! let path = pf.find_path_world(Vec2::ZERO, Vec2::new(2.5, 2.5)).unwrap();
//! assert_eq!(path.len(), 3);
//! assert_eq!(path[2], Vec2::new(2.5, 2.5));
//! ```

mod astar;
mod distance;
mod movement;
mod neighbors;
mod pathfinder;
mod platformer;
mod search;
mod traits;

pub use distance::{DIAGONAL_COST, STRAIGHT_COST, octile};
pub use movement::{Movement, ParseMovementError};
pub use neighbors::DefaultWalker;
pub use pathfinder::Pathfinder;
pub use platformer::{PlatformerWalker, is_grounded, lowest_support};
pub use search::{NoPath, Path, PathSearch, SearchConfig, UNREACHABLE};
pub use traits::NeighborPolicy;
