use gridwalk_core::{Grid, Point};

use crate::distance::octile;
use crate::search::NoPath;

/// A movement rule set: which cells are reachable in one step from a cell.
///
/// Implementations are pure functions of the grid and the current position.
/// They may yield unwalkable cells (the search filters them), but must never
/// yield out-of-bounds positions.
pub trait NeighborPolicy {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, grid: &Grid, p: Point, buf: &mut Vec<Point>);

    /// Extra precondition on the start cell, checked before searching.
    fn check_start(&self, grid: &Grid, start: Point) -> Result<(), NoPath> {
        let _ = (grid, start);
        Ok(())
    }

    /// Cost of moving from `from` to neighbor `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32 {
        octile(from, to)
    }

    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32 {
        octile(from, to)
    }
}

impl<P: NeighborPolicy + ?Sized> NeighborPolicy for &P {
    fn neighbors(&self, grid: &Grid, p: Point, buf: &mut Vec<Point>) {
        (**self).neighbors(grid, p, buf)
    }

    fn check_start(&self, grid: &Grid, start: Point) -> Result<(), NoPath> {
        (**self).check_start(grid, start)
    }

    fn cost(&self, from: Point, to: Point) -> i32 {
        (**self).cost(from, to)
    }

    fn estimate(&self, from: Point, to: Point) -> i32 {
        (**self).estimate(from, to)
    }
}
