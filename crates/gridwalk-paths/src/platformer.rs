//! Side-view movement under gravity.
//!
//! Gravity points toward −y. A walker stands on a walkable cell whose cell
//! below is blocked. From there it can walk (and fall) sideways, jump up onto
//! obstacles one or two cells tall, or hop across a one-cell gap.

use gridwalk_core::{Grid, Point};

use crate::search::NoPath;
use crate::traits::NeighborPolicy;

/// Platformer movement: walk, fall, single/double jump and gap jump.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlatformerWalker;

/// Where a body released at `p` comes to rest.
///
/// Returns `None` if `p` is unwalkable. Otherwise falls while the cell below
/// is walkable and returns the last walkable cell above a blocked one. Row 0
/// has no floor beneath it: a fall that reaches it returns `None`.
///
/// # Panics
///
/// Panics if `p` is out of bounds.
pub fn lowest_support(grid: &Grid, p: Point) -> Option<Point> {
    if !walkable(grid, p) {
        return None;
    }
    let mut p = p;
    while p.y > 0 {
        let below = p.below();
        if !walkable(grid, below) {
            return Some(p);
        }
        p = below;
    }
    None
}

/// Whether `p` stands on solid ground.
pub fn is_grounded(grid: &Grid, p: Point) -> bool {
    p.y > 0 && !grid.is_walkable(p.below())
}

// Reads go through `cell_at`, which panics out of bounds. Every caller
// bounds-checks the offsets it touches first.
#[inline]
fn walkable(grid: &Grid, p: Point) -> bool {
    grid.cell_at(p).is_walkable()
}

impl PlatformerWalker {
    /// Neighbors on one side of `p`; `dx` is −1 (left) or +1 (right).
    fn side(grid: &Grid, p: Point, dx: i32, buf: &mut Vec<Point>) {
        let next = p.shift(dx, 0);
        if !grid.contains(next) {
            return;
        }

        // Walk, falling to the first floor below.
        if let Some(land) = lowest_support(grid, next) {
            buf.push(land);
        }

        // Single jump onto an obstacle one cell tall.
        if p.y + 1 < grid.height()
            && walkable(grid, p.above())
            && walkable(grid, next.above())
            && !walkable(grid, next)
        {
            buf.push(next.above());
        }

        // Double jump onto an obstacle two cells tall.
        if p.y + 2 < grid.height()
            && walkable(grid, p.shift(0, 1))
            && walkable(grid, p.shift(0, 2))
            && walkable(grid, next.shift(0, 2))
            && !walkable(grid, next.shift(0, 1))
        {
            buf.push(next.shift(0, 2));
        }

        // Jump over a one-cell gap.
        let far = p.shift(2 * dx, 0);
        if grid.contains(far)
            && p.y > 0
            && walkable(grid, next)
            && walkable(grid, next.below())
            && walkable(grid, far)
        {
            if let Some(land) = lowest_support(grid, far) {
                buf.push(land);
            }
        }
    }
}

impl NeighborPolicy for PlatformerWalker {
    fn neighbors(&self, grid: &Grid, p: Point, buf: &mut Vec<Point>) {
        Self::side(grid, p, -1, buf);
        Self::side(grid, p, 1, buf);
    }

    fn check_start(&self, grid: &Grid, start: Point) -> Result<(), NoPath> {
        if is_grounded(grid, start) {
            Ok(())
        } else {
            Err(NoPath::NotGrounded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(grid: &Grid, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        PlatformerWalker.neighbors(grid, p, &mut buf);
        buf
    }

    #[test]
    fn lowest_support_on_floor() {
        let g = Grid::parse(
            "
..
##",
            1.0,
        )
        .unwrap();
        assert_eq!(lowest_support(&g, Point::new(0, 1)), Some(Point::new(0, 1)));
        assert_eq!(lowest_support(&g, Point::new(0, 0)), None);
    }

    #[test]
    fn lowest_support_falls_to_floor() {
        let g = Grid::parse(
            "
.
.
.
#",
            1.0,
        )
        .unwrap();
        assert_eq!(lowest_support(&g, Point::new(0, 3)), Some(Point::new(0, 1)));
    }

    #[test]
    fn lowest_support_bottomless() {
        let g = Grid::new(1, 3, 1.0).unwrap();
        assert_eq!(lowest_support(&g, Point::new(0, 2)), None);
    }

    #[test]
    fn grounded_start() {
        let g = Grid::parse(
            "
...
.#.
###",
            1.0,
        )
        .unwrap();
        assert!(is_grounded(&g, Point::new(0, 1)));
        assert!(is_grounded(&g, Point::new(1, 2)));
        assert!(!is_grounded(&g, Point::new(0, 2)));
        assert!(!is_grounded(&g, Point::new(0, 0)));
        assert_eq!(
            PlatformerWalker.check_start(&g, Point::new(0, 2)),
            Err(NoPath::NotGrounded)
        );
        assert_eq!(PlatformerWalker.check_start(&g, Point::new(0, 1)), Ok(()));
    }

    #[test]
    fn walk_on_flat_floor() {
        let g = Grid::parse(
            "
...
...
###",
            1.0,
        )
        .unwrap();
        assert_eq!(
            neighbors_of(&g, Point::new(1, 1)),
            vec![Point::new(0, 1), Point::new(2, 1)]
        );
    }

    #[test]
    fn walk_off_ledge_falls() {
        let g = Grid::parse(
            "
..
#.
#.
##",
            1.0,
        )
        .unwrap();
        assert_eq!(neighbors_of(&g, Point::new(0, 3)), vec![Point::new(1, 1)]);
    }

    #[test]
    fn single_jump_onto_step() {
        let g = Grid::parse(
            "
...
.##
###",
            1.0,
        )
        .unwrap();
        assert_eq!(neighbors_of(&g, Point::new(0, 1)), vec![Point::new(1, 2)]);
    }

    #[test]
    fn single_jump_needs_head_room() {
        let g = Grid::parse(
            "
#..
.##
###",
            1.0,
        )
        .unwrap();
        assert!(neighbors_of(&g, Point::new(0, 1)).is_empty());
    }

    #[test]
    fn double_jump_onto_tall_step() {
        let g = Grid::parse(
            "
...
.#.
.#.
###",
            1.0,
        )
        .unwrap();
        assert_eq!(neighbors_of(&g, Point::new(0, 1)), vec![Point::new(1, 3)]);
    }

    #[test]
    fn wall_three_tall_blocks() {
        let g = Grid::parse(
            "
...
.#.
.#.
.#.
###",
            1.0,
        )
        .unwrap();
        assert!(neighbors_of(&g, Point::new(0, 1)).is_empty());
    }

    #[test]
    fn gap_jump_lands_across() {
        let g = Grid::parse(
            "
.....
.....
#.###",
            1.0,
        )
        .unwrap();
        // Walking right drops into the bottomless gap, so only the jump remains.
        assert_eq!(neighbors_of(&g, Point::new(0, 1)), vec![Point::new(2, 1)]);
        assert_eq!(
            neighbors_of(&g, Point::new(2, 1)),
            vec![Point::new(0, 1), Point::new(3, 1)]
        );
    }

    #[test]
    fn edges_do_not_read_out_of_bounds() {
        let g = Grid::parse(
            "
...
...
#..",
            1.0,
        )
        .unwrap();
        for cell in g.iter() {
            let _ = neighbors_of(&g, cell.pos());
        }
        let g = Grid::new(1, 1, 1.0).unwrap();
        assert!(neighbors_of(&g, Point::ZERO).is_empty());
    }
}
