use gridwalk_core::{Grid, Point};

use crate::traits::NeighborPolicy;

/// Free 8-directional movement with diagonal gating.
///
/// Orthogonal neighbors are always offered (walkable or not). A diagonal is
/// offered only through a walkable *horizontal* neighbor on the same side:
/// the vertical neighbor's walkability is not consulted, so a diagonal may
/// slip past a blocked cell above or below.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefaultWalker;

impl NeighborPolicy for DefaultWalker {
    fn neighbors(&self, grid: &Grid, p: Point, buf: &mut Vec<Point>) {
        let has_below = p.y > 0;
        let has_above = p.y + 1 < grid.height();

        // Left side, then right side.
        for dx in [-1, 1] {
            let side = p.shift(dx, 0);
            if !grid.contains(side) {
                continue;
            }
            buf.push(side);
            if grid.cell_at(side).is_walkable() {
                if has_below {
                    buf.push(side.below());
                }
                if has_above {
                    buf.push(side.above());
                }
            }
        }
        if has_below {
            buf.push(p.below());
        }
        if has_above {
            buf.push(p.above());
        }
    }
}
