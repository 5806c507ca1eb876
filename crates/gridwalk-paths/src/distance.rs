use gridwalk_core::Point;

/// Cost of an orthogonal step.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of a diagonal step (≈ 10·√2, kept integral).
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance between two points.
///
/// Counts `min(dx, dy)` diagonal steps at [`DIAGONAL_COST`] and the remaining
/// `|dx - dy|` straight steps at [`STRAIGHT_COST`]. Used both as the A*
/// heuristic and as the edge weight, which keeps the heuristic admissible and
/// consistent.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    DIAGONAL_COST * dx.min(dy) + STRAIGHT_COST * (dx - dy).abs()
}
