//! The [`Grid`] type: a dense, row-major 2D array of [`Cell`]s.
//!
//! A grid owns its cells and the world-space `cell_size` used to convert
//! between world positions and grid coordinates. Row 0 is the bottom row.

use std::fmt;

use glam::Vec2;

use crate::cell::Cell;
use crate::geom::Point;

/// A fixed-size 2D grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
    cell_size: f32,
}

impl Grid {
    /// Create a new grid of the given dimensions with every cell walkable.
    ///
    /// Each cell's world origin is computed here, once, from its coordinates
    /// and `cell_size`.
    pub fn new(width: i32, height: i32, cell_size: f32) -> Result<Self, GridError> {
        if width < 0 || height < 0 {
            return Err(GridError::NegativeSize { width, height });
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Point::new(x, y)))
            .map(|p| Cell::new(p, Vec2::new(p.x as f32, p.y as f32) * cell_size))
            .collect();
        Ok(Self {
            cells,
            width,
            height,
            cell_size,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// World-space edge length of one cell.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(x, y)` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.in_bounds(p.x, p.y)
    }

    /// Flat index of `p` (`y * width + x`), or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a flat index back to grid coordinates.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    // -----------------------------------------------------------------------
    // Coordinate conversion
    // -----------------------------------------------------------------------

    /// Grid coordinates of the cell containing `world`.
    ///
    /// No clamping is applied: positions outside the map yield out-of-bounds
    /// coordinates, which callers must check. Non-finite input saturates
    /// (NaN maps to 0), so callers should reject it first.
    #[inline]
    pub fn world_to_cell(&self, world: Vec2) -> Point {
        let c = (world / self.cell_size).floor();
        Point::new(c.x as i32, c.y as i32)
    }

    /// World-space lower-left corner of the cell at `p`.
    #[inline]
    pub fn cell_to_world(&self, p: Point) -> Vec2 {
        Vec2::new(p.x as f32, p.y as f32) * self.cell_size
    }

    /// World-space center of the cell at `p` (a waypoint).
    #[inline]
    pub fn cell_center(&self, p: Point) -> Vec2 {
        self.cell_to_world(p) + Vec2::splat(self.cell_size * 0.5)
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The cell at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds. Callers are expected to bounds-check
    /// first; reading past an edge is a logic error, not a recoverable one.
    #[inline]
    #[track_caller]
    pub fn cell_at(&self, p: Point) -> &Cell {
        match self.index(p) {
            Some(i) => &self.cells[i],
            None => panic!(
                "cell {p} out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }

    /// Whether the cell at `p` is walkable. Out-of-bounds points are not.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.get(p).is_some_and(Cell::is_walkable)
    }

    /// Set walkability of the cell at `p`. Does nothing if out of bounds.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i].set_walkable(walkable);
        }
    }

    /// Assign walkability of every cell from `f`.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> bool) {
        for cell in &mut self.cells {
            let walkable = f(cell.pos());
            cell.set_walkable(walkable);
        }
    }

    /// All cells in row-major order, bottom row first.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

/// Wire form of a [`Grid`]; checked by `TryFrom` before use.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
    cell_size: f32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    /// Rebuild the grid through [`Grid::new`] and copy walkability over.
    /// Cell origins are recomputed from `cell_size`.
    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let mut grid = Grid::new(raw.width, raw.height, raw.cell_size)?;
        if raw.cells.len() != grid.len() {
            return Err(GridError::CellCount {
                expected: grid.len(),
                found: raw.cells.len(),
            });
        }
        for (index, (cell, raw_cell)) in grid.cells.iter_mut().zip(&raw.cells).enumerate() {
            if raw_cell.pos() != cell.pos() {
                return Err(GridError::MisplacedCell {
                    index,
                    pos: raw_cell.pos(),
                });
            }
            cell.set_walkable(raw_cell.is_walkable());
        }
        Ok(grid)
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Grid {
    /// Renders the grid top row first, `.` for walkable and `#` for blocked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let ch = if self.is_walkable(Point::new(x, y)) {
                    '.'
                } else {
                    '#'
                };
                write!(f, "{ch}")?;
            }
            if y > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Width or height was negative.
    NegativeSize { width: i32, height: i32 },
    /// Cell size was zero, negative or not finite.
    InvalidCellSize(f32),
    /// Layout lines have inconsistent widths.
    InconsistentSize { line: usize, expected: usize, found: usize },
    /// A character other than `.` or `#` was found in a layout.
    InvalidRune { ch: char, line: usize, column: usize },
    /// Stored cell count does not match `width * height`.
    CellCount { expected: usize, found: usize },
    /// The cell stored at `index` claims a different position.
    MisplacedCell { index: usize, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeSize { width, height } => {
                write!(f, "grid: negative size {width}x{height}")
            }
            Self::InvalidCellSize(size) => write!(f, "grid: invalid cell size {size}"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, line, column } => write!(
                f,
                "layout contains invalid rune \u{201c}{ch}\u{201d} at line {line}, column {column}"
            ),
            Self::CellCount { expected, found } => {
                write!(f, "grid: {found} cells stored, expected {expected}")
            }
            Self::MisplacedCell { index, pos } => {
                write!(f, "grid: cell {index} is stored with position {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_all_walkable() {
        let g = Grid::new(4, 3, 1.0).unwrap();
        assert_eq!(g.len(), 12);
        assert_eq!((g.width(), g.height()), (4, 3));
        assert!(g.iter().all(Cell::is_walkable));
    }

    #[test]
    fn grid_rejects_bad_dimensions() {
        assert_eq!(
            Grid::new(-1, 3, 1.0),
            Err(GridError::NegativeSize {
                width: -1,
                height: 3
            })
        );
        assert!(matches!(
            Grid::new(2, 2, 0.0),
            Err(GridError::InvalidCellSize(_))
        ));
        assert!(Grid::new(2, 2, f32::NAN).is_err());
    }

    #[test]
    fn empty_grid() {
        let g = Grid::new(0, 5, 1.0).unwrap();
        assert!(g.is_empty());
        assert!(!g.contains(Point::ZERO));
    }

    #[test]
    fn index_is_row_major() {
        let g = Grid::new(4, 3, 1.0).unwrap();
        assert_eq!(g.index(Point::new(0, 0)), Some(0));
        assert_eq!(g.index(Point::new(3, 0)), Some(3));
        assert_eq!(g.index(Point::new(1, 2)), Some(9));
        assert_eq!(g.index(Point::new(4, 0)), None);
        assert_eq!(g.index(Point::new(0, -1)), None);
        for (i, cell) in g.iter().enumerate() {
            assert_eq!(g.point(i), cell.pos());
            assert_eq!(g.index(cell.pos()), Some(i));
        }
    }

    #[test]
    fn world_conversion_floors() {
        let g = Grid::new(4, 4, 2.0).unwrap();
        assert_eq!(g.world_to_cell(Vec2::new(0.0, 0.0)), Point::new(0, 0));
        assert_eq!(g.world_to_cell(Vec2::new(1.99, 3.0)), Point::new(0, 1));
        assert_eq!(g.world_to_cell(Vec2::new(4.0, 7.9)), Point::new(2, 3));
        // No clamping.
        assert_eq!(g.world_to_cell(Vec2::new(-0.5, 100.0)), Point::new(-1, 50));
    }

    #[test]
    fn cell_origin_and_center() {
        let g = Grid::new(3, 3, 2.0).unwrap();
        let p = Point::new(1, 2);
        assert_eq!(g.cell_to_world(p), Vec2::new(2.0, 4.0));
        assert_eq!(g.cell_at(p).origin(), Vec2::new(2.0, 4.0));
        assert_eq!(g.cell_center(p), Vec2::new(3.0, 5.0));
        assert_eq!(g.world_to_cell(g.cell_center(p)), p);
        assert_eq!(g.world_to_cell(g.cell_to_world(p)), p);
    }

    #[test]
    fn set_walkable_and_query() {
        let mut g = Grid::new(3, 2, 1.0).unwrap();
        g.set_walkable(Point::new(1, 1), false);
        assert!(!g.is_walkable(Point::new(1, 1)));
        assert!(g.is_walkable(Point::new(0, 1)));
        // Out of bounds: ignored on write, unwalkable on read.
        g.set_walkable(Point::new(9, 9), false);
        assert!(!g.is_walkable(Point::new(9, 9)));
        assert!(g.get(Point::new(9, 9)).is_none());
    }

    #[test]
    fn fill_fn_assigns_every_cell() {
        let mut g = Grid::new(3, 3, 1.0).unwrap();
        g.fill_fn(|p| p.y != 0);
        assert_eq!(g.iter().filter(|c| !c.is_walkable()).count(), 3);
        assert!(!g.is_walkable(Point::new(2, 0)));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn cell_at_out_of_bounds_panics() {
        let g = Grid::new(2, 2, 1.0).unwrap();
        let _ = g.cell_at(Point::new(2, 0));
    }

    #[test]
    fn display_top_row_first() {
        let mut g = Grid::new(2, 2, 1.0).unwrap();
        g.set_walkable(Point::new(0, 0), false);
        assert_eq!(g.to_string(), "..\n#.");
    }
}
