//! Building a [`Grid`] from an ASCII layout.
//!
//! `.` marks a walkable cell and `#` a blocked one. The first line of text is
//! the **top** row of the map, so layouts read the way they look on screen
//! even though grid y grows upward.

use crate::geom::Point;
use crate::grid::{Grid, GridError};

/// Rune for a walkable cell.
pub const WALKABLE: char = '.';
/// Rune for a blocked cell.
pub const BLOCKED: char = '#';

impl Grid {
    /// Parse a layout into a grid with the given cell size.
    ///
    /// Leading and trailing blank lines are ignored, as is trailing
    /// whitespace on each line.
    pub fn parse(layout: &str, cell_size: f32) -> Result<Grid, GridError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |i| i + 1);
        let lines = &lines[..end];

        let width = lines.first().map_or(0, |l| l.chars().count());
        let height = lines.len();

        let mut rows = Vec::with_capacity(height);
        for (line_no, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(width);
            for (column, ch) in line.chars().enumerate() {
                match ch {
                    WALKABLE => row.push(true),
                    BLOCKED => row.push(false),
                    _ => {
                        return Err(GridError::InvalidRune {
                            ch,
                            line: line_no + 1,
                            column: column + 1,
                        });
                    }
                }
            }
            if row.len() != width {
                return Err(GridError::InconsistentSize {
                    line: line_no + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        let mut grid = Grid::new(width as i32, height as i32, cell_size)?;
        grid.fill_fn(|p: Point| rows[height - 1 - p.y as usize][p.x as usize]);
        Ok(grid)
    }
}
