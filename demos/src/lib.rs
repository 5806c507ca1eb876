//! Bundled maps and text rendering for the gridwalk demo.
//!
//! Demonstrates: building grids from ASCII layouts, 8-way and platformer
//! movement, capped searches, and drawing a path over its map.

use gridwalk_core::{Grid, GridError, Point};
use gridwalk_paths::{Movement, NoPath, Path, Pathfinder, SearchConfig};

/// Search cap applied to every demo query.
pub const MAX_EXPANSIONS: usize = 10_000;

const CAVE: &str = "
##########
#........#
#.####.#.#
#....#.#.#
####.#...#
#....###.#
#.##.....#
##########
";

const LEVEL: &str = "
........
........
...#....
..##.#..
########
";

/// A bundled map with a query to run on it.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub layout: &'static str,
    pub movement: Movement,
    pub start: Point,
    pub end: Point,
}

/// The bundled scenarios.
pub const SCENARIOS: [Scenario; 2] = [
    Scenario {
        name: "cave",
        layout: CAVE,
        movement: Movement::EightWay,
        start: Point::new(1, 1),
        end: Point::new(8, 6),
    },
    Scenario {
        name: "level",
        layout: LEVEL,
        movement: Movement::Platformer,
        start: Point::new(0, 1),
        end: Point::new(7, 1),
    },
];

impl Scenario {
    /// Parse the layout and run the query.
    pub fn run(&self) -> Result<(Grid, Result<Path, NoPath>), GridError> {
        let grid = Grid::parse(self.layout, 1.0)?;
        let config = SearchConfig::default().with_max_expansions(MAX_EXPANSIONS);
        let mut pf = Pathfinder::with_config(grid, self.movement, config);
        let result = pf.search(self.start, self.end);
        Ok((pf.into_grid(), result))
    }
}

/// Render `grid` top row first, with the path drawn over it: `S` start,
/// `E` end, `*` intermediate cells.
pub fn render(grid: &Grid, path: &[Point]) -> String {
    let mut rows: Vec<Vec<char>> = grid
        .to_string()
        .lines()
        .map(|l| l.chars().collect())
        .collect();
    let last = path.len().saturating_sub(1);
    for (i, p) in path.iter().enumerate() {
        let ch = match i {
            0 => 'S',
            _ if i == last => 'E',
            _ => '*',
        };
        if grid.contains(*p) {
            let row = (grid.height() - 1 - p.y) as usize;
            rows[row][p.x as usize] = ch;
        }
    }
    rows.into_iter()
        .map(|r| r.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_scenarios_have_paths() {
        for s in SCENARIOS {
            let (grid, result) = s.run().unwrap();
            let path = result.unwrap_or_else(|e| panic!("{}: {e}", s.name));
            assert_eq!(path.cells.first(), Some(&s.start));
            assert_eq!(path.cells.last(), Some(&s.end));
            let drawing = render(&grid, &path.cells);
            assert_eq!(drawing.matches('S').count(), 1);
            assert_eq!(drawing.matches('E').count(), 1);
        }
    }

    #[test]
    fn render_overlays_path() {
        let grid = Grid::parse("...\n#..", 1.0).unwrap();
        let path = [Point::new(1, 0), Point::new(1, 1), Point::new(2, 1)];
        assert_eq!(render(&grid, &path), ".*E\n#S.");
    }
}
