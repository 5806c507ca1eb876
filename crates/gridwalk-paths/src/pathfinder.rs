//! World-space entry points over a grid and a search.

use gridwalk_core::{Cell, Grid, Point, Vec2};

use crate::search::{NoPath, Path, PathSearch, SearchConfig};
use crate::traits::NeighborPolicy;

/// A map paired with the search that runs over it.
///
/// The pathfinder owns its [`Grid`]; authoring code edits walkability through
/// [`grid_mut`](Pathfinder::grid_mut) between queries.
pub struct Pathfinder<P> {
    grid: Grid,
    search: PathSearch<P>,
}

impl<P: NeighborPolicy> Pathfinder<P> {
    pub fn new(grid: Grid, policy: P) -> Self {
        Self::with_config(grid, policy, SearchConfig::default())
    }

    pub fn with_config(grid: Grid, policy: P, config: SearchConfig) -> Self {
        Self {
            grid,
            search: PathSearch::with_config(policy, config),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[inline]
    pub fn policy(&self) -> &P {
        self.search.policy()
    }

    /// Give back the grid, dropping the search scratch.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Full search result between two cells, including the failure reason.
    pub fn search(&mut self, start: Point, end: Point) -> Result<Path, NoPath> {
        self.search.search(&self.grid, start, end)
    }

    /// Shortest path between two cells, as cells from start to end.
    pub fn find_path(&mut self, start: Point, end: Point) -> Option<Vec<Cell>> {
        let path = self.search(start, end).ok()?;
        Some(path.cells.iter().map(|&p| *self.grid.cell_at(p)).collect())
    }

    /// Shortest path between two world positions, as cell-center waypoints.
    /// Non-finite positions have no cell and yield `None`.
    pub fn find_path_world(&mut self, start: Vec2, end: Vec2) -> Option<Vec<Vec2>> {
        if !start.is_finite() || !end.is_finite() {
            log::debug!("[pathfinder] non-finite query {start} -> {end}");
            return None;
        }
        let from = self.grid.world_to_cell(start);
        let to = self.grid.world_to_cell(end);
        let path = self.search(from, to).ok()?;
        Some(
            path.cells
                .iter()
                .map(|&p| self.grid.cell_center(p))
                .collect(),
        )
    }

    /// Every path between distinct cells, queried from each cell's world
    /// origin. Pairs with no path are skipped.
    pub fn all_paths(&mut self) -> Vec<Vec<Vec2>> {
        let origins: Vec<Vec2> = self.grid.iter().map(Cell::origin).collect();
        let mut paths = Vec::new();
        for &start in &origins {
            for &end in &origins {
                if let Some(path) = self.find_path_world(start, end) {
                    if path.len() > 1 {
                        paths.push(path);
                    }
                }
            }
        }
        log::debug!(
            "[pathfinder] {} paths between {} cells",
            paths.len(),
            origins.len()
        );
        paths
    }
}
