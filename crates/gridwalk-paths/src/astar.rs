use std::collections::BinaryHeap;

use gridwalk_core::{Grid, Point};
use log::{debug, trace};

use crate::search::{Node, NodeRef, NoPath, Path, PathSearch};
use crate::traits::NeighborPolicy;

impl<P: NeighborPolicy> PathSearch<P> {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) with its cost, or the
    /// reason no path was produced.
    pub fn search(&mut self, grid: &Grid, from: Point, to: Point) -> Result<Path, NoPath> {
        trace!("[astar] search {from} -> {to}");
        let result = self.run(grid, from, to);
        match &result {
            Ok(path) => debug!(
                "[astar] found {from} -> {to}: {} cells, cost {}, {} expanded",
                path.cells.len(),
                path.cost,
                path.expanded
            ),
            Err(reason) => debug!("[astar] {from} -> {to}: {reason}"),
        }
        result
    }

    /// Compute the shortest path from `from` to `to`, or `None` if there is
    /// none for any reason (invalid endpoints included).
    pub fn find_path(&mut self, grid: &Grid, from: Point, to: Point) -> Option<Vec<Point>> {
        self.search(grid, from, to).ok().map(|path| path.cells)
    }

    fn run(&mut self, grid: &Grid, from: Point, to: Point) -> Result<Path, NoPath> {
        if grid.is_empty() {
            return Err(NoPath::EmptyGrid);
        }
        let start_idx = grid.index(from).ok_or(NoPath::OutOfBounds)?;
        let goal_idx = grid.index(to).ok_or(NoPath::OutOfBounds)?;
        if !grid.cell_at(from).is_walkable() {
            return Err(NoPath::StartBlocked);
        }
        if !grid.cell_at(to).is_walkable() {
            return Err(NoPath::GoalBlocked);
        }
        self.policy.check_start(grid, from)?;

        let cur_gen = self.begin(grid.len());

        // Initialise the start node.
        {
            let h = self.policy.estimate(from, to);
            let node = &mut self.nodes[start_idx];
            *node = Node::fresh(cur_gen);
            node.g = 0;
            node.h = h;
            node.f = h;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
            h: self.nodes[start_idx].h,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0;

        let outcome = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search Err(NoPath::Exhausted);
            };

            let ci = current.idx;

            // Skip stale entries.
            {
                let node = &self.nodes[ci];
                if node.generation != cur_gen || !node.open || node.f != current.f {
                    continue;
                }
            }

            if ci == goal_idx {
                break 'search Ok(());
            }

            if self.config.max_expansions.is_some_and(|max| expanded >= max) {
                break 'search Err(NoPath::ExpansionLimit);
            }
            expanded += 1;

            let current_g = {
                let node = &mut self.nodes[ci];
                node.open = false;
                node.closed = true;
                node.g
            };
            let current_point = grid.point(ci);

            nbuf.clear();
            self.policy.neighbors(grid, current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };

                let n = &mut self.nodes[ni];
                if n.generation != cur_gen {
                    *n = Node::fresh(cur_gen);
                }
                if n.closed {
                    continue;
                }
                // Blocked cells are closed on sight and never reconsidered.
                if !grid.cell_at(np).is_walkable() {
                    n.closed = true;
                    continue;
                }

                let tentative_g = current_g + self.policy.cost(current_point, np);
                if tentative_g >= n.g {
                    continue;
                }

                n.g = tentative_g;
                n.h = self.policy.estimate(np, to);
                n.f = tentative_g + n.h;
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    h: n.h,
                });
            }
        };

        self.nbuf = nbuf;
        outcome?;

        // Reconstruct path.
        let mut cells = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            cells.push(grid.point(ci));
            ci = self.nodes[ci].parent;
        }
        cells.reverse();
        Ok(Path {
            cells,
            cost: self.nodes[goal_idx].g,
            expanded,
        })
    }
}
