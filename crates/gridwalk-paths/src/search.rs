use std::fmt;

use gridwalk_core::Point;

/// Sentinel `g` cost for nodes not yet reached in the current search.
pub const UNREACHABLE: i32 = i32::MAX;

/// A successful search result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Cells from start to end, both included.
    pub cells: Vec<Point>,
    /// Total move cost along `cells`.
    pub cost: i32,
    /// Number of nodes expanded to find it.
    pub expanded: usize,
}

/// Why a search returned no path.
///
/// Callers that only care about reachability use
/// [`PathSearch::find_path`], which folds every reason into `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoPath {
    /// The grid has no cells.
    EmptyGrid,
    /// Start or end lies outside the grid.
    OutOfBounds,
    /// The start cell is not walkable.
    StartBlocked,
    /// The end cell is not walkable.
    GoalBlocked,
    /// The start cell does not rest on solid ground.
    NotGrounded,
    /// Every reachable cell was expanded without reaching the end.
    Exhausted,
    /// The configured expansion cap was hit.
    ExpansionLimit,
}

impl fmt::Display for NoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::EmptyGrid => "grid is empty",
            Self::OutOfBounds => "start or end out of bounds",
            Self::StartBlocked => "start cell is not walkable",
            Self::GoalBlocked => "end cell is not walkable",
            Self::NotGrounded => "start cell is not on solid ground",
            Self::Exhausted => "end is not reachable",
            Self::ExpansionLimit => "expansion limit reached",
        };
        write!(f, "no path: {msg}")
    }
}

impl std::error::Error for NoPath {}

/// Search tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of nodes to expand before giving up. `None` searches
    /// until the reachable area is exhausted.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Cap the number of expanded nodes (builder).
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            f: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
            open: false,
            closed: false,
        }
    }
}

impl Node {
    pub(crate) fn fresh(generation: u32) -> Self {
        Self {
            generation,
            ..Self::default()
        }
    }
}

/// Reference into the node array, ordered for use in `BinaryHeap`.
///
/// Lowest `f` pops first; ties go to the lowest `h` (closest to the end),
/// then to the lowest cell index.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// A* search over a [`Grid`](gridwalk_core::Grid) with an injected
/// [`NeighborPolicy`](crate::NeighborPolicy).
///
/// `PathSearch` owns the per-cell scratch (costs, parents, open/closed
/// flags) so that repeated queries incur no allocations after the first use.
/// Scratch is invalidated at the start of every search by bumping a
/// generation counter; nothing is stored on the grid's cells, so the grid is
/// only ever borrowed immutably.
pub struct PathSearch<P> {
    pub(crate) policy: P,
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl<P> PathSearch<P> {
    /// Create a search using `policy` for neighbor generation.
    pub fn new(policy: P) -> Self {
        Self::with_config(policy, SearchConfig::default())
    }

    /// Create a search with explicit tuning.
    pub fn with_config(policy: P, config: SearchConfig) -> Self {
        Self {
            policy,
            config,
            nodes: Vec::new(),
            generation: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// The movement rule set in use.
    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Start a new search over `len` cells: grow the node array if needed
    /// and bump the generation so stale entries are ignored.
    pub(crate) fn begin(&mut self, len: usize) -> u32 {
        if self.nodes.len() < len {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old generations could alias the new one.
            self.nodes.fill(Node::default());
            self.generation = 1;
        }
        self.generation
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let path = Path {
            cells: vec![Point::new(0, 0), Point::new(1, 1)],
            cost: 14,
            expanded: 2,
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }

    #[test]
    fn config_round_trip() {
        let c = SearchConfig::default().with_max_expansions(100);
        let json = serde_json::to_string(&c).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
