use std::collections::{HashMap, HashSet};

use bolt_core::Location;

/// Result of one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Number of locations popped for expansion. The pop that satisfies the
    /// goal predicate is not counted, so a search whose start is the goal
    /// reports 0. Reproducible for a fixed maze/start/goal/algorithm.
    pub explored: usize,
    /// Full path from start to goal, both inclusive, or `None` when the
    /// goal is unreachable. "No path" is a normal outcome, not an error.
    pub path: Option<Vec<Location>>,
}

/// Central coordinator for maze searches.
///
/// Owns the traversal state — the parent-link map used for path
/// reconstruction and the scratch buffers — so that repeated queries reuse
/// allocations. Each search resets the state on entry.
pub struct Pathfinder {
    /// Maps each discovered location to the location that discovered it.
    /// The start has no entry, which terminates reconstruction.
    pub(crate) parents: HashMap<Location, Location>,
    /// Best known path cost per location (A* only).
    pub(crate) gscore: HashMap<Location, i32>,
    /// Locations already expanded (A*) or discovered (DFS/BFS).
    pub(crate) seen: HashSet<Location>,
    /// Shared scratch buffer for neighbor queries.
    pub(crate) nbuf: Vec<Location>,
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Pathfinder {
    /// Create a new `Pathfinder`.
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
            gscore: HashMap::new(),
            seen: HashSet::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.parents.clear();
        self.gscore.clear();
        self.seen.clear();
    }

    /// Walk the parent links backward from `goal` and return the ordered
    /// start-to-goal path.
    pub(crate) fn rebuild(&self, goal: Location) -> Vec<Location> {
        let mut path = vec![goal];
        let mut cur = goal;
        while let Some(&p) = self.parents.get(&cur) {
            path.push(p);
            cur = p;
        }
        path.reverse();
        path
    }
}
