use std::collections::BinaryHeap;

use bolt_core::Location;

use crate::pathfinder::{Pathfinder, SearchResult};
use crate::traits::Frontier;

/// Heap entry ordered by `f`, then FIFO by push sequence among equal `f`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenNode {
    f: i32,
    g: i32,
    seq: u64,
    loc: Location,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; among
        // equal f, the earliest-pushed entry wins, keeping results
        // deterministic.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Pathfinder {
    /// A* search from `start` to the first location satisfying `is_goal`,
    /// guided by the admissible heuristic `heuristic` (Manhattan distance
    /// for this 4-directional unit-cost grid).
    ///
    /// The open frontier is ordered by `f = g + h` with uniform edge cost 1.
    /// A location is re-pushed only when a strictly better `g` is found
    /// through it; once expanded it is never re-opened, which is safe under
    /// a consistent heuristic (graph-search variant).
    pub fn astar<F: Frontier>(
        &mut self,
        frontier: &F,
        start: Location,
        is_goal: impl Fn(Location) -> bool,
        heuristic: impl Fn(Location) -> i32,
    ) -> SearchResult {
        self.reset();
        self.gscore.insert(start, 0);

        let mut open = BinaryHeap::new();
        let mut seq = 0u64;
        open.push(OpenNode {
            f: heuristic(start),
            g: 0,
            seq,
            loc: start,
        });

        let mut explored = 0;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let goal = loop {
            let Some(node) = open.pop() else {
                break None;
            };
            let current = node.loc;
            // Stale entry: a better g was pushed after this one.
            if self.seen.contains(&current) {
                continue;
            }
            if is_goal(current) {
                break Some(current);
            }
            self.seen.insert(current);
            explored += 1;

            nbuf.clear();
            frontier.neighbors(current, &mut nbuf);
            for &n in nbuf.iter() {
                let tentative = node.g + 1;
                if self.gscore.get(&n).is_some_and(|&best| tentative >= best) {
                    continue;
                }
                self.gscore.insert(n, tentative);
                self.parents.insert(n, current);
                seq += 1;
                open.push(OpenNode {
                    f: tentative + heuristic(n),
                    g: tentative,
                    seq,
                    loc: n,
                });
            }
        };

        self.nbuf = nbuf;
        SearchResult {
            explored,
            path: goal.map(|g| self.rebuild(g)),
        }
    }
}
