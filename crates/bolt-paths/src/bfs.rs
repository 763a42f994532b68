use std::collections::VecDeque;

use bolt_core::Location;

use crate::pathfinder::{Pathfinder, SearchResult};
use crate::traits::Frontier;

impl Pathfinder {
    /// Breadth-first search from `start` to the first location satisfying
    /// `is_goal`.
    ///
    /// Identical machinery to [`depth_first`](Self::depth_first) with a
    /// queue instead of a stack: locations are expanded in increasing
    /// distance layers, so the returned path has the minimum number of
    /// edges among all discoverable paths.
    pub fn breadth_first<F: Frontier>(
        &mut self,
        frontier: &F,
        start: Location,
        is_goal: impl Fn(Location) -> bool,
    ) -> SearchResult {
        self.reset();
        self.seen.insert(start);
        let mut queue = VecDeque::from([start]);
        let mut explored = 0;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let goal = loop {
            let Some(current) = queue.pop_front() else {
                break None;
            };
            if is_goal(current) {
                break Some(current);
            }
            explored += 1;

            nbuf.clear();
            frontier.neighbors(current, &mut nbuf);
            for &n in nbuf.iter() {
                if self.seen.contains(&n) {
                    continue;
                }
                self.seen.insert(n);
                self.parents.insert(n, current);
                queue.push_back(n);
            }
        };

        self.nbuf = nbuf;
        SearchResult {
            explored,
            path: goal.map(|g| self.rebuild(g)),
        }
    }
}
