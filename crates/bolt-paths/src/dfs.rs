use bolt_core::Location;

use crate::pathfinder::{Pathfinder, SearchResult};
use crate::traits::Frontier;

impl Pathfinder {
    /// Depth-first search from `start` to the first location satisfying
    /// `is_goal`.
    ///
    /// Explores last-discovered-first using a stack, marking locations at
    /// discovery to avoid cycles. The returned path is valid but not
    /// guaranteed shortest — this is the naive baseline against
    /// [`breadth_first`](Self::breadth_first) and [`astar`](Self::astar).
    /// Tie-break among neighbors is the frontier's insertion order.
    pub fn depth_first<F: Frontier>(
        &mut self,
        frontier: &F,
        start: Location,
        is_goal: impl Fn(Location) -> bool,
    ) -> SearchResult {
        self.reset();
        self.seen.insert(start);
        let mut stack = vec![start];
        let mut explored = 0;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let goal = loop {
            let Some(current) = stack.pop() else {
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
                stack.push(n);
            }
        };

        self.nbuf = nbuf;
        SearchResult {
            explored,
            path: goal.map(|g| self.rebuild(g)),
        }
    }
}
