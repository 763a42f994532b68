use bolt_core::Location;

/// An in-progress multi-step plan: an optimized waypoint sequence plus a
/// cursor into it.
///
/// Invariant: `cursor <= waypoints.len()`. The swarm removes a route the
/// moment its cursor reaches the end, so a stored route always has at
/// least one waypoint remaining.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    waypoints: Vec<Location>,
    cursor: usize,
}

impl Route {
    pub(crate) fn new(waypoints: Vec<Location>) -> Self {
        Self {
            waypoints,
            cursor: 0,
        }
    }

    /// The full stored waypoint sequence.
    pub fn waypoints(&self) -> &[Location] {
        &self.waypoints
    }

    /// Index of the next waypoint to visit.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The waypoints not yet visited.
    pub fn remaining(&self) -> &[Location] {
        &self.waypoints[self.cursor..]
    }

    /// The route's terminal waypoint, if any.
    pub fn destination(&self) -> Option<Location> {
        self.waypoints.last().copied()
    }

    /// Yield the next waypoint and advance the cursor.
    pub(crate) fn advance(&mut self) -> Option<Location> {
        let next = self.waypoints.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(next)
    }

    /// Whether the cursor has reached the end.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.waypoints.len()
    }
}
