use bolt_core::Location;

/// Manhattan (L1) distance between two locations.
///
/// Admissible and consistent for 4-directional unit moves, so it is the
/// heuristic of choice for [`astar`](crate::Pathfinder::astar) on the maze.
#[inline]
pub fn manhattan(a: Location, b: Location) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
