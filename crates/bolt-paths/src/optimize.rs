//! Waypoint compression for dense search paths.

use bolt_core::Location;

use crate::error::PathError;

/// Collapse a dense cell-per-step path into the minimal waypoint list: every
/// location immediately before a change of travel direction, plus the final
/// location. The input's first cell is never emitted — the caller is already
/// there.
///
/// Replaying straight-line moves between consecutive waypoints, starting
/// from the path's first location, reproduces the dense path exactly (see
/// [`expand`]).
///
/// Boundary contract:
/// - empty input is a [`PathError::DegeneratePath`] error
/// - a single-element path yields an empty waypoint list
/// - a two-element path yields the second element alone
pub fn optimize(path: &[Location]) -> Result<Vec<Location>, PathError> {
    let (&first, rest) = path.split_first().ok_or(PathError::DegeneratePath)?;
    let Some(&second) = rest.first() else {
        return Ok(Vec::new());
    };

    let mut waypoints = Vec::new();
    let mut dir = second - first;
    for pair in path.windows(2).skip(1) {
        let d = pair[1] - pair[0];
        if d != dir {
            // The cell before the direction change is a turn point.
            waypoints.push(pair[0]);
            dir = d;
        }
    }
    waypoints.push(path[path.len() - 1]);
    Ok(waypoints)
}

/// Re-densify an optimized waypoint list into the cell-per-step path it was
/// produced from, starting at `first` (which is included in the output).
///
/// Consecutive waypoints must be axis-aligned, as [`optimize`] guarantees
/// for its own output.
pub fn expand(first: Location, waypoints: &[Location]) -> Vec<Location> {
    let mut dense = vec![first];
    let mut cur = first;
    for &wp in waypoints {
        let step = Location::new((wp.x - cur.x).signum(), (wp.y - cur.y).signum());
        while cur != wp {
            cur = cur + step;
            dense.push(cur);
        }
    }
    dense
}
