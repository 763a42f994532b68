use std::collections::HashMap;

use bolt_core::{Cell, Location, Maze};
use bolt_paths::{Pathfinder, manhattan, optimize};

use crate::bolt::Bolt;
use crate::error::{Result, SwarmError};
use crate::route::Route;

/// Whether [`Swarm::nearest_idle`] may match a bolt already standing on
/// the target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroDistancePolicy {
    /// Skip bolts whose path length to the target is 0.
    #[default]
    Exclude,
    /// A bolt already at the target is the nearest match.
    Include,
}

/// The bolt registry and dispatcher.
///
/// Owns the maze, the registry and the active-route table; every mutation
/// funnels through these methods. Operations either fully succeed or fail
/// with all state intact.
pub struct Swarm {
    maze: Maze,
    spawn: Location,
    bolts: Vec<Bolt>,
    routes: HashMap<u32, Route>,
    finder: Pathfinder,
    policy: ZeroDistancePolicy,
}

impl Swarm {
    /// Create a swarm over `maze` with bolts spawning at the origin.
    pub fn new(maze: Maze) -> Self {
        Self {
            maze,
            spawn: Location::ZERO,
            bolts: Vec::new(),
            routes: HashMap::new(),
            finder: Pathfinder::new(),
            policy: ZeroDistancePolicy::default(),
        }
    }

    /// Create a swarm with a custom spawn location.
    pub fn with_spawn(maze: Maze, spawn: Location) -> Result<Self> {
        maze.check_bounds(spawn)?;
        let mut swarm = Self::new(maze);
        swarm.spawn = spawn;
        Ok(swarm)
    }

    /// Set the zero-distance matching policy for [`nearest_idle`](Self::nearest_idle).
    pub fn set_zero_distance_policy(&mut self, policy: ZeroDistancePolicy) {
        self.policy = policy;
    }

    /// The maze the swarm navigates.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    // -----------------------------------------------------------------------
    // Registry
    // -----------------------------------------------------------------------

    /// Register a new bolt at the spawn location and return its view.
    ///
    /// Ids are sequential from 1 and never reused while the registry lives.
    pub fn register(&mut self) -> Bolt {
        let id = self.bolts.len() as u32 + 1;
        let bolt = Bolt::new(id, self.spawn);
        self.bolts.push(bolt);
        log::debug!("registered bolt {id} at {}", self.spawn);
        bolt
    }

    fn index_of(&self, id: u32) -> Result<usize> {
        (id as usize)
            .checked_sub(1)
            .filter(|&i| i < self.bolts.len())
            .ok_or(SwarmError::NotFound { id })
    }

    /// Look up a bolt by id.
    pub fn get(&self, id: u32) -> Result<&Bolt> {
        let idx = self.index_of(id)?;
        Ok(&self.bolts[idx])
    }

    /// All registered bolts, in id order.
    pub fn bolts(&self) -> &[Bolt] {
        &self.bolts
    }

    /// Whether the bolt has an active route. Fails on an unknown id.
    pub fn is_busy(&self, id: u32) -> Result<bool> {
        self.index_of(id)?;
        Ok(self.routes.contains_key(&id))
    }

    /// Clear the registry and route table. Future ids restart at 1.
    pub fn reset(&mut self) {
        log::info!(
            "swarm reset: dropping {} bolts and {} routes",
            self.bolts.len(),
            self.routes.len()
        );
        self.bolts.clear();
        self.routes.clear();
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// Force-move a bolt to a maze cell, bypassing any route planning.
    pub fn set_position(&mut self, id: u32, loc: Location) -> Result<()> {
        let idx = self.index_of(id)?;
        self.maze.check_bounds(loc)?;
        self.bolts[idx].set_position(loc);
        Ok(())
    }

    /// Set the single-jump target used by [`step`](Self::step) when no
    /// route is active.
    pub fn set_pending(&mut self, id: u32, loc: Location) -> Result<()> {
        let idx = self.index_of(id)?;
        self.maze.check_bounds(loc)?;
        self.bolts[idx].set_pending(loc);
        Ok(())
    }

    /// Advance a bolt one command and return its new position.
    ///
    /// With an active route, the bolt moves to the waypoint under the
    /// cursor; when the cursor reaches the end the route is cleared and the
    /// bolt becomes idle. Without a route, the bolt jumps to its pending
    /// move, which is idempotent.
    pub fn step(&mut self, id: u32) -> Result<Location> {
        let idx = self.index_of(id)?;
        if let Some(route) = self.routes.get_mut(&id) {
            if let Some(next) = route.advance() {
                if route.is_exhausted() {
                    self.routes.remove(&id);
                    log::debug!("bolt {id} finished its route at {next}");
                }
                self.bolts[idx].set_position(next);
                return Ok(next);
            }
            self.routes.remove(&id);
        }
        let pending = self.bolts[idx].pending_move();
        self.bolts[idx].set_position(pending);
        Ok(pending)
    }

    // -----------------------------------------------------------------------
    // Dispatch
    // -----------------------------------------------------------------------

    fn plan(&mut self, from: Location, to: Location) -> Result<Vec<Location>> {
        let result = self
            .finder
            .astar(&self.maze, from, |l| l == to, |l| manhattan(l, to));
        let Some(mut dense) = result.path else {
            return Err(SwarmError::Unreachable { from, to });
        };
        if dense.last() != Some(&to) {
            dense.push(to);
        }
        Ok(optimize(&dense)?)
    }

    /// Plan a route from the bolt's current position to `target`, store it
    /// with its cursor at 0 (replacing any prior route) and point the
    /// bolt's pending move at the final waypoint. Returns the stored
    /// waypoints.
    ///
    /// When the bolt already stands on `target` the optimized list is
    /// empty: no route is stored, any prior route is dropped and the bolt
    /// is idle. Fails with [`SwarmError::Unreachable`] leaving all state
    /// unchanged.
    pub fn assign_route(&mut self, id: u32, target: Location) -> Result<&[Location]> {
        let idx = self.index_of(id)?;
        self.maze.check_bounds(target)?;
        let position = self.bolts[idx].position();
        let waypoints = self.plan(position, target)?;

        log::debug!(
            "bolt {id}: route {position} -> {target}, {} waypoints",
            waypoints.len()
        );
        match waypoints.last().copied() {
            Some(destination) => {
                self.bolts[idx].set_pending(destination);
                self.routes.insert(id, Route::new(waypoints));
                Ok(self
                    .routes
                    .get(&id)
                    .map(Route::waypoints)
                    .unwrap_or_default())
            }
            None => {
                self.bolts[idx].set_pending(position);
                self.routes.remove(&id);
                Ok(&[])
            }
        }
    }

    /// The stored route of a bolt, if it has one.
    pub fn route(&self, id: u32) -> Result<Option<&Route>> {
        self.index_of(id)?;
        Ok(self.routes.get(&id))
    }

    /// Find the idle bolt with the smallest A* path length to `target`.
    ///
    /// Busy bolts and bolts that cannot reach the target are skipped;
    /// zero-length matches follow the configured [`ZeroDistancePolicy`].
    /// Ties resolve to the lowest id. Returns `None` when no idle bolt
    /// qualifies.
    pub fn nearest_idle(&mut self, target: Location) -> Option<u32> {
        let idle: Vec<(u32, Location)> = self
            .bolts
            .iter()
            .filter(|b| !self.routes.contains_key(&b.id()))
            .map(|b| (b.id(), b.position()))
            .collect();

        let mut best: Option<(i32, u32)> = None;
        for (id, position) in idle {
            let result =
                self.finder
                    .astar(&self.maze, position, |l| l == target, |l| manhattan(l, target));
            let Some(path) = result.path else {
                continue;
            };
            let dist = path.len() as i32 - 1;
            if dist == 0 && self.policy == ZeroDistancePolicy::Exclude {
                continue;
            }
            if best.is_none_or(|(d, _)| dist < d) {
                best = Some((dist, id));
            }
        }
        best.map(|(_, id)| id)
    }

    /// Assign the nearest idle bolt to `target` in one call, returning its
    /// id and the stored waypoints, or `None` when no idle bolt can take
    /// the job.
    pub fn dispatch(&mut self, target: Location) -> Result<Option<(u32, Vec<Location>)>> {
        let Some(id) = self.nearest_idle(target) else {
            return Ok(None);
        };
        let waypoints = self.assign_route(id, target)?.to_vec();
        Ok(Some((id, waypoints)))
    }

    /// Route every bolt to the home cell. Bolts that cannot reach it are
    /// skipped with a warning; bolts already home are left idle.
    pub fn recall_all(&mut self, home: Location) -> Result<()> {
        let ids: Vec<u32> = self.bolts.iter().map(Bolt::id).collect();
        for id in ids {
            match self.assign_route(id, home) {
                Ok(_) => {}
                Err(SwarmError::Unreachable { from, .. }) => {
                    log::warn!("bolt {id} at {from} cannot reach home {home}");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Edit a single maze cell. Routes computed before the edit are kept
    /// as stored; callers must tolerate goals made unreachable by edits.
    pub fn edit_cell(&mut self, loc: Location, cell: Cell) -> Result<()> {
        self.maze.set(loc, cell)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolt_core::GridError;

    fn open_swarm(size: i32) -> Swarm {
        Swarm::new(Maze::new(size, size).unwrap())
    }

    // -----------------------------------------------------------------------
    // Registry
    // -----------------------------------------------------------------------

    #[test]
    fn register_assigns_sequential_ids_from_one() {
        let mut swarm = open_swarm(4);
        assert_eq!(swarm.register().id(), 1);
        assert_eq!(swarm.register().id(), 2);
        assert_eq!(swarm.bolts().len(), 2);
        assert_eq!(swarm.get(1).unwrap().position(), Location::ZERO);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let swarm = open_swarm(4);
        assert_eq!(swarm.get(1), Err(SwarmError::NotFound { id: 1 }));
        assert_eq!(swarm.get(0), Err(SwarmError::NotFound { id: 0 }));
    }

    #[test]
    fn reset_clears_registry_and_reissues_ids() {
        let mut swarm = open_swarm(4);
        swarm.register();
        swarm.register();
        swarm.assign_route(1, Location::new(3, 3)).unwrap();
        swarm.reset();
        assert!(swarm.bolts().is_empty());
        assert_eq!(swarm.register().id(), 1);
        assert_eq!(swarm.is_busy(1), Ok(false));
    }

    #[test]
    fn custom_spawn_is_bounds_checked() {
        let maze = Maze::new(3, 3).unwrap();
        assert!(Swarm::with_spawn(maze.clone(), Location::new(2, 2)).is_ok());
        assert!(matches!(
            Swarm::with_spawn(maze, Location::new(3, 3)),
            Err(SwarmError::Grid(GridError::OutOfRange { .. }))
        ));
    }

    // -----------------------------------------------------------------------
    // Scenario 1: empty 4x4, route (0,0) -> (3,3)
    // -----------------------------------------------------------------------

    #[test]
    fn assign_route_on_open_grid_single_turn() {
        let mut swarm = open_swarm(4);
        let id = swarm.register().id();
        let target = Location::new(3, 3);
        let waypoints = swarm.assign_route(id, target).unwrap().to_vec();
        // Up/right/down/left neighbor order with FIFO tie-break pins the
        // along-the-top path: one turn at (3,0), then the target.
        assert_eq!(waypoints, vec![Location::new(3, 0), target]);
        assert_eq!(
            bolt_paths::expand(Location::ZERO, &waypoints).len(),
            7 // dense length of the 4x4 corner-to-corner path
        );
        assert_eq!(swarm.get(id).unwrap().pending_move(), target);
        assert_eq!(swarm.is_busy(id), Ok(true));

        assert_eq!(swarm.step(id), Ok(Location::new(3, 0)));
        assert_eq!(swarm.step(id), Ok(target));
        assert_eq!(swarm.get(id).unwrap().position(), target);
        assert_eq!(swarm.is_busy(id), Ok(false));
    }

    // -----------------------------------------------------------------------
    // Scenario 2: blocking row
    // -----------------------------------------------------------------------

    #[test]
    fn unreachable_target_leaves_state_unchanged() {
        let mut swarm = Swarm::new(
            Maze::from_rows(&[[0u8, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap(),
        );
        let id = swarm.register().id();
        let before = *swarm.get(id).unwrap();
        let err = swarm.assign_route(id, Location::new(1, 2)).unwrap_err();
        assert_eq!(
            err,
            SwarmError::Unreachable {
                from: Location::ZERO,
                to: Location::new(1, 2)
            }
        );
        assert_eq!(*swarm.get(id).unwrap(), before);
        assert_eq!(swarm.is_busy(id), Ok(false));
    }

    // -----------------------------------------------------------------------
    // Scenario 3: target equals position
    // -----------------------------------------------------------------------

    #[test]
    fn route_to_own_cell_stores_nothing_and_step_stays_put() {
        let mut swarm = open_swarm(4);
        let id = swarm.register().id();
        let waypoints = swarm.assign_route(id, Location::ZERO).unwrap();
        assert!(waypoints.is_empty());
        assert_eq!(swarm.is_busy(id), Ok(false));
        assert_eq!(swarm.route(id), Ok(None));
        assert_eq!(swarm.step(id), Ok(Location::ZERO));
        assert_eq!(swarm.get(id).unwrap().position(), Location::ZERO);
    }

    #[test]
    fn route_to_own_cell_replaces_a_prior_route() {
        let mut swarm = open_swarm(4);
        let id = swarm.register().id();
        swarm.assign_route(id, Location::new(3, 3)).unwrap();
        assert_eq!(swarm.is_busy(id), Ok(true));
        swarm.assign_route(id, Location::ZERO).unwrap();
        assert_eq!(swarm.is_busy(id), Ok(false));
        assert_eq!(swarm.get(id).unwrap().pending_move(), Location::ZERO);
    }

    // -----------------------------------------------------------------------
    // Scenario 4: nearest idle bolt
    // -----------------------------------------------------------------------

    #[test]
    fn nearest_idle_breaks_ties_by_lowest_id() {
        let mut swarm = open_swarm(4);
        let a = swarm.register().id();
        let b = swarm.register().id();
        swarm.set_position(b, Location::new(2, 2)).unwrap();
        // Both bolts are 2 steps from (2,0); the lower id wins.
        assert_eq!(swarm.nearest_idle(Location::new(2, 0)), Some(a));
    }

    #[test]
    fn nearest_idle_skips_busy_bolts() {
        let mut swarm = open_swarm(4);
        let a = swarm.register().id();
        let b = swarm.register().id();
        swarm.set_position(b, Location::new(3, 3)).unwrap();
        swarm.assign_route(a, Location::new(0, 3)).unwrap();
        // Bolt a is closer to (1,0) but busy.
        assert_eq!(swarm.nearest_idle(Location::new(1, 0)), Some(b));
    }

    #[test]
    fn nearest_idle_zero_distance_policy() {
        let mut swarm = open_swarm(4);
        let a = swarm.register().id();
        let b = swarm.register().id();
        swarm.set_position(b, Location::new(2, 2)).unwrap();
        // Bolt b stands on the target: excluded by default.
        assert_eq!(swarm.nearest_idle(Location::new(2, 2)), Some(a));
        swarm.set_zero_distance_policy(ZeroDistancePolicy::Include);
        assert_eq!(swarm.nearest_idle(Location::new(2, 2)), Some(b));
    }

    #[test]
    fn nearest_idle_none_when_target_unreachable() {
        let mut swarm = Swarm::new(
            Maze::from_rows(&[[0u8, 0], [1, 1], [0, 0]]).unwrap(),
        );
        swarm.register();
        assert_eq!(swarm.nearest_idle(Location::new(0, 2)), None);
    }

    // -----------------------------------------------------------------------
    // Stepping and pending moves
    // -----------------------------------------------------------------------

    #[test]
    fn step_without_route_jumps_to_pending() {
        let mut swarm = open_swarm(4);
        let id = swarm.register().id();
        swarm.set_pending(id, Location::new(2, 1)).unwrap();
        assert_eq!(swarm.step(id), Ok(Location::new(2, 1)));
        // Idempotent while pending stays put.
        assert_eq!(swarm.step(id), Ok(Location::new(2, 1)));
    }

    #[test]
    fn new_assignment_replaces_the_old_route() {
        let mut swarm = open_swarm(4);
        let id = swarm.register().id();
        swarm.assign_route(id, Location::new(3, 3)).unwrap();
        let waypoints = swarm.assign_route(id, Location::new(0, 3)).unwrap().to_vec();
        assert_eq!(waypoints, vec![Location::new(0, 3)]);
        let route = swarm.route(id).unwrap().expect("route stored");
        assert_eq!(route.cursor(), 0);
        assert_eq!(route.waypoints(), waypoints.as_slice());
    }

    #[test]
    fn force_move_is_bounds_checked() {
        let mut swarm = open_swarm(3);
        let id = swarm.register().id();
        assert!(swarm.set_position(id, Location::new(5, 0)).is_err());
        assert!(swarm.set_pending(id, Location::new(0, -1)).is_err());
    }

    // -----------------------------------------------------------------------
    // Dispatch and recall
    // -----------------------------------------------------------------------

    #[test]
    fn dispatch_assigns_the_nearest_idle_bolt() {
        let mut swarm = open_swarm(4);
        let a = swarm.register().id();
        let b = swarm.register().id();
        swarm.set_position(b, Location::new(3, 1)).unwrap();
        let (id, waypoints) = swarm
            .dispatch(Location::new(3, 3))
            .unwrap()
            .expect("an idle bolt is available");
        assert_eq!(id, b);
        assert!(!waypoints.is_empty());
        assert_eq!(swarm.is_busy(b), Ok(true));
        assert_eq!(swarm.is_busy(a), Ok(false));
    }

    #[test]
    fn dispatch_with_no_candidates_is_none() {
        let mut swarm = open_swarm(4);
        assert_eq!(swarm.dispatch(Location::new(1, 1)), Ok(None));
    }

    #[test]
    fn recall_all_routes_everyone_home() {
        let mut swarm = open_swarm(4);
        let a = swarm.register().id();
        let b = swarm.register().id();
        swarm.set_position(a, Location::new(3, 3)).unwrap();
        swarm.recall_all(Location::ZERO).unwrap();
        assert_eq!(swarm.is_busy(a), Ok(true));
        // Bolt b is already home and stays idle.
        assert_eq!(swarm.is_busy(b), Ok(false));
        while swarm.is_busy(a).unwrap() {
            swarm.step(a).unwrap();
        }
        assert_eq!(swarm.get(a).unwrap().position(), Location::ZERO);
    }

    // -----------------------------------------------------------------------
    // Maze edits
    // -----------------------------------------------------------------------

    #[test]
    fn edit_cell_can_make_a_goal_unreachable() {
        let mut swarm = Swarm::new(
            Maze::from_rows(&[[0u8, 0, 0], [1, 1, 0], [0, 0, 0]]).unwrap(),
        );
        let id = swarm.register().id();
        assert!(swarm.assign_route(id, Location::new(0, 2)).is_ok());
        swarm.edit_cell(Location::new(2, 1), Cell::Blocked).unwrap();
        // Re-planning now fails; the previously stored route is kept.
        let stored = swarm.route(id).unwrap().expect("route stored").clone();
        assert!(matches!(
            swarm.assign_route(id, Location::new(0, 2)),
            Err(SwarmError::Unreachable { .. })
        ));
        assert_eq!(swarm.route(id).unwrap(), Some(&stored));
    }

    #[test]
    fn edit_cell_out_of_range_is_an_error() {
        let mut swarm = open_swarm(3);
        assert!(matches!(
            swarm.edit_cell(Location::new(9, 9), Cell::Blocked),
            Err(SwarmError::Grid(GridError::OutOfRange { .. }))
        ));
    }
}
