//! Bolt registry and route dispatcher.
//!
//! A [`Swarm`] owns the maze, the registered bolts and their active routes,
//! and funnels every mutation through its methods: the registry and route
//! table form a single shared mutable resource with a single logical owner
//! per process. An embedding service serializes concurrent access
//! externally; nothing here blocks on I/O.
//!
//! Route assignment plans with A* over the maze, collapses the dense path
//! through the waypoint optimizer, and then [`Swarm::step`] advances a bolt
//! one waypoint per call until the route is exhausted.

mod bolt;
mod error;
mod route;
mod swarm;

pub use bolt::Bolt;
pub use error::{Result, SwarmError};
pub use route::Route;
pub use swarm::{Swarm, ZeroDistancePolicy};
