//! Search strategies and route optimization for maze navigation.
//!
//! Three interchangeable traversal algorithms over the same
//! neighbor-enumeration seam:
//!
//! - **DFS** naive baseline ([`Pathfinder::depth_first`])
//! - **BFS** minimum-edge-count paths ([`Pathfinder::breadth_first`])
//! - **A\*** heuristic-guided shortest paths ([`Pathfinder::astar`])
//!
//! All three operate through [`Pathfinder`], which owns and reuses the
//! traversal state (parent links, scratch buffers) across queries, and
//! return a [`SearchResult`] carrying the explored count and the
//! reconstructed path.
//!
//! [`optimize`] collapses a dense cell-per-step path into the minimal
//! waypoint list an agent needs to replay it; [`expand`] is its inverse.

mod astar;
mod bfs;
mod dfs;
mod distance;
mod error;
mod optimize;
mod pathfinder;
mod traits;

pub use distance::manhattan;
pub use error::PathError;
pub use optimize::{expand, optimize};
pub use pathfinder::{Pathfinder, SearchResult};
pub use traits::Frontier;
