//! Core types for the bolt swarm: grid geometry and the occupancy maze.
//!
//! [`Location`] is the integer coordinate used as vertex identity by every
//! search, and [`Maze`] is the static free/blocked occupancy grid whose
//! [`Maze::neighbors`] method is the sole mechanism higher layers use to
//! explore it.

mod error;
mod geom;
mod maze;

pub use error::{GridError, Result};
pub use geom::Location;
pub use maze::{Cell, Maze};
