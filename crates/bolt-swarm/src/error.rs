use thiserror::Error;

use bolt_core::{GridError, Location};
use bolt_paths::PathError;

/// Errors raised by swarm operations. All are local, recoverable
/// conditions reported to the caller; none are fatal to the process.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwarmError {
    /// No bolt registered under this id.
    #[error("no bolt registered with id {id}")]
    NotFound { id: u32 },

    /// No path exists between the two locations under the current maze.
    /// Raised only by operations that require a guaranteed path; the
    /// searches themselves report "no path" as a normal absent result.
    #[error("no route from {from} to {to}")]
    Unreachable { from: Location, to: Location },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Path(#[from] PathError),
}

pub type Result<T> = std::result::Result<T, SwarmError>;
