use thiserror::Error;

/// Errors raised by path post-processing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The optimizer requires a dense path containing at least its
    /// starting location.
    #[error("cannot optimize an empty path")]
    DegeneratePath,
}
