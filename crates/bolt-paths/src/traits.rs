use bolt_core::{Location, Maze};

/// Minimal search interface — enumerates the admissible next locations
/// from a cell.
pub trait Frontier {
    /// Append the admissible neighbors of `loc` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, loc: Location, buf: &mut Vec<Location>);
}

impl Frontier for Maze {
    fn neighbors(&self, loc: Location, buf: &mut Vec<Location>) {
        Maze::neighbors(self, loc, buf);
    }
}
