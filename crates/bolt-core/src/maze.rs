//! The occupancy grid: a static rectangle of free/blocked cells.

use std::fmt;

use crate::error::{GridError, Result};
use crate::geom::Location;

/// State of a single maze cell.
///
/// External grid specifications encode `Free` as 0 and `Blocked` as any
/// non-zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    Blocked,
}

impl Cell {
    /// Whether the cell is blocked.
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Cell::Blocked)
    }
}

impl From<u8> for Cell {
    fn from(v: u8) -> Self {
        if v == 0 { Cell::Free } else { Cell::Blocked }
    }
}

impl From<Cell> for u8 {
    fn from(c: Cell) -> Self {
        match c {
            Cell::Free => 0,
            Cell::Blocked => 1,
        }
    }
}

/// A fixed-size 2D occupancy grid.
///
/// The grid is static between edits: the only mutation path is [`Maze::set`].
/// [`Maze::neighbors`] is the sole mechanism other components use to explore
/// it — it yields the in-bounds, non-blocked cardinal neighbours of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Maze {
    /// Create a maze of the given size with every cell free.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(GridError::BadDimensions { width, height });
        }
        Ok(Self {
            cells: vec![Cell::Free; (width * height) as usize],
            width,
            height,
        })
    }

    /// Build a maze from a rectangular `[y][x]` occupancy map, 0 meaning
    /// free and non-zero meaning blocked.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as i32;
        if height == 0 || width == 0 {
            return Err(GridError::BadDimensions { width, height });
        }
        let mut cells = Vec::with_capacity((width * height) as usize);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(GridError::RaggedRow {
                    row: y,
                    len: row.len(),
                    expected: width as usize,
                });
            }
            cells.extend(row.iter().map(|&v| Cell::from(v)));
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Width of the maze.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the maze.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the location lies inside the maze.
    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.x >= 0 && loc.x < self.width && loc.y >= 0 && loc.y < self.height
    }

    /// Fail with [`GridError::OutOfRange`] if `loc` lies outside the maze.
    pub fn check_bounds(&self, loc: Location) -> Result<()> {
        if self.contains(loc) {
            Ok(())
        } else {
            Err(GridError::OutOfRange {
                loc,
                width: self.width,
                height: self.height,
            })
        }
    }

    #[inline]
    fn idx(&self, loc: Location) -> usize {
        (loc.y * self.width + loc.x) as usize
    }

    /// The cell at `loc`.
    pub fn cell(&self, loc: Location) -> Result<Cell> {
        self.check_bounds(loc)?;
        Ok(self.cells[self.idx(loc)])
    }

    /// Whether the cell at `loc` is blocked.
    pub fn is_blocked(&self, loc: Location) -> Result<bool> {
        Ok(self.cell(loc)?.is_blocked())
    }

    /// Set the cell at `loc`. Used to edit the maze live.
    ///
    /// No connectivity validation is performed; callers must tolerate goals
    /// that become unreachable after an edit.
    pub fn set(&mut self, loc: Location, cell: Cell) -> Result<()> {
        self.check_bounds(loc)?;
        let i = self.idx(loc);
        self.cells[i] = cell;
        Ok(())
    }

    /// Append the in-bounds, non-blocked cardinal neighbours of `loc` into
    /// `buf`, in the fixed order up, right, down, left. The caller clears
    /// `buf` before calling.
    ///
    /// Never includes `loc` itself or diagonal cells. A blocked or
    /// out-of-bounds `loc` yields nothing, so a blocked cell can never
    /// expand in a search.
    pub fn neighbors(&self, loc: Location, buf: &mut Vec<Location>) {
        if !self.contains(loc) || self.cells[self.idx(loc)].is_blocked() {
            return;
        }
        for n in loc.neighbors_4() {
            if self.contains(n) && !self.cells[self.idx(n)].is_blocked() {
                buf.push(n);
            }
        }
    }
}

impl fmt::Display for Maze {
    /// Render the maze as rows of `.` (free) and `#` (blocked).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.cells[self.idx(Location::new(x, y))];
                f.write_str(if c.is_blocked() { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
