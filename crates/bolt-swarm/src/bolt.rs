use bolt_core::Location;

/// A registered mobile agent.
///
/// The id is assigned at registration, increases monotonically from 1 and
/// is never reused. The pending move defaults to the current position and
/// is the single "jump" target used by [`Swarm::step`](crate::Swarm::step)
/// when no multi-step route is active. Whether a bolt is busy is derived
/// from the swarm's route table, never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bolt {
    id: u32,
    position: Location,
    pending: Location,
}

impl Bolt {
    pub(crate) fn new(id: u32, spawn: Location) -> Self {
        Self {
            id,
            position: spawn,
            pending: spawn,
        }
    }

    /// The bolt's permanent id.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Current position on the maze.
    #[inline]
    pub fn position(&self) -> Location {
        self.position
    }

    /// Where a routeless [`step`](crate::Swarm::step) will move the bolt.
    #[inline]
    pub fn pending_move(&self) -> Location {
        self.pending
    }

    pub(crate) fn set_position(&mut self, loc: Location) {
        self.position = loc;
    }

    pub(crate) fn set_pending(&mut self, loc: Location) {
        self.pending = loc;
    }
}
