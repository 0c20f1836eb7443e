use crate::clock::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of pegs on the board
pub const PEG_COUNT: usize = 3;

/// A disc, identified by its size (1 is the smallest)
pub type Disc = u8;

/// A completed relocation of one disc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: usize,
    pub to: usize,
    pub disc: Disc,
    /// Wall-clock time the move was made (ms since epoch)
    pub timestamp: Timestamp,
}

/// A currently legal move suggested to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
    pub from: usize,
    pub to: usize,
}

/// Phase of the session, derived from its flags and selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No session running
    Idle,
    /// In play, nothing picked up
    Selecting,
    /// In play, the top disc of this peg is picked up
    Holding(usize),
    /// All discs are on the target peg
    Won,
}

/// Result of a successful `select_peg` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The peg's top disc is now held
    Picked(usize),
    /// The held disc was placed on the clicked peg
    Moved(Move),
    /// The move finished the puzzle
    Won(Move),
}

/// Why the engine refused an operation.
///
/// None of these are fatal: state is left untouched and the caller decides
/// what feedback to give. `Released` is the one exception, it also drops the
/// held peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no game in progress")]
    NotStarted,

    #[error("game already completed")]
    Finished,

    #[error("peg {0} released without a move")]
    Released(usize),

    #[error("peg {0} does not exist")]
    PegOutOfRange(usize),

    #[error("cannot move peg {0} onto itself")]
    SamePeg(usize),

    #[error("peg {0} is empty")]
    EmptyPeg(usize),

    #[error("disc {disc} cannot be placed on smaller disc {onto}")]
    LargerOnSmaller { disc: Disc, onto: Disc },

    #[error("no move to undo")]
    NothingToUndo,

    #[error("disc count {0} is outside the playable range")]
    DiscCountOutOfRange(u8),

    #[error("cannot change disc count during a game")]
    SessionActive,

    #[error("peg {0} already holds every disc")]
    TargetHoldsStack(usize),
}
