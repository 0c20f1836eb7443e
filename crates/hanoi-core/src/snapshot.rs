use crate::clock::{Clock, Timestamp};
use crate::engine::Engine;
use crate::rng::RandomSource;
use crate::types::{Disc, Move, Phase, PEG_COUNT};
use serde::{Deserialize, Serialize};

/// Owned copy of a session, handed to the presentation layer after each call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub pegs: [Vec<Disc>; PEG_COUNT],
    pub disc_count: u8,
    pub selected_peg: Option<usize>,
    pub target_peg: usize,
    pub move_count: u32,
    pub move_history: Vec<Move>,
    pub started: bool,
    pub completed: bool,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub phase: Phase,
    pub min_moves: u32,
    pub efficiency: u32,
    /// Seconds played when the snapshot was taken
    pub game_time: u64,
}

impl<R: RandomSource, C: Clock> Engine<R, C> {
    /// Copy out the full session state along with derived statistics
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            pegs: self.pegs().clone(),
            disc_count: self.disc_count(),
            selected_peg: self.selected_peg(),
            target_peg: self.target_peg(),
            move_count: self.move_count(),
            move_history: self.move_history().to_vec(),
            started: self.is_started(),
            completed: self.is_completed(),
            start_time: self.start_time(),
            end_time: self.end_time(),
            phase: self.phase(),
            min_moves: self.min_moves(),
            efficiency: self.efficiency(),
            game_time: self.game_time(),
        }
    }
}

/// Format seconds as `MM:SS`
pub fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
