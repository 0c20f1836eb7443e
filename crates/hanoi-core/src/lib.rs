//! Tower of Hanoi game engine
//!
//! A self-contained state machine for a three-peg, N-disc puzzle: move
//! validation, win detection, move counting, timing, undo and a single-step
//! hint. The engine performs no I/O; a presentation layer forwards input into
//! [`Engine`] and renders the [`GameSnapshot`] it reads back after each call.
//!
//! ```
//! use hanoi_core::{Engine, ManualClock, SequenceRng};
//!
//! // Stack on peg 0, target the second of the remaining pegs (peg 2).
//! let mut engine = Engine::new(SequenceRng::new(vec![0, 1]), ManualClock::new(0));
//! engine.set_disc_count(3).unwrap();
//! engine.start_game();
//! assert_eq!(engine.target_peg(), 2);
//! assert!(engine.make_move(0, 2).is_ok());
//! assert_eq!(engine.move_count(), 1);
//! ```

mod clock;
mod config;
mod engine;
mod input;
mod rng;
mod snapshot;
mod types;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use config::{EngineConfig, DEFAULT_DISCS, MAX_DISCS, MIN_DISCS};
pub use engine::Engine;
pub use input::{Command, Feedback};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use snapshot::{format_time, GameSnapshot};
pub use types::{Disc, Hint, Move, Phase, Rejection, SelectOutcome, PEG_COUNT};
