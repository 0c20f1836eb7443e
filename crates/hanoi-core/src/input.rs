//! Keyboard commands and the feedback cue each one produces.

use crate::clock::Clock;
use crate::engine::Engine;
use crate::rng::RandomSource;
use crate::types::{Hint, SelectOutcome};
use serde::{Deserialize, Serialize};

/// A player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectPeg(usize),
    Start,
    Reset,
    Undo,
    Hint,
}

impl Command {
    /// Parse a browser key name (`KeyboardEvent.key`)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "1" => Some(Command::SelectPeg(0)),
            "2" => Some(Command::SelectPeg(1)),
            "3" => Some(Command::SelectPeg(2)),
            "n" | "N" => Some(Command::Start),
            "r" | "R" => Some(Command::Reset),
            "u" | "U" => Some(Command::Undo),
            "?" => Some(Command::Hint),
            _ => None,
        }
    }
}

/// Cue for the presentation layer, typically mapped to a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cue", rename_all = "snake_case")]
pub enum Feedback {
    Select,
    Drop,
    Victory,
    Error,
    Start,
    Reset,
    Undo,
    Hint(Hint),
    /// The command does not apply right now
    Ignored,
}

impl Feedback {
    pub fn name(&self) -> &'static str {
        match self {
            Feedback::Select => "select",
            Feedback::Drop => "drop",
            Feedback::Victory => "victory",
            Feedback::Error => "error",
            Feedback::Start => "start",
            Feedback::Reset => "reset",
            Feedback::Undo => "undo",
            Feedback::Hint(_) => "hint",
            Feedback::Ignored => "ignored",
        }
    }
}

impl<R: RandomSource, C: Clock> Engine<R, C> {
    /// Execute a command and report how it went
    pub fn apply(&mut self, command: Command) -> Feedback {
        match command {
            // peg keys only act on a game in play
            Command::SelectPeg(_) if !self.is_started() || self.is_completed() => {
                Feedback::Ignored
            }
            Command::SelectPeg(peg) => match self.select_peg(peg) {
                Ok(SelectOutcome::Picked(_)) => Feedback::Select,
                Ok(SelectOutcome::Moved(_)) => Feedback::Drop,
                Ok(SelectOutcome::Won(_)) => Feedback::Victory,
                Err(_) => Feedback::Error,
            },
            Command::Start => {
                self.start_game();
                Feedback::Start
            }
            Command::Reset => {
                self.reset_game();
                Feedback::Reset
            }
            Command::Undo => match self.undo_move() {
                Ok(_) => Feedback::Undo,
                Err(_) => Feedback::Error,
            },
            Command::Hint => match self.get_hint() {
                Some(hint) => Feedback::Hint(hint),
                None => Feedback::Ignored,
            },
        }
    }

    /// Parse and execute a key press; unknown keys are ignored
    pub fn handle_key(&mut self, key: &str) -> Feedback {
        match Command::from_key(key) {
            Some(command) => self.apply(command),
            None => Feedback::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::rng::SequenceRng;
    use crate::types::Phase;

    fn engine() -> Engine<SequenceRng, ManualClock> {
        let mut engine = Engine::new(SequenceRng::new(vec![0, 1]), ManualClock::new(0));
        engine.set_disc_count(3).unwrap();
        engine
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Command::from_key("1"), Some(Command::SelectPeg(0)));
        assert_eq!(Command::from_key("3"), Some(Command::SelectPeg(2)));
        assert_eq!(Command::from_key("N"), Some(Command::Start));
        assert_eq!(Command::from_key("r"), Some(Command::Reset));
        assert_eq!(Command::from_key("u"), Some(Command::Undo));
        assert_eq!(Command::from_key("?"), Some(Command::Hint));
        assert_eq!(Command::from_key("4"), None);
        assert_eq!(Command::from_key("Escape"), None);
    }

    #[test]
    fn test_peg_keys_ignored_when_idle() {
        let mut engine = engine();
        assert_eq!(engine.handle_key("1"), Feedback::Ignored);
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_keyboard_session() {
        let mut engine = engine();
        assert_eq!(engine.handle_key("n"), Feedback::Start);
        assert_eq!(engine.handle_key("2"), Feedback::Error);
        assert_eq!(engine.handle_key("1"), Feedback::Select);
        // releasing the held peg counts as a failed selection
        assert_eq!(engine.handle_key("1"), Feedback::Error);
        assert_eq!(engine.selected_peg(), None);
        assert_eq!(engine.handle_key("1"), Feedback::Select);
        assert_eq!(engine.handle_key("3"), Feedback::Drop);
        assert_eq!(
            engine.handle_key("?"),
            Feedback::Hint(Hint { from: 0, to: 1 })
        );
        assert_eq!(engine.handle_key("u"), Feedback::Undo);
        assert_eq!(engine.handle_key("u"), Feedback::Error);
        assert_eq!(engine.handle_key("r"), Feedback::Reset);
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.handle_key("?"), Feedback::Ignored);
    }

    #[test]
    fn test_victory_cue() {
        let mut engine = engine();
        engine.handle_key("n");
        let keys = ["1", "3", "1", "2", "3", "2", "1", "3", "2", "1", "2", "3", "1"];
        for key in keys {
            assert_ne!(engine.handle_key(key), Feedback::Error, "key {}", key);
        }
        assert_eq!(engine.handle_key("3"), Feedback::Victory);
        assert!(engine.is_completed());
        assert_eq!(engine.handle_key("1"), Feedback::Ignored);
    }

    #[test]
    fn test_feedback_json() {
        let json = serde_json::to_string(&Feedback::Hint(Hint { from: 2, to: 0 })).unwrap();
        assert_eq!(json, r#"{"cue":"hint","from":2,"to":0}"#);
        assert_eq!(
            serde_json::to_string(&Feedback::Drop).unwrap(),
            r#"{"cue":"drop"}"#
        );
        assert_eq!(Feedback::Victory.name(), "victory");
    }
}
