//! The game state machine.
//!
//! One [`Engine`] owns one session. Every operation either applies fully or
//! returns a [`Rejection`] and leaves the state untouched. Clicking the held
//! peg is the exception: it is reported as [`Rejection::Released`] but the
//! selection is dropped.

use crate::clock::{Clock, SystemClock, Timestamp};
use crate::config::EngineConfig;
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{Disc, Hint, Move, Phase, Rejection, SelectOutcome, PEG_COUNT};
use tracing::{debug, trace};

/// Tower of Hanoi session state and rules
#[derive(Debug, Clone)]
pub struct Engine<R = SimpleRng, C = SystemClock> {
    /// Disc sizes per peg, bottom to top
    pegs: [Vec<Disc>; PEG_COUNT],
    disc_count: u8,
    selected_peg: Option<usize>,
    target_peg: usize,
    move_count: u32,
    move_history: Vec<Move>,
    started: bool,
    completed: bool,
    start_time: Option<Timestamp>,
    end_time: Option<Timestamp>,
    rng: R,
    clock: C,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(SimpleRng::new(), SystemClock)
    }
}

impl<R: RandomSource, C: Clock> Engine<R, C> {
    /// Create an idle engine with the default disc count
    pub fn new(rng: R, clock: C) -> Self {
        Self::with_config(EngineConfig::default(), rng, clock)
    }

    /// Create an idle engine from a configuration.
    ///
    /// An out-of-range disc count falls back to the default.
    pub fn with_config(config: EngineConfig, rng: R, clock: C) -> Self {
        let disc_count = match config.validate() {
            Ok(()) => config.disc_count,
            Err(rejection) => {
                debug!(%rejection, "invalid config, using default disc count");
                EngineConfig::default().disc_count
            }
        };

        Self {
            pegs: Default::default(),
            disc_count,
            selected_peg: None,
            target_peg: 0,
            move_count: 0,
            move_history: Vec::new(),
            started: false,
            completed: false,
            start_time: None,
            end_time: None,
            rng,
            clock,
        }
    }

    /// Begin a fresh session.
    ///
    /// All discs go on a random peg and the target is a random one of the
    /// other two. Any previous session is discarded.
    pub fn start_game(&mut self) {
        let start = self.rng.next_index(PEG_COUNT);
        let others: Vec<usize> = (0..PEG_COUNT).filter(|&peg| peg != start).collect();
        let target = others[self.rng.next_index(others.len())];

        let mut pegs: [Vec<Disc>; PEG_COUNT] = Default::default();
        pegs[start] = (1..=self.disc_count).rev().collect();

        self.pegs = pegs;
        self.selected_peg = None;
        self.target_peg = target;
        self.move_count = 0;
        self.move_history.clear();
        self.started = true;
        self.completed = false;
        self.start_time = Some(self.clock.now_millis());
        self.end_time = None;

        debug!(start, target, discs = self.disc_count, "game started");
    }

    /// Return to idle, keeping the configured disc count
    pub fn reset_game(&mut self) {
        self.pegs = Default::default();
        self.selected_peg = None;
        self.move_count = 0;
        self.move_history.clear();
        self.started = false;
        self.completed = false;
        self.start_time = None;
        self.end_time = None;

        debug!("game reset");
    }

    /// Change the number of discs used by the next session.
    ///
    /// Only allowed while idle; the current value is kept on refusal.
    pub fn set_disc_count(&mut self, count: u8) -> Result<(), Rejection> {
        if self.started {
            return Err(Rejection::SessionActive);
        }
        EngineConfig::new(count)?;
        self.disc_count = count;
        Ok(())
    }

    /// Change the target peg of the session in play
    pub fn set_target_peg(&mut self, peg: usize) -> Result<(), Rejection> {
        self.ensure_in_play()?;
        Self::ensure_peg(peg)?;
        if self.pegs[peg].len() == self.disc_count as usize {
            return Err(Rejection::TargetHoldsStack(peg));
        }
        self.target_peg = peg;
        debug!(target = peg, "target changed");
        Ok(())
    }

    /// Handle a click on a peg.
    ///
    /// With nothing held, picks up a non-empty peg. With a peg held, clicking
    /// it again releases it, which counts as a failed selection, and clicking
    /// another peg attempts the move. A refused move keeps the selection.
    pub fn select_peg(&mut self, peg: usize) -> Result<SelectOutcome, Rejection> {
        self.ensure_in_play()?;
        Self::ensure_peg(peg)?;

        match self.selected_peg {
            None => {
                if self.pegs[peg].is_empty() {
                    trace!(peg, "cannot pick up empty peg");
                    return Err(Rejection::EmptyPeg(peg));
                }
                self.selected_peg = Some(peg);
                Ok(SelectOutcome::Picked(peg))
            }
            Some(held) if held == peg => {
                self.selected_peg = None;
                Err(Rejection::Released(peg))
            }
            Some(held) => {
                let record = self.make_move(held, peg)?;
                if self.completed {
                    Ok(SelectOutcome::Won(record))
                } else {
                    Ok(SelectOutcome::Moved(record))
                }
            }
        }
    }

    /// Release any held peg
    pub fn clear_selection(&mut self) {
        self.selected_peg = None;
    }

    /// Move the top disc of `from` onto `to`
    pub fn make_move(&mut self, from: usize, to: usize) -> Result<Move, Rejection> {
        let disc = match self.ensure_in_play().and_then(|()| self.check_move(from, to)) {
            Ok(disc) => disc,
            Err(rejection) => {
                trace!(from, to, %rejection, "move rejected");
                return Err(rejection);
            }
        };

        self.pegs[from].pop();
        self.pegs[to].push(disc);

        let record = Move {
            from,
            to,
            disc,
            timestamp: self.clock.now_millis(),
        };
        self.move_count += 1;
        self.move_history.push(record);
        self.selected_peg = None;

        debug!(from, to, disc, moves = self.move_count, "disc moved");
        self.check_win();
        Ok(record)
    }

    /// Reverse the most recent move.
    ///
    /// Works whenever there is history, including after the winning move. The
    /// completed flag and end time stay as they are.
    pub fn undo_move(&mut self) -> Result<Move, Rejection> {
        let last = self.move_history.pop().ok_or(Rejection::NothingToUndo)?;

        let lifted = self.pegs[last.to].pop();
        debug_assert_eq!(lifted, Some(last.disc), "history out of sync with pegs");
        self.pegs[last.from].push(last.disc);
        self.move_count = self.move_count.saturating_sub(1);
        self.selected_peg = None;

        debug!(from = last.from, to = last.to, disc = last.disc, "move undone");
        Ok(last)
    }

    /// First legal move in peg order, or `None` outside of play
    pub fn get_hint(&self) -> Option<Hint> {
        if self.ensure_in_play().is_err() {
            return None;
        }
        (0..PEG_COUNT)
            .flat_map(|from| (0..PEG_COUNT).map(move |to| (from, to)))
            .find(|&(from, to)| self.is_valid_move(from, to))
            .map(|(from, to)| Hint { from, to })
    }

    /// Whether the top disc of `from` may be placed on `to`
    pub fn is_valid_move(&self, from: usize, to: usize) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Fewest moves that solve the configured disc count
    pub fn min_moves(&self) -> u32 {
        (1u32 << self.disc_count) - 1
    }

    /// Minimum moves as a rounded percentage of moves made, 0 before any move
    pub fn efficiency(&self) -> u32 {
        if self.move_count == 0 {
            return 0;
        }
        // round half up
        (200 * self.min_moves() + self.move_count) / (2 * self.move_count)
    }

    /// Whole seconds since the session started, frozen once it is won
    pub fn game_time(&self) -> u64 {
        match self.start_time {
            Some(start) => {
                let end = self.end_time.unwrap_or_else(|| self.clock.now_millis());
                end.saturating_sub(start) / 1000
            }
            None => 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::Idle
        } else if self.completed {
            Phase::Won
        } else if let Some(peg) = self.selected_peg {
            Phase::Holding(peg)
        } else {
            Phase::Selecting
        }
    }

    // Getters
    pub fn pegs(&self) -> &[Vec<Disc>; PEG_COUNT] {
        &self.pegs
    }
    pub fn peg(&self, index: usize) -> Option<&[Disc]> {
        self.pegs.get(index).map(Vec::as_slice)
    }
    pub fn disc_count(&self) -> u8 {
        self.disc_count
    }
    pub fn selected_peg(&self) -> Option<usize> {
        self.selected_peg
    }
    pub fn target_peg(&self) -> usize {
        self.target_peg
    }
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }
    pub fn is_started(&self) -> bool {
        self.started
    }
    pub fn is_completed(&self) -> bool {
        self.completed
    }
    pub fn start_time(&self) -> Option<Timestamp> {
        self.start_time
    }
    pub fn end_time(&self) -> Option<Timestamp> {
        self.end_time
    }

    fn ensure_in_play(&self) -> Result<(), Rejection> {
        if !self.started {
            Err(Rejection::NotStarted)
        } else if self.completed {
            Err(Rejection::Finished)
        } else {
            Ok(())
        }
    }

    fn ensure_peg(peg: usize) -> Result<(), Rejection> {
        if peg < PEG_COUNT {
            Ok(())
        } else {
            Err(Rejection::PegOutOfRange(peg))
        }
    }

    /// Legality of a move, returning the disc that would travel
    fn check_move(&self, from: usize, to: usize) -> Result<Disc, Rejection> {
        Self::ensure_peg(from)?;
        Self::ensure_peg(to)?;
        if from == to {
            return Err(Rejection::SamePeg(from));
        }
        let disc = *self.pegs[from].last().ok_or(Rejection::EmptyPeg(from))?;
        if let Some(&onto) = self.pegs[to].last() {
            if onto <= disc {
                return Err(Rejection::LargerOnSmaller { disc, onto });
            }
        }
        Ok(disc)
    }

    fn check_win(&mut self) {
        let target = &self.pegs[self.target_peg];
        if target.len() != self.disc_count as usize {
            return;
        }
        debug_assert!(
            target.windows(2).all(|pair| pair[0] > pair[1]),
            "target peg out of order: {:?}",
            target
        );

        self.completed = true;
        self.selected_peg = None;
        self.end_time = Some(self.clock.now_millis());
        debug!(moves = self.move_count, target = self.target_peg, "puzzle solved");
    }
}
