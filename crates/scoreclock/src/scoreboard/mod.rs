//! Scoreboard domain: the game clock, the score and the rule tying them.
//!
//! Scoring is only accepted while timekeeping is active so that presses
//! during dead time do not change the board. The counter never sees the
//! timer directly; it asks a `TimekeepingGate`.
//!
//! Submodules:
//! - gate: the capability trait and the always-open gate
//! - counter: the non-negative score
//! - timer: the clock state machine and `MM:SS.mmm` formatting

mod counter;
mod gate;
mod timer;

pub use counter::Counter;
pub use gate::{AlwaysOpen, TimekeepingGate};
pub use timer::{format_clock, Indicator, Phase, Timer};

/// Score change requested by a key press or a remote button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreCommand {
    Increment,
    Decrement,
}

#[derive(Debug)]
pub struct Scoreboard {
    pub timer: Timer,
    pub score: Counter,
    /// When false the score ignores the clock entirely.
    pub gated: bool,
}

impl Scoreboard {
    pub fn new(timer: Timer, gated: bool) -> Self {
        Self {
            timer,
            score: Counter::new(),
            gated,
        }
    }

    /// Returns whether the score changed.
    pub fn apply(&mut self, command: ScoreCommand) -> bool {
        let gate: &dyn TimekeepingGate = if self.gated {
            &self.timer
        } else {
            &AlwaysOpen
        };
        let changed = match command {
            ScoreCommand::Increment => self.score.increment(gate),
            ScoreCommand::Decrement => self.score.decrement(gate),
        };
        if changed {
            tracing::debug!(?command, score = self.score.value(), "score changed");
        }
        changed
    }
}

#[cfg(test)]
mod tests;
