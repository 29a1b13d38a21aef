//! External button input over a serial line.
//!
//! A button box sends newline-terminated ASCII codes: `A` adds a point and
//! `B` removes one. The poller is driven by the scheduler at a fixed cadence
//! and never blocks the loop: it only consumes bytes that are already
//! buffered by the device. Read failures are logged and polling carries on;
//! the poller re-arms itself for the lifetime of the process.
//!
//! Submodules:
//! - device: the `InputChannel` trait and the `serialport` implementation
//! - lines: newline framing for partial reads

mod device;
mod lines;

use std::time::{Duration, Instant};

use crate::scheduler::{Scheduler, Task};
use crate::scoreboard::ScoreCommand;

pub use device::{InputChannel, SerialDevice};
use lines::LineBuffer;

/// Map one received line to a score command. Only the exact codes count.
pub fn decode_line(line: &str) -> Option<ScoreCommand> {
    match line.trim() {
        "A" => Some(ScoreCommand::Increment),
        "B" => Some(ScoreCommand::Decrement),
        _ => None,
    }
}

pub struct InputPoller {
    channel: Option<Box<dyn InputChannel>>,
    lines: LineBuffer,
    interval: Duration,
}

impl InputPoller {
    pub fn new(channel: Option<Box<dyn InputChannel>>, interval: Duration) -> Self {
        Self {
            channel,
            lines: LineBuffer::new(),
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    /// Poller with no device attached; keeps its cadence but reads nothing.
    pub fn detached(interval: Duration) -> Self {
        Self::new(None, interval)
    }

    /// Queue the first poll.
    pub fn arm(&self, now: Instant, scheduler: &mut Scheduler) {
        scheduler.schedule(Task::PollInput, now);
    }

    /// Scheduler callback. Returns decoded commands and always re-arms.
    pub fn poll(&mut self, now: Instant, scheduler: &mut Scheduler) -> Vec<ScoreCommand> {
        let commands = self.read_commands();
        scheduler.schedule_after(Task::PollInput, now, self.interval);
        commands
    }

    fn read_commands(&mut self) -> Vec<ScoreCommand> {
        let Some(channel) = self.channel.as_mut() else {
            return Vec::new();
        };

        let bytes = match channel.read_available() {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(device = channel.name(), error = %err, "serial read failed");
                return Vec::new();
            }
        };

        let mut commands = Vec::new();
        for line in self.lines.push(&bytes) {
            tracing::debug!(line = %line, "serial line received");
            match decode_line(&line) {
                Some(command) => commands.push(command),
                None => tracing::debug!(line = %line, "ignoring unknown serial code"),
            }
        }
        commands
    }
}

#[cfg(test)]
mod tests;
