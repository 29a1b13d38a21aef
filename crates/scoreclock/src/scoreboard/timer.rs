//! Game clock state machine.
//!
//! The clock counts up in whole milliseconds from a monotonic reference and
//! stops by itself when it reaches the configured limit. While running it
//! keeps exactly one `Task::TimerTick` queued on the scheduler; pausing or
//! resetting cancels that request.

use std::time::{Duration, Instant};

use crate::scheduler::{ScheduleHandle, Scheduler, Task};

use super::gate::TimekeepingGate;

const MIN_TICK: Duration = Duration::from_millis(1);
const MAX_TICK: Duration = Duration::from_millis(16);

/// Colour hint for the clock digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Active,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Expired,
}

#[derive(Debug)]
pub struct Timer {
    running: bool,
    elapsed_ms: u64,
    limit_ms: Option<u64>,
    /// Instant the current run started and the elapsed time banked before it.
    reference: Option<(Instant, u64)>,
    pending: Option<ScheduleHandle>,
    tick_interval: Duration,
    indicator: Indicator,
}

impl Timer {
    /// A zero limit means the clock never expires.
    pub fn new(limit_ms: Option<u64>, tick_interval: Duration) -> Self {
        Self {
            running: false,
            elapsed_ms: 0,
            limit_ms: limit_ms.filter(|limit| *limit > 0),
            reference: None,
            pending: None,
            tick_interval: tick_interval.clamp(MIN_TICK, MAX_TICK),
            indicator: Indicator::Active,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn remaining_ms(&self) -> Option<u64> {
        self.limit_ms
            .map(|limit| limit.saturating_sub(self.elapsed_ms))
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn is_expired(&self) -> bool {
        !self.running
            && self
                .limit_ms
                .is_some_and(|limit| self.elapsed_ms >= limit)
    }

    pub fn phase(&self) -> Phase {
        if self.is_running() {
            Phase::Running
        } else if self.is_expired() {
            Phase::Expired
        } else if self.indicator == Indicator::Paused {
            Phase::Paused
        } else {
            Phase::Idle
        }
    }

    pub fn display(&self) -> String {
        format_clock(self.elapsed_ms)
    }

    pub fn start(&mut self, now: Instant, scheduler: &mut Scheduler) {
        // An expired clock has no time left to run; only reset revives it.
        if self.running || self.is_expired() {
            return;
        }
        self.reference = Some((now, self.elapsed_ms));
        self.running = true;
        self.indicator = Indicator::Active;
        if self.pending.is_none() {
            self.pending = Some(scheduler.schedule(Task::TimerTick, now));
        }
        tracing::debug!(elapsed_ms = self.elapsed_ms, "clock started");
    }

    pub fn pause(&mut self, now: Instant, scheduler: &mut Scheduler) {
        if !self.running {
            return;
        }
        self.elapsed_ms = self.clamp_to_limit(self.measure(now));
        self.running = false;
        self.reference = None;
        self.cancel_pending(scheduler);
        self.indicator = Indicator::Paused;
        tracing::debug!(elapsed_ms = self.elapsed_ms, "clock paused");
    }

    pub fn toggle(&mut self, now: Instant, scheduler: &mut Scheduler) {
        if self.running {
            self.pause(now, scheduler);
        } else {
            self.start(now, scheduler);
        }
    }

    pub fn reset(&mut self, scheduler: &mut Scheduler) {
        self.running = false;
        self.cancel_pending(scheduler);
        self.elapsed_ms = 0;
        self.reference = None;
        self.indicator = Indicator::Active;
        tracing::debug!("clock reset");
    }

    /// Scheduler callback. Re-arms itself while the clock keeps running.
    pub fn tick(&mut self, now: Instant, scheduler: &mut Scheduler) {
        self.cancel_pending(scheduler);
        if !self.running {
            return;
        }

        let elapsed = self.measure(now);
        if let Some(limit) = self.limit_ms {
            if elapsed >= limit {
                self.elapsed_ms = limit;
                self.running = false;
                self.reference = None;
                tracing::info!(limit_ms = limit, "clock expired");
                return;
            }
        }

        self.elapsed_ms = elapsed;
        self.pending = Some(scheduler.schedule_after(Task::TimerTick, now, self.tick_interval));
    }

    #[cfg(test)]
    pub fn pending_tick(&self) -> Option<ScheduleHandle> {
        self.pending
    }

    fn measure(&self, now: Instant) -> u64 {
        match self.reference {
            Some((started, banked)) => {
                let run = now.saturating_duration_since(started).as_millis();
                banked.saturating_add(u64::try_from(run).unwrap_or(u64::MAX))
            }
            None => self.elapsed_ms,
        }
    }

    fn clamp_to_limit(&self, elapsed: u64) -> u64 {
        match self.limit_ms {
            Some(limit) => elapsed.min(limit),
            None => elapsed,
        }
    }

    fn cancel_pending(&mut self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }
}

impl TimekeepingGate for Timer {
    fn is_active(&self) -> bool {
        self.running
    }
}

/// Render milliseconds as `MM:SS.mmm`. Minutes are not wrapped at 60.
pub fn format_clock(elapsed_ms: u64) -> String {
    let total_seconds = elapsed_ms / 1000;
    let millis = elapsed_ms % 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}.{millis:03}")
}
