//! Cooperative deadline scheduler driven by the main loop.
//!
//! Work that wants to run again later (the clock tick, the serial poll)
//! registers a deadline here and keeps the returned handle so it can cancel
//! it. The runner sleeps until the earliest deadline and then drains every
//! due task on the loop thread. Nothing here spawns threads.

use std::time::{Duration, Instant};

/// Work items the runner knows how to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    TimerTick,
    PollInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleHandle(u64);

#[derive(Debug)]
struct Entry {
    at: Instant,
    handle: ScheduleHandle,
    task: Task,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request `task` to run once `at` has passed.
    pub fn schedule(&mut self, task: Task, at: Instant) -> ScheduleHandle {
        let handle = ScheduleHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { at, handle, task });
        handle
    }

    pub fn schedule_after(&mut self, task: Task, now: Instant, delay: Duration) -> ScheduleHandle {
        self.schedule(task, now + delay)
    }

    /// Drop a pending request. Unknown or already fired handles are ignored.
    pub fn cancel(&mut self, handle: ScheduleHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        before != self.entries.len()
    }

    #[cfg(test)]
    pub fn is_pending(&self, handle: ScheduleHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.at).min()
    }

    /// Remove and return every task whose deadline is at or before `now`,
    /// earliest first. Equal deadlines keep the order they were scheduled in.
    pub fn take_due(&mut self, now: Instant) -> Vec<Task> {
        let (mut due, pending): (Vec<Entry>, Vec<Entry>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.at <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.at, entry.handle.0));
        due.into_iter().map(|entry| entry.task).collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
