//! Application event types.
//!
//! Terminal input and scheduler deadlines both become `AppEvent`s so the
//! main loop can dispatch them through a single handler, one at a time.

use crossterm::event::KeyEvent;

use crate::scheduler::Task;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Resize,
    Scheduled(Task),
}
