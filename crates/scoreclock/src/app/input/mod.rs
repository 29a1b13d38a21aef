//! Input event handling.
//!
//! Routes key presses through the configured bindings and dispatches
//! scheduler tasks to the clock and the serial poller.

mod event;

pub use event::handle_event;
