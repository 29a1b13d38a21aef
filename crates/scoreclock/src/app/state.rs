//! Application state types and core data structures.

use std::time::{Duration, Instant};

use crate::config::{Config, DisplayConfig};
use crate::keymap::Bindings;
use crate::scheduler::Scheduler;
use crate::scoreboard::{Scoreboard, Timer};
use crate::serial::InputPoller;

/// Outcome of opening the external button device at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceStatus {
    Connected(String),
    Unavailable(String),
    Disabled,
}

/// Main application state container.
///
/// Methods are split across input.rs (event handling) and render.rs
/// (UI drawing).
pub struct App {
    pub scoreboard: Scoreboard,
    pub scheduler: Scheduler,
    pub poller: InputPoller,
    pub bindings: Bindings,
    pub display: DisplayConfig,
    pub device_status: DeviceStatus,
    pub should_quit: bool,
}

pub const BOTTOM_HORIZONTAL_PADDING: u16 = 1;

impl App {
    /// Build the board and queue the first serial poll.
    pub fn new(
        config: &Config,
        poller: InputPoller,
        device_status: DeviceStatus,
        now: Instant,
    ) -> Self {
        let timer = Timer::new(
            config.timer.limit_ms,
            Duration::from_millis(config.timer.tick_ms),
        );
        let mut scheduler = Scheduler::new();
        poller.arm(now, &mut scheduler);

        Self {
            scoreboard: Scoreboard::new(timer, config.scoring.require_running_clock),
            scheduler,
            poller,
            bindings: Bindings::from_config(&config.keymap),
            display: config.display.clone(),
            device_status,
            should_quit: false,
        }
    }
}
