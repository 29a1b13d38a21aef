//! Application orchestration and main event loop.
//!
//! This module owns the board's lifecycle:
//! - Initialization (config, logging, serial device, terminal setup)
//! - Event loop (key input and scheduler deadlines on one thread)
//! - UI rendering delegation
//!
//! All state lives in a single `App` struct. Events are processed
//! sequentially in the main loop, never concurrently.
//!
//! Submodules:
//! - state: App struct and type definitions
//! - runner: main loop and terminal setup
//! - input: key and scheduler event handling
//! - render: UI rendering methods

mod input;
mod render;
mod runner;
mod state;

pub use runner::run;
