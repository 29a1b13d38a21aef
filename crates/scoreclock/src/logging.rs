//! File-backed tracing setup.
//!
//! The board owns the terminal, so log output goes to
//! `~/.local/state/scoreclock/scoreclock.log` instead of stdout. If the
//! file cannot be opened the app runs without logging.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;

pub fn init_file_logger(config: &LogConfig) -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter = EnvFilter::try_new(format!("scoreclock={}", config.level))
        .unwrap_or_else(|_| EnvFilter::new("scoreclock=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .ok()?;
    Some(path)
}

fn log_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(
        home.join(".local")
            .join("state")
            .join("scoreclock")
            .join("scoreclock.log"),
    )
}
