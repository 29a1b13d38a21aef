mod app;
mod config;
mod error;
mod events;
mod keymap;
mod logging;
mod scheduler;
mod scoreboard;
mod serial;
#[cfg(test)]
mod test_utils;
mod ui;

fn main() -> Result<(), error::AppError> {
    app::run()
}
