//! Application runner and event loop.
//!
//! Handles terminal setup/teardown and the main event loop. The loop
//! waits for terminal input no longer than the next scheduler deadline,
//! then dispatches input and every due task before redrawing.

use std::io;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::{load_config, SerialConfig};
use crate::error::AppError;
use crate::events::AppEvent;
use crate::logging::init_file_logger;
use crate::serial::{InputChannel, InputPoller, SerialDevice};

use super::state::{App, DeviceStatus};

/// Longest the loop sleeps when nothing is scheduled.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Entry point: load config, open the device, set up the terminal and run.
pub fn run() -> Result<(), AppError> {
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd);
    if let Some(path) = init_file_logger(&config.log) {
        tracing::info!(log = %path.display(), "scoreclock starting");
    }

    // Warnings must print before the alternate screen hides stderr.
    let (poller, device_status) = open_input(&config.serial);
    let mut app = App::new(&config, poller, device_status, Instant::now());

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    terminal.backend_mut().execute(Show)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        score = app.scoreboard.score.value(),
        elapsed_ms = app.scoreboard.timer.elapsed_ms(),
        "scoreclock exiting"
    );
    result
}

/// Main event loop: process events until quit.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), AppError> {
    terminal.clear()?;
    terminal.draw(|frame| super::render::render(app, frame))?;

    while !app.should_quit {
        let timeout = app
            .scheduler
            .next_deadline()
            .map(|at| at.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_WAIT)
            .min(IDLE_WAIT);

        if event::poll(timeout)? {
            dispatch_terminal_event(app, event::read()?);
            // Drain any pending input before redraw
            while event::poll(Duration::ZERO)? {
                dispatch_terminal_event(app, event::read()?);
            }
        }

        let now = Instant::now();
        for task in app.scheduler.take_due(now) {
            super::input::handle_event(app, AppEvent::Scheduled(task), now);
        }

        terminal.draw(|frame| super::render::render(app, frame))?;
    }
    Ok(())
}

fn dispatch_terminal_event(app: &mut App, event: Event) {
    let app_event = match event {
        Event::Key(key) => AppEvent::Input(key),
        Event::Resize(..) => AppEvent::Resize,
        _ => return,
    };
    super::input::handle_event(app, app_event, Instant::now());
}

/// Open the configured serial device, degrading to keyboard-only input.
fn open_input(config: &SerialConfig) -> (InputPoller, DeviceStatus) {
    let interval = Duration::from_millis(config.poll_ms);
    if !config.enabled {
        tracing::info!("serial input disabled by config");
        return (InputPoller::detached(interval), DeviceStatus::Disabled);
    }

    match SerialDevice::open(&config.port, config.baud_rate) {
        Ok(device) => {
            let channel: Box<dyn InputChannel> = Box::new(device);
            (
                InputPoller::new(Some(channel), interval),
                DeviceStatus::Connected(config.port.clone()),
            )
        }
        Err(err) => {
            eprintln!(
                "warning: could not open serial port {}: {err}; continuing with keyboard only",
                config.port
            );
            tracing::warn!(port = %config.port, error = %err, "serial device unavailable");
            (
                InputPoller::detached(interval),
                DeviceStatus::Unavailable(config.port.clone()),
            )
        }
    }
}
