use std::time::Instant;

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::events::AppEvent;
use crate::keymap::Action;
use crate::scheduler::Task;
use crate::scoreboard::ScoreCommand;

use crate::app::state::App;

/// Main event dispatcher.
pub fn handle_event(app: &mut App, event: AppEvent, now: Instant) {
    match event {
        AppEvent::Input(key) => handle_key(app, key, now),
        // The next draw picks up the new size.
        AppEvent::Resize => {}
        AppEvent::Scheduled(Task::TimerTick) => {
            app.scoreboard.timer.tick(now, &mut app.scheduler);
        }
        AppEvent::Scheduled(Task::PollInput) => {
            for command in app.poller.poll(now, &mut app.scheduler) {
                app.scoreboard.apply(command);
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Windows terminals report releases too; act on press and repeat only.
    if key.kind == KeyEventKind::Release {
        return;
    }
    let Some(action) = app.bindings.action_for(key) else {
        return;
    };

    match action {
        Action::Increment => {
            app.scoreboard.apply(ScoreCommand::Increment);
        }
        Action::Decrement => {
            app.scoreboard.apply(ScoreCommand::Decrement);
        }
        Action::ToggleTimer => app.scoreboard.timer.toggle(now, &mut app.scheduler),
        Action::ResetTimer => app.scoreboard.timer.reset(&mut app.scheduler),
        Action::Quit => app.should_quit = true,
    }
}
