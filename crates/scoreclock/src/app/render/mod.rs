//! UI rendering methods.
//!
//! Draws the board on a solid background:
//! - Title caption
//! - Score in the block font
//! - Clock in the block font (paused colour while stopped mid-game)
//! - Help line and status line

mod status;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::scoreboard::Indicator;
use crate::ui::{inset_horizontal, render_big_text, render_caption, GLYPH_HEIGHT};

use super::state::{App, BOTTOM_HORIZONTAL_PADDING};

pub(crate) fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Main render entry point. Called each frame by the event loop.
pub fn render(app: &App, frame: &mut ratatui::Frame) {
    let area = frame.area();
    let background = rgb(app.display.background);
    let foreground = rgb(app.display.foreground);
    let base = Style::default().bg(background).fg(foreground);
    frame.render_widget(Block::default().style(base), area);

    let big_height = GLYPH_HEIGHT as u16;
    // Vertical layout: title | score | clock | help | status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(big_height),
            Constraint::Min(big_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_caption(
        frame,
        chunks[0],
        &app.display.title,
        base.add_modifier(Modifier::BOLD),
    );

    let score = app.scoreboard.score.value().to_string();
    render_big_text(frame, chunks[1], &score, base);

    let clock_color = match app.scoreboard.timer.indicator() {
        Indicator::Active => foreground,
        Indicator::Paused => rgb(app.display.paused),
    };
    render_big_text(
        frame,
        chunks[2],
        &app.scoreboard.timer.display(),
        base.fg(clock_color),
    );

    render_caption(frame, chunks[3], &app.display.help, base);

    let status_area = inset_horizontal(chunks[4], BOTTOM_HORIZONTAL_PADDING);
    status::render_status_line(app, frame, status_area);
}
