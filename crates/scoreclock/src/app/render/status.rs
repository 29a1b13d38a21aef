use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::scoreboard::{format_clock, Phase};

use super::super::state::{App, DeviceStatus};
use super::rgb;

/// Clock phase and remaining time on the left, input device on the right.
pub(super) fn render_status_line(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let dim = Style::default()
        .bg(rgb(app.display.background))
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM);

    let device = device_label(&app.device_status);
    let device_len = device.chars().count() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(device_len + 1)])
        .split(area);

    let phase_style = match app.scoreboard.timer.phase() {
        Phase::Running => dim.fg(Color::Green),
        Phase::Paused => dim.fg(Color::Yellow),
        Phase::Expired => dim.fg(Color::Red),
        Phase::Idle => dim,
    };
    let mut spans = vec![Span::styled(phase_label(app.scoreboard.timer.phase()), phase_style)];
    if let Some(remaining) = app.scoreboard.timer.remaining_ms() {
        spans.push(Span::styled(
            format!(" | {} left", format_clock(remaining)),
            dim,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let device_style = match app.device_status {
        DeviceStatus::Unavailable(_) => dim.fg(Color::Yellow),
        _ => dim,
    };
    let label = Paragraph::new(Line::from(Span::styled(device, device_style)))
        .alignment(Alignment::Right);
    frame.render_widget(label, chunks[1]);
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "READY",
        Phase::Running => "RUNNING",
        Phase::Paused => "PAUSED",
        Phase::Expired => "TIME",
    }
}

fn device_label(status: &DeviceStatus) -> String {
    match status {
        DeviceStatus::Connected(port) => format!("buttons: {port}"),
        DeviceStatus::Unavailable(port) => {
            format!("buttons: {port} unavailable (keyboard only)")
        }
        DeviceStatus::Disabled => "buttons: off".to_string(),
    }
}
