//! Reusable widget rendering functions.
//!
//! Pure functions that produce ratatui widgets from data.
//! No state mutation happens here.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::bigtext::{big_lines, big_width, GLYPH_HEIGHT};
use super::layout::center_block;

/// Render `text` in the block font, or as plain text when it does not fit.
pub fn render_big_text(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let width = big_width(text);
    let fits = width <= area.width as usize && GLYPH_HEIGHT <= area.height as usize;
    if !fits {
        render_caption(frame, area, text, style);
        return;
    }
    let lines: Vec<Line> = big_lines(text).into_iter().map(Line::raw).collect();
    let rect = center_block(area, width as u16, GLYPH_HEIGHT as u16);
    frame.render_widget(Paragraph::new(lines).style(style), rect);
}

/// Render a single centred line in the vertical middle of `area`.
pub fn render_caption(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let rect = center_block(area, area.width, 1);
    let caption = Paragraph::new(Line::raw(text.to_string()))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(caption, rect);
}
