//! Layout utilities for rect manipulation.
//!
//! Pure functions for computing layout areas. No state mutation.

use ratatui::layout::Rect;

/// Inset a rect horizontally by padding on both sides.
pub fn inset_horizontal(area: Rect, padding: u16) -> Rect {
    if area.width <= padding * 2 {
        return area;
    }
    Rect {
        x: area.x + padding,
        width: area.width - padding * 2,
        ..area
    }
}

/// Centre a `width` x `height` block inside `area`, shrinking it to fit.
pub fn center_block(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
