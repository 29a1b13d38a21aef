//! Five-row block font for digits, `:` and `.`.
//!
//! Glyphs are drawn with `#` for lit cells and translated to full blocks
//! when rendered. Characters without a glyph render as blank digit cells.

pub const GLYPH_HEIGHT: usize = 5;
const GLYPH_GAP: &str = " ";
const BLANK: [&str; GLYPH_HEIGHT] = ["    ", "    ", "    ", "    ", "    "];

fn glyph(ch: char) -> [&'static str; GLYPH_HEIGHT] {
    match ch {
        '0' => ["####", "#  #", "#  #", "#  #", "####"],
        '1' => [" ## ", "  # ", "  # ", "  # ", " ###"],
        '2' => ["####", "   #", "####", "#   ", "####"],
        '3' => ["####", "   #", " ###", "   #", "####"],
        '4' => ["#  #", "#  #", "####", "   #", "   #"],
        '5' => ["####", "#   ", "####", "   #", "####"],
        '6' => ["####", "#   ", "####", "#  #", "####"],
        '7' => ["####", "   #", "   #", "   #", "   #"],
        '8' => ["####", "#  #", "####", "#  #", "####"],
        '9' => ["####", "#  #", "####", "   #", "####"],
        ':' => [" ", "#", " ", "#", " "],
        '.' => [" ", " ", " ", " ", "#"],
        _ => BLANK,
    }
}

/// Rows of `text` in the block font.
pub fn big_lines(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            text.chars()
                .map(|ch| glyph(ch)[row].replace('#', "█"))
                .collect::<Vec<_>>()
                .join(GLYPH_GAP)
        })
        .collect()
}

/// Display width in terminal cells of `text` in the block font.
pub fn big_width(text: &str) -> usize {
    let glyphs: usize = text.chars().map(|ch| glyph(ch)[0].chars().count()).sum();
    let gaps = text.chars().count().saturating_sub(1) * GLYPH_GAP.len();
    glyphs + gaps
}
