//! UI rendering and layout utilities.
//!
//! This module contains pure rendering logic separated from state.
//! All functions here take data and produce ratatui widgets without
//! side effects.
//!
//! Submodules:
//! - bigtext: block-glyph font for the score and the clock
//! - layout: helpers for rect manipulation and centering
//! - widgets: widget builders for big numerals and caption lines

mod bigtext;
mod layout;
mod widgets;

pub use bigtext::GLYPH_HEIGHT;
pub use layout::inset_horizontal;
pub use widgets::{render_big_text, render_caption};
