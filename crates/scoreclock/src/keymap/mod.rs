//! Key chord parsing and matching.
//!
//! Parses key chord strings like "space" or "ctrl+r" from config and
//! matches them against crossterm KeyEvents at runtime.
//!
//! `Bindings` resolves the configured chords for every board action.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::KeymapConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

/// What a key press asks the board to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
    ToggleTimer,
    ResetTimer,
    Quit,
}

pub fn parse_key_chord(input: &str) -> Option<KeyChord> {
    let trimmed = input.trim().to_lowercase();
    if trimmed.is_empty() {
        return None;
    }

    let parts: Vec<&str> = trimmed
        .split('+')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return None;
    }

    let mut chord = KeyChord {
        key: KeyCode::Null,
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    for part in parts {
        match part {
            "ctrl" | "control" => chord.ctrl = true,
            "alt" | "option" => chord.alt = true,
            "shift" => chord.shift = true,
            "meta" | "cmd" | "super" => chord.meta = true,
            key => {
                if chord.key != KeyCode::Null {
                    return None;
                }
                chord.key = parse_key(key)?;
            }
        }
    }

    if chord.key == KeyCode::Null {
        return None;
    }

    Some(chord)
}

fn parse_key(key: &str) -> Option<KeyCode> {
    match key {
        "esc" | "escape" => Some(KeyCode::Esc),
        "enter" | "return" => Some(KeyCode::Enter),
        "tab" => Some(KeyCode::Tab),
        "space" | "spacebar" => Some(KeyCode::Char(' ')),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        _ => {
            let mut chars = key.chars();
            let first = chars.next()?;
            if chars.next().is_none() {
                Some(KeyCode::Char(first))
            } else {
                None
            }
        }
    }
}

pub fn matches_chord(event: KeyEvent, chord: &KeyChord) -> bool {
    if event.code != chord.key {
        return false;
    }

    let modifiers = event.modifiers;
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let meta = modifiers.contains(KeyModifiers::SUPER) || modifiers.contains(KeyModifiers::META);

    ctrl == chord.ctrl && alt == chord.alt && shift == chord.shift && meta == chord.meta
}

#[derive(Debug, Clone)]
pub struct Bindings {
    chords: Vec<(KeyChord, Action)>,
}

impl Bindings {
    /// Chords that fail to parse fall back to the built-in default.
    pub fn from_config(keymap: &KeymapConfig) -> Self {
        let entries = [
            (keymap.increment.as_str(), "a", Action::Increment),
            (keymap.decrement.as_str(), "z", Action::Decrement),
            (keymap.toggle_timer.as_str(), "space", Action::ToggleTimer),
            (keymap.reset_timer.as_str(), "backspace", Action::ResetTimer),
            (keymap.quit.as_str(), "esc", Action::Quit),
        ];
        let mut chords = Vec::with_capacity(entries.len());
        for (configured, fallback, action) in entries {
            let chord = parse_key_chord(configured).or_else(|| {
                tracing::warn!(chord = configured, ?action, "invalid key chord, using default");
                parse_key_chord(fallback)
            });
            if let Some(chord) = chord {
                chords.push((chord, action));
            }
        }
        Self { chords }
    }

    pub fn action_for(&self, event: KeyEvent) -> Option<Action> {
        self.chords
            .iter()
            .find(|(chord, _)| matches_chord(event, chord))
            .map(|(_, action)| *action)
    }
}
