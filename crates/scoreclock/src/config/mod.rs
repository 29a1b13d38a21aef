//! Configuration loading and merging.
//!
//! Config is loaded from two sources with the local file taking precedence:
//! 1. User-level: `$XDG_CONFIG_HOME/scoreclock/config.toml`
//!    (falls back to `~/.config/scoreclock/config.toml`)
//! 2. Local: `<cwd>/.scoreclock/config.toml`
//!
//! Every field is optional; anything missing falls back to the built-in
//! defaults, which reproduce the stock one-minute board on a 9600 baud
//! button box. Unreadable or malformed files are ignored.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_LIMIT_MS: u64 = 60_000;
const DEFAULT_TICK_MS: u64 = 10;
const DEFAULT_POLL_MS: u64 = 50;
const DEFAULT_BAUD_RATE: u32 = 9600;
#[cfg(windows)]
const DEFAULT_SERIAL_PORT: &str = "COM3";
#[cfg(not(windows))]
const DEFAULT_SERIAL_PORT: &str = "/dev/ttyUSB0";
const DEFAULT_TITLE: &str = "SCORE";
const DEFAULT_HELP: &str = "Space: start/pause   |   Backspace: reset";
const DEFAULT_BACKGROUND: (u8, u8, u8) = (0x00, 0x00, 0x00);
const DEFAULT_FOREGROUND: (u8, u8, u8) = (0xff, 0xff, 0xff);
const DEFAULT_PAUSED: (u8, u8, u8) = (0xff, 0x00, 0x00);
const DEFAULT_INCREMENT: &str = "a";
const DEFAULT_DECREMENT: &str = "z";
const DEFAULT_TOGGLE_TIMER: &str = "space";
const DEFAULT_RESET_TIMER: &str = "backspace";
const DEFAULT_QUIT: &str = "esc";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub timer: TimerConfig,
    pub serial: SerialConfig,
    pub scoring: ScoringConfig,
    pub display: DisplayConfig,
    pub keymap: KeymapConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone)]
pub struct TimerConfig {
    /// `None` when the clock has no limit (configured as 0).
    pub limit_ms: Option<u64>,
    pub tick_ms: u64,
}

#[derive(Debug, Clone)]
pub struct SerialConfig {
    pub enabled: bool,
    pub port: String,
    pub baud_rate: u32,
    pub poll_ms: u64,
}

#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub require_running_clock: bool,
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub title: String,
    pub help: String,
    pub background: (u8, u8, u8),
    pub foreground: (u8, u8, u8),
    pub paused: (u8, u8, u8),
}

#[derive(Debug, Clone)]
pub struct KeymapConfig {
    pub increment: String,
    pub decrement: String,
    pub toggle_timer: String,
    pub reset_timer: String,
    pub quit: String,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        merge_config(None, None)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    timer: Option<RawTimer>,
    serial: Option<RawSerial>,
    scoring: Option<RawScoring>,
    display: Option<RawDisplay>,
    keymap: Option<RawKeymap>,
    log: Option<RawLog>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTimer {
    #[serde(alias = "limitMs")]
    limit_ms: Option<u64>,
    #[serde(alias = "tickMs")]
    tick_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSerial {
    enabled: Option<bool>,
    port: Option<String>,
    #[serde(alias = "baudRate")]
    baud_rate: Option<u32>,
    #[serde(alias = "pollMs")]
    poll_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawScoring {
    #[serde(alias = "requireRunningClock")]
    require_running_clock: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDisplay {
    title: Option<String>,
    help: Option<String>,
    background: Option<String>,
    foreground: Option<String>,
    paused: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawKeymap {
    increment: Option<String>,
    decrement: Option<String>,
    #[serde(alias = "toggleTimer")]
    toggle_timer: Option<String>,
    #[serde(alias = "resetTimer")]
    reset_timer: Option<String>,
    quit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLog {
    level: Option<String>,
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    match toml::from_str::<RawConfig>(&contents) {
        Ok(raw) => Some(raw),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed config");
            None
        }
    }
}

/// First value present, local file before user file.
fn pick<'a, S, T: Clone + 'a>(
    local: Option<&'a S>,
    user: Option<&'a S>,
    field: impl Fn(&'a S) -> Option<&'a T>,
) -> Option<T> {
    local
        .and_then(&field)
        .or_else(|| user.and_then(&field))
        .cloned()
}

fn merge_config(user: Option<RawConfig>, local: Option<RawConfig>) -> Config {
    let local_timer = local.as_ref().and_then(|c| c.timer.as_ref());
    let user_timer = user.as_ref().and_then(|c| c.timer.as_ref());
    let limit_ms = pick(local_timer, user_timer, |t| t.limit_ms.as_ref())
        .unwrap_or(DEFAULT_LIMIT_MS);
    let tick_ms =
        pick(local_timer, user_timer, |t| t.tick_ms.as_ref()).unwrap_or(DEFAULT_TICK_MS);

    let local_serial = local.as_ref().and_then(|c| c.serial.as_ref());
    let user_serial = user.as_ref().and_then(|c| c.serial.as_ref());
    let serial = SerialConfig {
        enabled: pick(local_serial, user_serial, |s| s.enabled.as_ref()).unwrap_or(true),
        port: pick(local_serial, user_serial, |s| s.port.as_ref())
            .unwrap_or_else(|| DEFAULT_SERIAL_PORT.to_string()),
        baud_rate: pick(local_serial, user_serial, |s| s.baud_rate.as_ref())
            .unwrap_or(DEFAULT_BAUD_RATE),
        poll_ms: pick(local_serial, user_serial, |s| s.poll_ms.as_ref())
            .unwrap_or(DEFAULT_POLL_MS),
    };

    let local_scoring = local.as_ref().and_then(|c| c.scoring.as_ref());
    let user_scoring = user.as_ref().and_then(|c| c.scoring.as_ref());
    let require_running_clock = pick(local_scoring, user_scoring, |s| {
        s.require_running_clock.as_ref()
    })
    .unwrap_or(true);

    let local_display = local.as_ref().and_then(|c| c.display.as_ref());
    let user_display = user.as_ref().and_then(|c| c.display.as_ref());
    let color = |field: fn(&RawDisplay) -> Option<&String>, fallback: (u8, u8, u8)| {
        pick(local_display, user_display, field)
            .and_then(|value| parse_hex_color(&value))
            .unwrap_or(fallback)
    };
    let display = DisplayConfig {
        title: pick(local_display, user_display, |d| d.title.as_ref())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        help: pick(local_display, user_display, |d| d.help.as_ref())
            .unwrap_or_else(|| DEFAULT_HELP.to_string()),
        background: color(|d| d.background.as_ref(), DEFAULT_BACKGROUND),
        foreground: color(|d| d.foreground.as_ref(), DEFAULT_FOREGROUND),
        paused: color(|d| d.paused.as_ref(), DEFAULT_PAUSED),
    };

    let local_keymap = local.as_ref().and_then(|c| c.keymap.as_ref());
    let user_keymap = user.as_ref().and_then(|c| c.keymap.as_ref());
    let key = |field: fn(&RawKeymap) -> Option<&String>, fallback: &str| {
        pick(local_keymap, user_keymap, field).unwrap_or_else(|| fallback.to_string())
    };
    let keymap = KeymapConfig {
        increment: key(|k| k.increment.as_ref(), DEFAULT_INCREMENT),
        decrement: key(|k| k.decrement.as_ref(), DEFAULT_DECREMENT),
        toggle_timer: key(|k| k.toggle_timer.as_ref(), DEFAULT_TOGGLE_TIMER),
        reset_timer: key(|k| k.reset_timer.as_ref(), DEFAULT_RESET_TIMER),
        quit: key(|k| k.quit.as_ref(), DEFAULT_QUIT),
    };

    let local_log = local.as_ref().and_then(|c| c.log.as_ref());
    let user_log = user.as_ref().and_then(|c| c.log.as_ref());
    let level = pick(local_log, user_log, |l| l.level.as_ref())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    Config {
        timer: TimerConfig {
            limit_ms: (limit_ms > 0).then_some(limit_ms),
            tick_ms,
        },
        serial,
        scoring: ScoringConfig {
            require_running_clock,
        },
        display,
        keymap,
        log: LogConfig { level },
    }
}

/// Parse `#rrggbb` (leading `#` optional).
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn local_config_path(root: &Path) -> PathBuf {
    root.join(".scoreclock").join("config.toml")
}

pub fn user_config_path() -> Option<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME").filter(|value| !value.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()?.join(".config"),
    };
    Some(base.join("scoreclock").join("config.toml"))
}

pub fn load_config(root: &Path) -> Config {
    let local_path = local_config_path(root);
    let user_path = user_config_path();

    let local_config = read_toml(&local_path);
    let user_config = user_path.and_then(|path| read_toml(&path));

    merge_config(user_config, local_config)
}
