//! Runtime configuration parsed from environment variables.
//!
//! A `.env` file in the working directory, when present, is loaded before
//! reading (see `main`). Numeric values fall back to their defaults when
//! unparseable; booleans must be spelled out and fail loudly otherwise.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CONTROL_ROOM_ID: &str = "control-room";
pub const DEFAULT_LAYOUT_ID: &str = "default";
pub const DEFAULT_AUTOSAVE_MS: u64 = 500;
pub const DEFAULT_CANVAS_SCALE: f64 = 0.5;
pub const DEFAULT_PREVIEW: &str = "Intro Open";
pub const DEFAULT_PROGRAM: &str = "Standby";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected true/false, got '{value}'")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory for the JSON-file store; `None` keeps everything in memory.
    pub store_dir: Option<PathBuf>,
    /// Primary key of the broadcast state record.
    pub control_room_id: String,
    /// Layout document opened at session start.
    pub layout_id: String,
    /// Debounce window for layout autosave.
    pub autosave: Duration,
    pub snap: bool,
    pub canvas_scale: f64,
    pub initial_preview: String,
    pub initial_program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: None,
            control_room_id: DEFAULT_CONTROL_ROOM_ID.into(),
            layout_id: DEFAULT_LAYOUT_ID.into(),
            autosave: Duration::from_millis(DEFAULT_AUTOSAVE_MS),
            snap: true,
            canvas_scale: DEFAULT_CANVAS_SCALE,
            initial_preview: DEFAULT_PREVIEW.into(),
            initial_program: DEFAULT_PROGRAM.into(),
        }
    }
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `ONAIR_STORE_DIR`: JSON-file store directory (in-memory when unset)
    /// - `ONAIR_CONTROL_ROOM_ID`: default `control-room`
    /// - `ONAIR_LAYOUT_ID`: default `default`
    /// - `ONAIR_AUTOSAVE_MS`: default 500
    /// - `ONAIR_SNAP`: `true` (default) or `false`
    /// - `ONAIR_CANVAS_SCALE`: default 0.5
    /// - `ONAIR_PREVIEW`: default `Intro Open`
    /// - `ONAIR_PROGRAM`: default `Standby`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `ONAIR_SNAP` is not a boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a boolean value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let string = |key: &str, default: String| lookup(key).filter(|v| !v.trim().is_empty()).unwrap_or(default);

        let canvas_scale = env_parse(lookup("ONAIR_CANVAS_SCALE"), DEFAULT_CANVAS_SCALE);
        Ok(Self {
            store_dir: lookup("ONAIR_STORE_DIR").filter(|v| !v.trim().is_empty()).map(PathBuf::from),
            control_room_id: string("ONAIR_CONTROL_ROOM_ID", defaults.control_room_id),
            layout_id: string("ONAIR_LAYOUT_ID", defaults.layout_id),
            autosave: Duration::from_millis(env_parse(lookup("ONAIR_AUTOSAVE_MS"), DEFAULT_AUTOSAVE_MS)),
            snap: parse_bool("ONAIR_SNAP", lookup("ONAIR_SNAP"), defaults.snap)?,
            canvas_scale: if canvas_scale > 0.0 && canvas_scale.is_finite() { canvas_scale } else { DEFAULT_CANVAS_SCALE },
            initial_preview: string("ONAIR_PREVIEW", defaults.initial_preview),
            initial_program: string("ONAIR_PROGRAM", defaults.initial_program),
        })
    }
}

fn env_parse<T>(raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

fn parse_bool(var: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
