//! Settings loaded from a TOML file.
//!
//! Every key is optional. A missing default file means all defaults; a
//! path given on the command line must exist and parse.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Config file read when no `--config` is given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "rewind.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Appearance.
    #[serde(default)]
    ui: UiConfig,

    /// Log output.
    #[serde(default)]
    log: LogConfig,
}

/// Appearance settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct UiConfig {
    /// Title shown above the board.
    #[serde(default = "default_title")]
    title: String,

    /// Color of X markers (any ratatui color name or `#rrggbb`).
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color of O markers.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Color used for the winning line and the viewed history entry.
    #[serde(default = "default_highlight_color")]
    highlight_color: String,
}

/// Log settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LogConfig {
    /// File receiving log output.
    #[serde(default = "default_log_file")]
    file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    filter: String,
}

fn default_title() -> String {
    "TIC-TAC-TOE GAME".to_string()
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_highlight_color() -> String {
    "yellow".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_color: default_x_color(),
            o_color: default_o_color(),
            highlight_color: default_highlight_color(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            filter: default_log_filter(),
        }
    }
}

/// Resolved appearance, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Title shown above the board.
    pub title: String,
    /// Color of X markers.
    pub x: Color,
    /// Color of O markers.
    pub o: Color,
    /// Highlight color.
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: default_title(),
            x: Color::Blue,
            o: Color::Red,
            highlight: Color::Yellow,
        }
    }
}

impl UiConfig {
    /// Parses the configured colors into a [`Theme`].
    #[instrument(skip(self))]
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            title: self.title.clone(),
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
            highlight: parse_color("highlight_color", &self.highlight_color)?,
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid color for {}: {:?}", key, value)))
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text and validates it.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.ui.theme()?;
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_or(path, Path::new(DEFAULT_CONFIG_FILE))
    }

    fn load_or(path: Option<&Path>, default_file: &Path) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if default_file.exists() => Self::from_file(default_file),
            None => {
                info!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
