use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// Optional settings for the converter: logging verbosity, the styling and
/// location values written when producing JSON, and JSON output layout.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Styling attributes written into JSON output
    #[serde(default)]
    pub styling: StyleConfig,

    /// Screen-position code assigned to every JSON body entry
    #[serde(default = "default_location")]
    pub location: i64,

    /// Indent JSON output instead of writing it compact
    #[serde(default)]
    pub pretty_json: bool,
}

/// Styling attributes of the JSON subtitle form, passed through uninterpreted
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StyleConfig {
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    // @field: Hex color
    #[serde(default = "default_font_color")]
    pub font_color: String,

    #[serde(default = "default_background_alpha")]
    pub background_alpha: f64,

    // @field: Hex color
    #[serde(default = "default_background_color")]
    pub background_color: String,

    #[serde(default = "default_stroke")]
    pub stroke: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            font_color: default_font_color(),
            background_alpha: default_background_alpha(),
            background_color: default_background_color(),
            stroke: default_stroke(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

// @const: #RRGGBB or #RRGGBBAA
static HEX_COLOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").unwrap()
});

fn default_font_size() -> f64 {
    0.4
}

fn default_font_color() -> String {
    "#FFFFFF".to_string()
}

fn default_background_alpha() -> f64 {
    0.5
}

fn default_background_color() -> String {
    "#9C27B0".to_string()
}

fn default_stroke() -> String {
    "none".to_string()
}

fn default_location() -> i64 {
    2
}

impl Config {
    /// Load configuration from a JSON file; absent fields take their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    // @validates: Styling values are usable in JSON output
    pub fn validate(&self) -> Result<()> {
        let styling = &self.styling;

        if !(styling.font_size > 0.0) {
            return Err(anyhow!("font_size must be positive, got {}", styling.font_size));
        }

        if !(0.0..=1.0).contains(&styling.background_alpha) {
            return Err(anyhow!(
                "background_alpha must be between 0 and 1, got {}",
                styling.background_alpha
            ));
        }

        for (name, color) in [
            ("font_color", &styling.font_color),
            ("background_color", &styling.background_color),
        ] {
            if !HEX_COLOR_REGEX.is_match(color) {
                return Err(anyhow!("{} must be a hex color like #RRGGBB, got '{}'", name, color));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            styling: StyleConfig::default(),
            location: default_location(),
            pretty_json: false,
        }
    }
}
