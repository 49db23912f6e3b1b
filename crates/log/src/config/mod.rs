//! Logger configuration

mod presets;

use serde::{Deserialize, Serialize};

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive, e.g. `info` or `latch_credential=debug,warn`
    pub level: String,

    /// Output format
    pub format: Format,

    /// What each line shows
    pub display: DisplayConfig,

    /// Where lines go
    pub writer: Writer,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            display: DisplayConfig::default(),
            writer: Writer::Stderr,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Single-line human readable
    Compact,
    /// Multi-line human readable
    Pretty,
    /// One JSON object per line
    Json,
}

impl Format {
    /// Parse a format name; unknown names fall back to [`Format::Compact`]
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "pretty" => Self::Pretty,
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

/// Display options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// ANSI colors
    pub colors: bool,
    /// Timestamps
    pub time: bool,
    /// Event target (module path)
    pub target: bool,
    /// Source file and line
    pub source: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors: true,
            time: true,
            target: true,
            source: false,
        }
    }
}

impl DisplayConfig {
    pub(crate) fn parse_lookup<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LATCH_LOG_COLORS") {
            self.colors = parse_bool(&v, self.colors);
        }
        if let Some(v) = lookup("LATCH_LOG_TIME") {
            self.time = parse_bool(&v, self.time);
        }
        if let Some(v) = lookup("LATCH_LOG_SOURCE") {
            self.source = parse_bool(&v, self.source);
        }
    }
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

/// Output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Writer {
    Stderr,
    Stdout,
    /// libtest's captured output
    Test,
}
