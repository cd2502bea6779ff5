use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::subrip::detector::SsaGuard;

/// Library configuration module
/// This module holds the settings for reading, writing and detecting SubRip
/// text, with per-field defaults so partial JSON files are accepted.
/// Represents the library configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Reader settings
    #[serde(default)]
    pub reader: ReaderConfig,

    /// Writer settings
    #[serde(default)]
    pub writer: WriterConfig,

    /// Format detection settings
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings used while parsing SubRip text
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ReaderConfig {
    // @field: Keep tags other than <i>, <s> and <u> verbatim instead of removing them
    #[serde(default)]
    pub keep_unknown_html_tags: bool,
}

/// Settings used while writing SubRip text
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WriterConfig {
    // @field: Start style runs from the event's named style
    #[serde(default = "default_true")]
    pub apply_styles: bool,

    // @field: Leave override blocks in the output (style runs are not rendered then)
    #[serde(default)]
    pub keep_ssa_tags: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            apply_styles: default_true(),
            keep_ssa_tags: false,
        }
    }
}

/// Settings used by format detection
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct DetectionConfig {
    // @field: Treatment of SubStation Alpha section headers
    #[serde(default)]
    pub ssa_guard: SsaGuard,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
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
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Parse a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_json_str(&json)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Set the global log level from this configuration
    pub fn apply_log_level(&self) {
        log::set_max_level(self.log_level.to_level_filter());
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")
    }
}
