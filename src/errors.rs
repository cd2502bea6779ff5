/*!
 * Error types for the subrip library.
 *
 * Parsing and writing SubRip text never fails on malformed content: bad
 * timing lines become text, unknown tags are dropped and out-of-range times
 * are clamped. I/O failures on caller streams are reported through anyhow
 * with context. The errors below cover unknown format names and unreadable
 * configuration.
 */

use thiserror::Error;

/// Errors that can occur when naming subtitle formats
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// A format name that is not recognised
    #[error("Unknown subtitle format: {0}")]
    UnknownFormat(String),
}

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration could not be deserialized
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
