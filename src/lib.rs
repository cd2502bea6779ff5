/*!
 * # subrip - SubRip subtitle conversion
 *
 * A Rust library for converting between SubRip (.srt) text and subtitle
 * events whose text uses SubStation-style override markup.
 *
 * ## Features
 *
 * - Heuristic detection of SubRip content
 * - Lenient parsing: stray index numbers, blank lines and bad timing lines
 *   never abort a parse
 * - `<i>`, `<u>` and `<s>` tags translated to and from `{\i1}`-style overrides
 * - Style-aware writing with sequential numbering and clamped timestamps
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timestamp`: `HH:MM:SS,mmm` encoding and decoding
 * - `model`: Events, styles and the collection that owns them
 * - `tags`: Override-tag parsing into style runs
 * - `subrip`: The SubRip format:
 *   - `subrip::detector`: Format detection
 *   - `subrip::reader`: Block reading
 *   - `subrip::normalizer`: Raw text to override markup
 *   - `subrip::renderer`: Override markup to SubRip tags
 *   - `subrip::writer`: Block numbering and output
 * - `app_config`: Configuration management
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod model;
pub mod subrip;
pub mod tags;
pub mod timestamp;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{ConfigError, SubtitleError};
pub use model::{Style, StyleTable, SubtitleCollection, SubtitleEvent};
pub use subrip::{SubripFormat, SubtitleFormat};
pub use tags::{OverrideTagParser, TagParser};
pub use timestamp::{MAX_REPRESENTABLE_TIME, TimestampCodec};
