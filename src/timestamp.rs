/*!
 * SubRip timestamp encoding and decoding.
 *
 * A timestamp has the form `HH:MM:SS,mmm`. On input the hours field may be
 * wider than two digits and the separator may be a comma or a period. On
 * output the value is clamped into the range SubRip can express.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Largest timestamp allowed in SubRip, ie. 99:59:59,999
pub const MAX_REPRESENTABLE_TIME: i64 = 100 * MS_PER_HOUR - 1;

/// Regex for a single timestamp anywhere in a line
pub static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+):(\d{2}):(\d{2})[,.](\d{3})").expect("Invalid timestamp regex")
});

/// Conversion between milliseconds and SubRip timestamps
pub struct TimestampCodec;

impl TimestampCodec {
    /// Decode a timestamp such as `01:23:45,678` into milliseconds.
    ///
    /// Leading and trailing whitespace is ignored, anything else around the
    /// timestamp makes the input non-matching and yields `None`.
    pub fn decode(text: &str) -> Option<i64> {
        let text = text.trim();
        let caps = TIMESTAMP_REGEX.captures(text)?;
        let whole = caps.get(0)?;
        if whole.start() != 0 || whole.end() != text.len() {
            return None;
        }
        Some(Self::decode_captures(&caps))
    }

    /// Encode milliseconds as `HH:MM:SS,mmm`, clamping out-of-range values
    pub fn encode(ms: i64) -> String {
        let clamped = ms.clamp(0, MAX_REPRESENTABLE_TIME);
        if clamped != ms {
            debug!("Clamped timestamp {}ms to {}ms", ms, clamped);
        }

        let (hours, minutes, seconds, millis) = Self::split(clamped);
        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }

    /// Split milliseconds into (hours, minutes, seconds, milliseconds)
    pub fn split(ms: i64) -> (i64, i64, i64, i64) {
        let hours = ms / MS_PER_HOUR;
        let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
        let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
        let millis = ms % MS_PER_SECOND;
        (hours, minutes, seconds, millis)
    }

    /// Number of timestamps found in a line
    pub fn count_in(line: &str) -> usize {
        TIMESTAMP_REGEX.find_iter(line).count()
    }

    /// Read a timing line, ie. a line holding exactly two timestamps.
    ///
    /// Returns the (start, end) pair, or `None` when the line does not hold
    /// exactly two timestamps. Values too large for an `i64` saturate.
    pub fn timing_range(line: &str) -> Option<(i64, i64)> {
        let stamps: Vec<Captures> = TIMESTAMP_REGEX.captures_iter(line).collect();
        match stamps.as_slice() {
            [start, end] => Some((Self::decode_captures(start), Self::decode_captures(end))),
            _ => None,
        }
    }

    // Saturates at i64::MAX; encode clamps it back into range
    fn decode_captures(caps: &Captures) -> i64 {
        let field = |idx: usize| -> i64 {
            caps.get(idx)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(i64::MAX)
        };

        let minutes = field(2) * MS_PER_MINUTE;
        let seconds = field(3) * MS_PER_SECOND;

        field(1)
            .saturating_mul(MS_PER_HOUR)
            .saturating_add(minutes + seconds + field(4))
    }
}
