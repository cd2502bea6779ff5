/*!
 * Heuristic detection of SubRip content.
 */

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::SubtitleError;
use crate::subrip::reader::split_lines;
use crate::timestamp::TimestampCodec;

/// Section headers that only appear in SubStation Alpha scripts
const SSA_SECTION_MARKERS: [&str; 2] = ["[Script Info]", "[V4+ Styles]"];

/// Subtitle format tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    Srt,
}

impl SubtitleFormat {
    // @returns: Short format identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
        }
    }

    // @returns: Usual file extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubtitleFormat {
    type Err = SubtitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "srt" | "subrip" => Ok(Self::Srt),
            _ => Err(SubtitleError::UnknownFormat(s.to_string())),
        }
    }
}

/// How detection treats text carrying SubStation Alpha section headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SsaGuard {
    /// Section headers are not looked at, timing lines alone decide
    #[default]
    Disabled,
    /// Text with a section header is never classified as SubRip
    Strict,
}

/// Classifies arbitrary text as SubRip or not
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatDetector {
    guard: SsaGuard,
}

impl FormatDetector {
    pub fn new(guard: SsaGuard) -> Self {
        FormatDetector { guard }
    }

    pub fn guard(&self) -> SsaGuard {
        self.guard
    }

    /// Returns `Some(SubtitleFormat::Srt)` when a line holds exactly two timestamps
    pub fn guess_format(&self, text: &str) -> Option<SubtitleFormat> {
        if self.guard == SsaGuard::Strict && Self::looks_like_ssa(text) {
            debug!("Text carries SubStation Alpha section headers, not SubRip");
            return None;
        }

        split_lines(text)
            .into_iter()
            .any(|line| TimestampCodec::count_in(line) == 2)
            .then_some(SubtitleFormat::Srt)
    }

    fn looks_like_ssa(text: &str) -> bool {
        SSA_SECTION_MARKERS.iter().any(|marker| text.contains(marker))
    }
}
