/*!
 * SubRip (.srt) format support.
 *
 * Converts between SubRip text and subtitle events whose text uses override
 * markup. The format is handled in small pieces:
 *
 * - `detector`: classifies arbitrary text as SubRip or not
 * - `reader`: splits input lines into timed events
 * - `normalizer`: turns raw block text into override markup
 * - `renderer`: turns override markup back into SubRip tags
 * - `writer`: numbers visible events and emits the blocks
 *
 * `SubripFormat` ties them together with the settings from `app_config`.
 */

pub mod detector;
pub mod normalizer;
pub mod reader;
pub mod renderer;
pub mod writer;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::app_config::{Config, DetectionConfig, ReaderConfig, WriterConfig};
use crate::model::SubtitleCollection;
use crate::tags::{OverrideTagParser, TagParser};

pub use detector::{FormatDetector, SsaGuard, SubtitleFormat};
pub use normalizer::{TagAction, TextNormalizer, translate_tag};
pub use reader::{BlockReader, split_lines};
pub use renderer::{TagRenderer, render_fragment};
pub use writer::{SubripBlock, SubripWriter};

/// Reads and writes SubRip text
#[derive(Debug, Clone, Default)]
pub struct SubripFormat<P: TagParser = OverrideTagParser> {
    reader: ReaderConfig,
    writer: WriterConfig,
    detection: DetectionConfig,
    parser: P,
}

impl SubripFormat {
    /// Format with default settings and the built-in tag parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Format using the reader, writer and detection settings of `config`
    pub fn with_config(config: &Config) -> Self {
        Self::with_parser(config, OverrideTagParser)
    }
}

impl<P: TagParser> SubripFormat<P> {
    /// Format using `config` and a custom tag parser for writing
    pub fn with_parser(config: &Config, parser: P) -> Self {
        SubripFormat {
            reader: config.reader.clone(),
            writer: config.writer.clone(),
            detection: config.detection.clone(),
            parser,
        }
    }

    /// Classify `text`, see `FormatDetector::guess_format`
    pub fn guess_format(&self, text: &str) -> Option<SubtitleFormat> {
        FormatDetector::new(self.detection.ssa_guard).guess_format(text)
    }

    /// Parse SubRip text into a new collection
    pub fn parse_str(&self, text: &str) -> SubtitleCollection {
        let mut subs = SubtitleCollection::new();
        self.parse_into(text, &mut subs);
        subs
    }

    /// Parse SubRip text, appending the events to `subs`
    pub fn parse_into(&self, text: &str, subs: &mut SubtitleCollection) {
        let events = BlockReader::read_str(self.normalizer(), text);
        subs.events.extend(events);
    }

    /// Parse SubRip text from a stream
    pub fn read_from<R: BufRead>(&self, input: R) -> Result<SubtitleCollection> {
        let mut reader = BlockReader::new(self.normalizer());

        for (number, line) in input.lines().enumerate() {
            let line =
                line.with_context(|| format!("Failed to read subtitle line {}", number + 1))?;
            reader.push_stream_line(&line);
        }

        Ok(SubtitleCollection::from_events(reader.finish()))
    }

    /// Render `subs` as SubRip text
    pub fn to_string(&self, subs: &SubtitleCollection) -> String {
        self.subrip_writer().to_string(subs)
    }

    /// Write `subs` as SubRip text to a stream, returning the number of blocks
    pub fn write_to<W: Write>(&self, subs: &SubtitleCollection, out: &mut W) -> Result<usize> {
        self.subrip_writer().write_to(subs, out)
    }

    fn normalizer(&self) -> TextNormalizer {
        TextNormalizer::new(self.reader.keep_unknown_html_tags)
    }

    fn subrip_writer(&self) -> SubripWriter<'_, P> {
        SubripWriter::new(&self.parser)
            .apply_styles(self.writer.apply_styles)
            .keep_ssa_tags(self.writer.keep_ssa_tags)
    }
}
