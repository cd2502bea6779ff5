/*!
 * Line-oriented reading of SubRip blocks.
 *
 * Any line holding exactly two timestamps opens a new event. Every other line
 * is raw text for the event opened last; lines seen before the first timing
 * line (typically the first index number) are dropped. Block boundaries are
 * not tracked: blank lines and index numbers end up in the raw text and are
 * cleaned away by the normalizer once the whole input has been read.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::SubtitleEvent;
use crate::subrip::normalizer::TextNormalizer;
use crate::timestamp::TimestampCodec;

/// Regex for a line terminator: `\r\n`, `\n` or a lone `\r`
static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|\r|\n").expect("Invalid line break regex")
});

/// Split `text` into lines, accepting Unix, Windows and old Mac line endings.
///
/// A final terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK_REGEX.split(text).collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

// @struct: Event under construction plus the raw lines read for it so far
#[derive(Debug)]
struct PendingEvent {
    start_ms: i64,
    end_ms: i64,
    lines: Vec<String>,
}

impl PendingEvent {
    fn new(start_ms: i64, end_ms: i64) -> Self {
        PendingEvent {
            start_ms,
            end_ms,
            lines: Vec::new(),
        }
    }

    // @consumes: Raw lines, which do not outlive this call
    fn finish(self, normalizer: &TextNormalizer) -> SubtitleEvent {
        SubtitleEvent::new(self.start_ms, self.end_ms, normalizer.normalize(&self.lines))
    }
}

/// Collects SubRip lines into events
#[derive(Debug, Default)]
pub struct BlockReader {
    normalizer: TextNormalizer,
    pending: Vec<PendingEvent>,
    discarded_lines: usize,
    line_count: usize,
}

impl BlockReader {
    pub fn new(normalizer: TextNormalizer) -> Self {
        BlockReader {
            normalizer,
            ..Self::default()
        }
    }

    /// Feed one input line, without its line terminator
    pub fn push_line(&mut self, line: &str) {
        self.line_count += 1;

        if let Some((start_ms, end_ms)) = TimestampCodec::timing_range(line) {
            self.pending.push(PendingEvent::new(start_ms, end_ms));
            return;
        }

        match self.pending.last_mut() {
            Some(current) => current.lines.push(line.to_string()),
            None => self.discarded_lines += 1,
        }
    }

    /// Feed one line as returned by `BufRead::lines`, which only splits on `\n`
    pub fn push_stream_line(&mut self, line: &str) {
        if !line.contains('\r') {
            self.push_line(line);
            return;
        }
        for part in split_lines(line) {
            self.push_line(part);
        }
    }

    /// Normalize the text of every event read so far and hand them out
    pub fn finish(self) -> Vec<SubtitleEvent> {
        if self.discarded_lines > 0 {
            debug!(
                "Ignored {} line(s) before the first timing line",
                self.discarded_lines
            );
        }
        if self.pending.is_empty() && self.line_count > 0 {
            warn!("No timing lines found in {} line(s) of input", self.line_count);
        }

        let normalizer = self.normalizer;
        let events: Vec<SubtitleEvent> = self
            .pending
            .into_iter()
            .map(|pending| pending.finish(&normalizer))
            .collect();

        debug!("Parsed {} subtitle event(s) from {} line(s)", events.len(), self.line_count);
        events
    }

    /// Read every line of `text`
    pub fn read_str(normalizer: TextNormalizer, text: &str) -> Vec<SubtitleEvent> {
        let mut reader = Self::new(normalizer);
        for line in split_lines(text) {
            reader.push_line(line);
        }
        reader.finish()
    }
}
