use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};
use log::debug;

use crate::model::{Style, SubtitleCollection};
use crate::subrip::renderer::TagRenderer;
use crate::tags::TagParser;
use crate::timestamp::TimestampCodec;

// @module: Serialization of subtitle events as SubRip blocks

// @struct: One numbered SubRip block, ready for output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubripBlock {
    // @field: 1-based index among visible events
    pub index: usize,

    // @field: Start time in ms, clamped when formatted
    pub start_ms: i64,

    // @field: End time in ms, clamped when formatted
    pub end_ms: i64,

    // @field: Rendered body text
    pub body: String,
}

impl fmt::Display for SubripBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(
            f,
            "{} --> {}",
            TimestampCodec::encode(self.start_ms),
            TimestampCodec::encode(self.end_ms)
        )?;
        writeln!(f, "{}", self.body)?;
        writeln!(f)
    }
}

/// Turns a subtitle collection into SubRip text
pub struct SubripWriter<'a, P: TagParser> {
    parser: &'a P,
    apply_styles: bool,
    keep_ssa_tags: bool,
}

impl<'a, P: TagParser> SubripWriter<'a, P> {
    pub fn new(parser: &'a P) -> Self {
        SubripWriter {
            parser,
            apply_styles: true,
            keep_ssa_tags: false,
        }
    }

    /// Use each event's named style as the base of its style runs
    pub fn apply_styles(mut self, apply: bool) -> Self {
        self.apply_styles = apply;
        self
    }

    /// Write override blocks as-is instead of converting them
    pub fn keep_ssa_tags(mut self, keep: bool) -> Self {
        self.keep_ssa_tags = keep;
        self
    }

    /// Number and render the visible events of `subs`
    pub fn blocks(&self, subs: &SubtitleCollection) -> Vec<SubripBlock> {
        let renderer =
            TagRenderer::new(self.parser, &subs.styles).keep_ssa_tags(self.keep_ssa_tags);

        let blocks: Vec<SubripBlock> = subs
            .visible_events()
            .enumerate()
            .map(|(i, event)| {
                let base = if self.apply_styles {
                    subs.styles.get_or_default(&event.style_name)
                } else {
                    Style::default()
                };

                SubripBlock {
                    index: i + 1,
                    start_ms: event.start_ms,
                    end_ms: event.end_ms,
                    body: renderer.render(&event.text, &base),
                }
            })
            .collect();

        let skipped = subs.len() - blocks.len();
        if skipped > 0 {
            debug!("Skipped {} comment event(s)", skipped);
        }

        blocks
    }

    /// Render `subs` as a SubRip document
    pub fn to_string(&self, subs: &SubtitleCollection) -> String {
        self.blocks(subs)
            .iter()
            .map(|block| block.to_string())
            .collect()
    }

    /// Write `subs` to `out`, returning the number of blocks written
    pub fn write_to<W: Write>(&self, subs: &SubtitleCollection, out: &mut W) -> Result<usize> {
        let blocks = self.blocks(subs);

        for block in &blocks {
            write!(out, "{}", block)
                .with_context(|| format!("Failed to write subtitle block {}", block.index))?;
        }
        out.flush().context("Failed to flush subtitle output")?;

        debug!("Wrote {} subtitle block(s)", blocks.len());
        Ok(blocks.len())
    }
}
