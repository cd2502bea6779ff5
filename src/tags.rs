/*!
 * Override-tag parsing.
 *
 * Splits override-marked text such as `Hello {\i1}world{\i0}` into style runs:
 * each fragment between two override blocks is paired with the style in effect
 * for it. The effective style starts from the event's base style and applies
 * every override block seen so far, in order.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Style, StyleTable};

/// Regex for a whole `{...}` override block
pub static OVERRIDE_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{[^}]*\}").expect("Invalid override block regex")
});

/// Regex for the individual overrides that change SubRip-relevant flags
static STYLE_OVERRIDE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\([ibus])([01])|\\r([a-zA-Z_0-9 ]*)").expect("Invalid style override regex")
});

/// A fragment of event text together with its effective style
pub type StyleRun = (String, Style);

/// Turns override-marked text into style runs
pub trait TagParser {
    /// Split `text` into runs, starting from `base` and resolving `\rName` in `styles`
    fn parse_tags(&self, text: &str, base: &Style, styles: &StyleTable) -> Vec<StyleRun>;
}

/// Tag parser for the `\i`, `\b`, `\u`, `\s` and `\r` overrides
#[derive(Debug, Clone, Copy, Default)]
pub struct OverrideTagParser;

impl OverrideTagParser {
    pub fn new() -> Self {
        OverrideTagParser
    }

    /// Apply the overrides of one block on top of `current`
    fn apply_block(block: &str, current: Style, base: &Style, styles: &StyleTable) -> Style {
        let mut style = current;

        for caps in STYLE_OVERRIDE_REGEX.captures_iter(block) {
            if let (Some(flag), Some(value)) = (caps.get(1), caps.get(2)) {
                let on = value.as_str() == "1";
                match flag.as_str() {
                    "i" => style.italic = on,
                    "b" => style.bold = on,
                    "u" => style.underline = on,
                    "s" => style.strikeout = on,
                    _ => {}
                }
                continue;
            }

            let name = caps.get(3).map_or("", |m| m.as_str());
            if name.is_empty() {
                style = *base;
            } else if let Some(named) = styles.get(name) {
                style = *named;
            }
        }

        style
    }
}

impl TagParser for OverrideTagParser {
    fn parse_tags(&self, text: &str, base: &Style, styles: &StyleTable) -> Vec<StyleRun> {
        let mut runs = Vec::new();
        let mut style = *base;
        let mut last_end = 0;

        for block in OVERRIDE_BLOCK_REGEX.find_iter(text) {
            runs.push((text[last_end..block.start()].to_string(), style));
            style = Self::apply_block(block.as_str(), style, base, styles);
            last_end = block.end();
        }
        runs.push((text[last_end..].to_string(), style));

        runs
    }
}
