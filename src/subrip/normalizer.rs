/*!
 * Clean-up of raw SubRip block text into override-tag markup.
 *
 * Raw lines collected for one event are joined and trimmed, a stray index
 * number of the following block is dropped, and HTML-like tags go through a
 * whitelist: `<i>`, `<s>` and `<u>` (opening and closing) become their
 * override equivalents, anything else is removed. Line breaks end up as the
 * `\N` forced-newline marker.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Regex for an index number that leaked from the next block
static TRAILING_INDEX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n+ *\d+ *$").expect("Invalid trailing index regex")
});

/// Regex for an opening or closing HTML-like tag
static HTML_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<\s*(/?)\s*([a-zA-Z][^>]*)>").expect("Invalid HTML tag regex")
});

/// Forced-newline marker in override markup
pub const FORCED_NEWLINE: &str = r"\N";

/// Decision for one HTML-like tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAction {
    /// Replace the tag with override markup
    Substitute(&'static str),
    /// Drop the tag
    Remove,
}

/// Map an HTML-like tag onto override markup.
///
/// `body` is everything between the angle brackets after the optional slash,
/// so `<I >` arrives as `closing = false, body = "I "`.
pub fn translate_tag(closing: bool, body: &str) -> TagAction {
    let name = body.trim().to_ascii_lowercase();
    match (name.as_str(), closing) {
        ("i", false) => TagAction::Substitute(r"{\i1}"),
        ("i", true) => TagAction::Substitute(r"{\i0}"),
        ("s", false) => TagAction::Substitute(r"{\s1}"),
        ("s", true) => TagAction::Substitute(r"{\s0}"),
        ("u", false) => TagAction::Substitute(r"{\u1}"),
        ("u", true) => TagAction::Substitute(r"{\u0}"),
        _ => TagAction::Remove,
    }
}

/// Turns the raw lines of one block into event text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    keep_unknown_html_tags: bool,
}

impl TextNormalizer {
    pub fn new(keep_unknown_html_tags: bool) -> Self {
        TextNormalizer { keep_unknown_html_tags }
    }

    /// Build the final event text from its raw lines
    pub fn normalize<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let joined = lines
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<_>>()
            .join("\n");

        let text = TRAILING_INDEX_REGEX.replace(joined.trim(), "");
        let text = self.translate_tags(&text);
        text.replace('\n', FORCED_NEWLINE)
    }

    /// Apply `translate_tag` to every HTML-like tag in `text`
    pub fn translate_tags(&self, text: &str) -> String {
        HTML_TAG_REGEX
            .replace_all(text, |caps: &Captures| {
                let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
                let body = caps.get(2).map_or("", |m| m.as_str());

                match translate_tag(closing, body) {
                    TagAction::Substitute(markup) => markup.to_string(),
                    TagAction::Remove if self.keep_unknown_html_tags => caps[0].to_string(),
                    TagAction::Remove => String::new(),
                }
            })
            .into_owned()
    }
}
