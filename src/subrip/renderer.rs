/*!
 * Rendering of override-marked event text as a SubRip block body.
 *
 * Each style run is rendered on its own: markers become plain characters and
 * the fragment is wrapped in `<i>`, then `<u>`, then `<s>` according to the
 * run's effective style. The nesting order is fixed, so a run with all three
 * flags renders as `<s><u><i>text</i></u></s>`.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Style, StyleTable};
use crate::tags::TagParser;

/// Regex for a run of consecutive line breaks
static NEWLINES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n+").expect("Invalid newline regex")
});

/// Renders event text as SubRip markup
pub struct TagRenderer<'a, P: TagParser> {
    parser: &'a P,
    styles: &'a StyleTable,
    keep_ssa_tags: bool,
}

impl<'a, P: TagParser> TagRenderer<'a, P> {
    pub fn new(parser: &'a P, styles: &'a StyleTable) -> Self {
        TagRenderer {
            parser,
            styles,
            keep_ssa_tags: false,
        }
    }

    /// Leave override blocks in place instead of turning them into HTML-like tags
    pub fn keep_ssa_tags(mut self, keep: bool) -> Self {
        self.keep_ssa_tags = keep;
        self
    }

    /// Render `text` starting from `base`
    pub fn render(&self, text: &str, base: &Style) -> String {
        let body = if self.keep_ssa_tags {
            replace_markers(text)
        } else {
            self.parser
                .parse_tags(text, base, self.styles)
                .iter()
                .map(|(fragment, style)| render_fragment(fragment, style))
                .collect::<String>()
        };

        NEWLINES_REGEX.replace_all(&body, "\n").trim().to_string()
    }
}

/// Render one style run
pub fn render_fragment(fragment: &str, style: &Style) -> String {
    let mut fragment = replace_markers(fragment);

    if style.italic {
        fragment = format!("<i>{}</i>", fragment);
    }
    if style.underline {
        fragment = format!("<u>{}</u>", fragment);
    }
    if style.strikeout {
        fragment = format!("<s>{}</s>", fragment);
    }

    fragment
}

/// Turn hard-space and newline markers into plain characters
fn replace_markers(text: &str) -> String {
    text.replace(r"\h", " ")
        .replace(r"\n", "\n")
        .replace(r"\N", "\n")
}
