use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tags::OVERRIDE_BLOCK_REGEX;
use crate::timestamp::TimestampCodec;

// @module: Subtitle events, styles and the collection that owns them

/// Name of the style every event refers to unless told otherwise
pub const DEFAULT_STYLE_NAME: &str = "Default";

// @struct: Single subtitle event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEvent {
    // @field: Start time in ms (unclamped)
    pub start_ms: i64,

    // @field: End time in ms (unclamped)
    pub end_ms: i64,

    // @field: Text in override-tag markup
    pub text: String,

    // @field: Name of the style in the collection's style table
    pub style_name: String,

    // @field: Comment events are never written out
    pub is_comment: bool,
}

impl SubtitleEvent {
    /// Creates a new visible event using the default style
    pub fn new(start_ms: i64, end_ms: i64, text: impl Into<String>) -> Self {
        SubtitleEvent {
            start_ms,
            end_ms,
            text: text.into(),
            style_name: DEFAULT_STYLE_NAME.to_string(),
            is_comment: false,
        }
    }

    /// Creates a comment event
    pub fn comment(start_ms: i64, end_ms: i64, text: impl Into<String>) -> Self {
        SubtitleEvent {
            is_comment: true,
            ..Self::new(start_ms, end_ms, text)
        }
    }

    /// Same event with another style name
    pub fn with_style(mut self, style_name: impl Into<String>) -> Self {
        self.style_name = style_name.into();
        self
    }

    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Text with override blocks removed and markers turned into plain characters
    pub fn plaintext(&self) -> String {
        OVERRIDE_BLOCK_REGEX
            .replace_all(&self.text, "")
            .replace(r"\h", " ")
            .replace(r"\n", "\n")
            .replace(r"\N", "\n")
    }
}

impl fmt::Display for SubtitleEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} --> {} [{}]{} {:?}",
            TimestampCodec::encode(self.start_ms),
            TimestampCodec::encode(self.end_ms),
            self.style_name,
            if self.is_comment { " (comment)" } else { "" },
            self.text
        )
    }
}

/// Style flags that matter for SubRip output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub italic: bool,

    #[serde(default)]
    pub underline: bool,

    #[serde(default)]
    pub strikeout: bool,

    /// Tracked by the tag parser, SubRip output ignores it
    #[serde(default)]
    pub bold: bool,
}

impl Style {
    pub fn italic() -> Self {
        Style { italic: true, ..Style::default() }
    }
}

/// Styles by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleTable {
    styles: HashMap<String, Style>,
}

impl StyleTable {
    /// Creates a table holding only the default style
    pub fn new() -> Self {
        let mut styles = HashMap::new();
        styles.insert(DEFAULT_STYLE_NAME.to_string(), Style::default());
        StyleTable { styles }
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Look up a style, falling back to `Style::default()` when the name is unknown
    pub fn get_or_default(&self, name: &str) -> Style {
        self.styles.get(name).copied().unwrap_or_default()
    }

    pub fn insert(&mut self, name: impl Into<String>, style: Style) -> Option<Style> {
        self.styles.insert(name.into(), style)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered subtitle events together with their style table
#[derive(Debug, Clone, Default)]
pub struct SubtitleCollection {
    /// Events in file order, comments included
    pub events: Vec<SubtitleEvent>,

    /// Styles referenced by the events
    pub styles: StyleTable,
}

impl SubtitleCollection {
    /// Create an empty collection with the default style table
    pub fn new() -> Self {
        SubtitleCollection {
            events: Vec::new(),
            styles: StyleTable::new(),
        }
    }

    /// Create a collection from events, with the default style table
    pub fn from_events(events: Vec<SubtitleEvent>) -> Self {
        SubtitleCollection {
            events,
            styles: StyleTable::new(),
        }
    }

    pub fn push(&mut self, event: SubtitleEvent) {
        self.events.push(event);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubtitleEvent> {
        self.events.iter()
    }

    /// Non-comment events, in their original order
    pub fn visible_events(&self) -> impl Iterator<Item = &SubtitleEvent> {
        self.events.iter().filter(|event| !event.is_comment)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a SubtitleCollection {
    type Item = &'a SubtitleEvent;
    type IntoIter = std::slice::Iter<'a, SubtitleEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        writeln!(f, "Events: {}", self.events.len())?;
        writeln!(f, "Visible: {}", self.visible_events().count())?;
        writeln!(f, "Styles: {}", self.styles.len())?;
        Ok(())
    }
}
