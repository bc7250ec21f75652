use regex::Regex;
use std::sync::OnceLock;

/// A segment of configuration text, split around `{{#...#}}` selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorSegment {
    /// Literal text between selectors, newlines preserved.
    Text(String),
    /// A variable selector, stored with its `{{#` / `#}}` delimiters intact.
    Selector(String),
}

impl SelectorSegment {
    /// For selector segments, the inner `node.field` path without delimiters.
    pub fn selector_path(&self) -> Option<&str> {
        match self {
            SelectorSegment::Selector(raw) => raw
                .strip_prefix("{{#")
                .and_then(|rest| rest.strip_suffix("#}}")),
            SelectorSegment::Text(_) => None,
        }
    }
}

fn selector_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{#([^#]+)#}}").expect("selector pattern is valid"))
}

/// Splits configuration text into literal and selector segments, in order.
///
/// Node parameters may embed references to upstream node outputs using the
/// editor's `{{#nodeId.field#}}` syntax. Splitting happens at compile time so
/// callers can discover which upstream values a node reads; resolving the
/// references is the execution engine's job.
pub fn split_selectors(text: &str) -> Vec<SelectorSegment> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for found in selector_pattern().find_iter(text) {
        if found.start() > last_end {
            segments.push(SelectorSegment::Text(
                text[last_end..found.start()].to_string(),
            ));
        }
        segments.push(SelectorSegment::Selector(found.as_str().to_string()));
        last_end = found.end();
    }

    if last_end < text.len() {
        segments.push(SelectorSegment::Text(text[last_end..].to_string()));
    }

    segments
}

/// Collects only the selector paths referenced in `text`, in order.
pub fn referenced_selectors(text: &str) -> Vec<String> {
    split_selectors(text)
        .iter()
        .filter_map(|segment| segment.selector_path().map(str::to_string))
        .collect()
}
