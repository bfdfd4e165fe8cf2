//! Heading lines.

use std::sync::LazyLock;

use regex::Regex;

/// One pattern per level, deepest first.
static HEADING_PATTERNS: LazyLock<Vec<(usize, Regex)>> = LazyLock::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let pattern = format!(r"(?mR)^={{{level}}}(.+)={{{level}}}$");
            (level, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Convert `=`-delimited heading lines into `<h1>`..`<h6>`.
///
/// Levels are matched from 6 down to 1 as independent passes over the whole
/// text. The content is greedy, so a line only becomes a shallower heading
/// when no deeper pattern fits:
///
/// ```
/// use wikiml_renderer::transform_headers;
///
/// assert_eq!(transform_headers("==B=="), "<h2>B</h2>");
/// assert_eq!(transform_headers("==a==="), "<h2>a=</h2>");
/// assert_eq!(transform_headers("==B== trailing"), "==B== trailing");
/// ```
#[must_use]
pub fn transform_headers(text: &str) -> String {
    let mut out = text.to_owned();
    for (level, pattern) in &*HEADING_PATTERNS {
        let replacement = format!("<h{level}>${{1}}</h{level}>");
        if pattern.is_match(&out) {
            out = pattern.replace_all(&out, replacement.as_str()).into_owned();
        }
    }
    out
}
