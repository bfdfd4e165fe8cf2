//! Literal block protection.
//!
//! `<nowiki>` and `<pre>` blocks are swapped for opaque keys before any
//! markup stage runs and swapped back after the last one, so their content
//! reaches the output untouched. Space-indented runs are turned into `<pre>`
//! blocks first and get the same protection.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::Document;

static LITERAL_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<nowiki>.*?</nowiki>|<pre>.*?</pre>").unwrap());

static PLACEHOLDER_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<<<PLACEHOLDER_\d+>>>").unwrap());

static INDENTED_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(?: .+\n?)+").unwrap());

/// Convert runs of space-indented lines into `<pre>` blocks.
///
/// Each line is trimmed; blank lines inside the run are dropped.
///
/// ```
/// use wikiml_renderer::preformat;
///
/// assert_eq!(preformat(" a\n  b\nc"), "<pre>\na\nb\n</pre>\nc");
/// ```
#[must_use]
pub fn preformat(text: &str) -> String {
    INDENTED_RUN
        .replace_all(text, |caps: &Captures| {
            let run = &caps[0];
            let body = run
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            format!("<pre>\n{body}\n</pre>\n")
        })
        .into_owned()
}

/// Replace every literal block in `text` with a placeholder key.
///
/// Unterminated blocks are not literal blocks and pass through unchanged.
pub fn protect(text: &str, doc: &mut Document) -> String {
    let protected = LITERAL_BLOCK
        .replace_all(text, |caps: &Captures| doc.set_placeholder(&caps[0]))
        .into_owned();
    tracing::trace!(blocks = doc.placeholders().len(), "Protected literal blocks");
    protected
}

/// Put every stored literal block back into the document.
///
/// Runs a single pass over the buffer and over every recorded link target,
/// then empties the placeholder table. Keys that never reached either (e.g.
/// inside a link body that was dropped) are discarded with the table.
pub fn restore(doc: &mut Document) -> &str {
    let placeholders = doc.take_placeholders();
    if !placeholders.is_empty() {
        let html = substitute(doc.html(), &placeholders);
        doc.set_html(html);
        for target in doc.link_targets_mut() {
            *target = substitute(target, &placeholders);
        }
    }
    doc.html()
}

fn substitute(text: &str, placeholders: &HashMap<String, String>) -> String {
    PLACEHOLDER_KEY
        .replace_all(text, |caps: &Captures| {
            placeholders
                .get(&caps[0])
                .cloned()
                .unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}
