//! Apostrophe emphasis: `''italic''`, `'''bold'''`, `'''''both'''''`.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static APOSTROPHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'{2,}").unwrap());

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]*>").unwrap());

/// Span sizes, largest first, with their opening and closing tags.
const SPANS: [(usize, &str, &str); 3] = [
    (5, "<i><b>", "</b></i>"),
    (3, "<b>", "</b>"),
    (2, "<i>", "</i>"),
];

/// Apply the first emphasis span found in `text`.
///
/// The first apostrophe run that has a matching closing run later in the text
/// opens the span. Runs of other lengths use the largest span that fits both
/// ends; leftover apostrophes stay as literal text next to the tags. Runs
/// inside HTML tags, such as an `href` written by link resolution, are
/// ignored.
///
/// # Example
///
/// ```
/// use wikiml_renderer::apply_emphasis;
///
/// assert_eq!(apply_emphasis("''a'' and '''b'''"), "<i>a</i> and '''b'''");
/// assert_eq!(apply_emphasis("''''four''''"), "'<b>four</b>'");
/// ```
#[must_use]
pub fn apply_emphasis(text: &str) -> String {
    let tags: Vec<Range<usize>> = TAG.find_iter(text).map(|m| m.range()).collect();
    let runs: Vec<(usize, usize)> = APOSTROPHES
        .find_iter(text)
        .filter(|m| !tags.iter().any(|tag| tag.contains(&m.start())))
        .map(|m| (m.start(), m.end()))
        .collect();

    for (i, &(open_start, open_end)) in runs.iter().enumerate() {
        let open_len = open_end - open_start;
        for &(size, open_tag, close_tag) in SPANS.iter().filter(|(size, ..)| *size <= open_len) {
            let Some(&(close_start, close_end)) = runs[i + 1..]
                .iter()
                .find(|(start, end)| end - start >= size)
            else {
                continue;
            };

            let close_len = close_end - close_start;
            return format!(
                "{}{}{open_tag}{}{close_tag}{}{}",
                &text[..open_start],
                "'".repeat(open_len - size),
                &text[open_end..close_start],
                "'".repeat(close_len - size),
                &text[close_end..],
            );
        }
    }

    text.to_owned()
}
