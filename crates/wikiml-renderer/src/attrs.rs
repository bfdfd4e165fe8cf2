//! HTML attribute lists written inline in markup: `class="wide" border=1`.

/// Parse `key="value"` pairs from `s`, keeping their order.
///
/// Values may be double-quoted, single-quoted or bare (up to whitespace).
/// Text that is not a key-value pair is skipped.
///
/// # Example
///
/// ```
/// use wikiml_renderer::parse_attributes;
///
/// let attrs = parse_attributes(r#"class="wide" border=1 style='color: red'"#);
/// assert_eq!(
///     attrs,
///     [
///         ("class".to_owned(), "wide".to_owned()),
///         ("border".to_owned(), "1".to_owned()),
///         ("style".to_owned(), "color: red".to_owned()),
///     ]
/// );
/// ```
#[must_use]
pub fn parse_attributes(s: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let mut remaining = s.trim();

    while !remaining.is_empty() {
        if let Some((key, value, rest)) = parse_key_value(remaining) {
            attrs.push((key.to_owned(), value.to_owned()));
            remaining = rest.trim_start();
        } else {
            // Skip the unrecognized word
            let end = remaining
                .find(char::is_whitespace)
                .unwrap_or(remaining.len());
            remaining = remaining[end..].trim_start();
        }
    }

    attrs
}

/// Render attributes as ` key="value"` pairs, ready to follow a tag name.
#[must_use]
pub fn render_attributes(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!(r#" {key}="{}""#, value.replace('"', "&quot;")))
        .collect()
}

/// Parse one key-value pair at the start of `s`.
///
/// Returns the key, the value and the remaining text.
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let word_end = s.find(char::is_whitespace).unwrap_or(s.len());
    let eq_pos = s[..word_end].find('=')?;
    let key = &s[..eq_pos];
    if key.is_empty() {
        return None;
    }

    let after_eq = &s[eq_pos + 1..];
    for quote in ['"', '\''] {
        if let Some(stripped) = after_eq.strip_prefix(quote) {
            let end_quote = stripped.find(quote)?;
            return Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]));
        }
    }

    let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
    Some((key, &after_eq[..end], &after_eq[end..]))
}
