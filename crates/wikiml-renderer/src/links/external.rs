//! Single-bracket links: `[http://example.com]`, `[mailto:a@b.c Mail me]`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::Document;

/// `[` scheme separator target, optional whitespace and display text, `]`.
///
/// The scheme is checked against [`Scheme`] after matching; anything else is
/// left in place.
static EXTERNAL_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([A-Za-z]+)(:/{0,2})([^\s\[\]]+)(?:[ \t]+([^\[\]\n]*))?\]").unwrap()
});

/// URL schemes recognized in single-bracket links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
    Ftp,
    Ftps,
    Irc,
    Ircs,
    News,
    Gopher,
    Mailto,
}

impl Scheme {
    /// Look up a scheme by its exact (lower-case) name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let scheme = match name {
            "http" => Self::Http,
            "https" => Self::Https,
            "ftp" => Self::Ftp,
            "ftps" => Self::Ftps,
            "irc" => Self::Irc,
            "ircs" => Self::Ircs,
            "news" => Self::News,
            "gopher" => Self::Gopher,
            "mailto" => Self::Mailto,
            _ => return None,
        };
        Some(scheme)
    }

    /// Separator required between the scheme and the target.
    #[must_use]
    pub fn separator(self) -> &'static str {
        match self {
            Self::Mailto => ":",
            _ => "://",
        }
    }
}

/// Resolve a single external link.
///
/// Returns `None` when the scheme is not recognized or is written with the
/// wrong separator. Links without display text are numbered through `doc`.
pub fn resolve_external_link(
    scheme: &str,
    separator: &str,
    target: &str,
    pipe: Option<&str>,
    doc: &mut Document,
) -> Option<String> {
    let known = Scheme::from_name(scheme)?;
    if separator != known.separator() {
        return None;
    }

    let full_url = format!("{scheme}{separator}{target}");
    let display = match pipe.filter(|text| !text.is_empty()) {
        Some(text) => text.to_owned(),
        None => format!("[{}]", doc.add_unnamed_external_link(full_url.as_str())),
    };
    Some(format!("<a href='{full_url}'>{display}</a>"))
}

/// Resolve every single-bracket external link in `text`.
pub fn resolve_external_links(text: &str, doc: &mut Document) -> String {
    EXTERNAL_LINK
        .replace_all(text, |caps: &Captures| {
            let pipe = caps.get(4).map(|m| m.as_str());
            resolve_external_link(&caps[1], &caps[2], &caps[3], pipe, doc).unwrap_or_else(|| {
                tracing::trace!(scheme = &caps[1], "Left unrecognized external link");
                caps[0].to_owned()
            })
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scheme_whitelist() {
        for name in [
            "http", "https", "ftp", "ftps", "irc", "ircs", "news", "gopher", "mailto",
        ] {
            assert!(Scheme::from_name(name).is_some(), "{name}");
        }
        assert_eq!(Scheme::from_name("HTTP"), None);
        assert_eq!(Scheme::from_name("file"), None);
    }

    #[test]
    fn test_unnamed_links_are_numbered() {
        let mut doc = Document::new("");
        let html = resolve_external_links("[http://a.com] [https://b.org/x]", &mut doc);

        assert_eq!(
            html,
            "<a href='http://a.com'>[1]</a> <a href='https://b.org/x'>[2]</a>"
        );
        assert_eq!(doc.unnamed_external_links(), ["http://a.com", "https://b.org/x"]);
    }

    #[test]
    fn test_named_link_does_not_consume_number() {
        let mut doc = Document::new("");
        let html = resolve_external_links(
            "[http://a.com] [http://b.com Bee] [ftp://c.net]",
            &mut doc,
        );

        assert_eq!(
            html,
            "<a href='http://a.com'>[1]</a> <a href='http://b.com'>Bee</a> <a href='ftp://c.net'>[2]</a>"
        );
        assert_eq!(doc.unnamed_external_links().len(), 2);
    }

    #[test]
    fn test_numbering_continues_across_calls() {
        let mut doc = Document::new("");
        resolve_external_links("[http://a.com]", &mut doc);
        let html = resolve_external_links("[irc://chat.net]", &mut doc);
        assert_eq!(html, "<a href='irc://chat.net'>[2]</a>");
    }

    #[test]
    fn test_mailto_requires_bare_colon() {
        let mut doc = Document::new("");
        assert_eq!(
            resolve_external_links("[mailto:me@example.com Mail me]", &mut doc),
            "<a href='mailto:me@example.com'>Mail me</a>"
        );
        assert_eq!(
            resolve_external_links("[mailto://me@example.com]", &mut doc),
            "[mailto://me@example.com]"
        );
    }

    #[test]
    fn test_unknown_scheme_passes_through() {
        let mut doc = Document::new("");
        let text = "[file:///etc/passwd] [javascript:alert(1)]";
        assert_eq!(resolve_external_links(text, &mut doc), text);
        assert!(doc.unnamed_external_links().is_empty());
    }

    #[test]
    fn test_missing_slashes_pass_through() {
        let mut doc = Document::new("");
        assert_eq!(
            resolve_external_links("[http:example.com]", &mut doc),
            "[http:example.com]"
        );
    }

    #[test]
    fn test_empty_display_counts_as_unnamed() {
        let mut doc = Document::new("");
        assert_eq!(
            resolve_external_links("[news://host.net ]", &mut doc),
            "<a href='news://host.net'>[1]</a>"
        );
    }

    #[test]
    fn test_resolve_external_link_direct() {
        let mut doc = Document::new("");
        assert_eq!(
            resolve_external_link("gopher", "://", "hole.org", Some("Hole"), &mut doc),
            Some("<a href='gopher://hole.org'>Hole</a>".to_owned())
        );
        assert_eq!(
            resolve_external_link("gopher", ":", "hole.org", None, &mut doc),
            None
        );
    }
}
