//! Double-bracket links: `[[Page]]`, `[[s:Page|text]]`, `[[:Category:X]]`.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use wikiml_config::{Settings, TargetServer};

use crate::Document;

/// `[[` optional `:` body optional `|pipe` `]]`.
///
/// The body is one or more `:`-separated segments, none of them empty.
static INTERNAL_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[(:?)((?:[^\[\]|:\n]+:)*[^\[\]|:\n]+)(?:\|([^\[\]\n]*))?\]\]").unwrap()
});

/// Outcome of resolving one double-bracket link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalLink {
    /// A rendered anchor.
    Anchor(String),
    /// A category link written without a leading colon. Holds the link body.
    Category(String),
    /// A subdomain link written without a leading colon. Holds the target URL.
    Subdomain(String),
}

impl InternalLink {
    /// HTML this link renders as. Silent links render nothing.
    #[must_use]
    pub fn html(&self) -> &str {
        match self {
            Self::Anchor(html) => html,
            Self::Category(_) | Self::Subdomain(_) => "",
        }
    }
}

/// Resolves links against a settings table.
#[derive(Debug, Clone, Copy)]
pub struct LinkResolver<'a> {
    settings: &'a Settings,
}

impl<'a> LinkResolver<'a> {
    /// Create a resolver borrowing `settings`.
    #[must_use]
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Resolve a single link.
    ///
    /// `body` is the text between the brackets without the leading colon,
    /// which is reported through `explicit_colon`. `pipe` is `None` without a
    /// `|`, `Some("")` for a trailing empty pipe and `Some(text)` otherwise.
    #[must_use]
    pub fn resolve_internal_link(
        &self,
        body: &str,
        explicit_colon: bool,
        pipe: Option<&str>,
    ) -> InternalLink {
        let settings = self.settings;
        let (first, rest) = body.split_once(':').unwrap_or((body, ""));
        let display = pipe_link(body, pipe);

        if let Some(entry) = settings.sister_wiki(first) {
            let target = settings
                .server
                .with_domain(&entry.server.domain)
                .with_tld(&entry.server.tld);
            return InternalLink::Anchor(anchor(&target, &underscore(rest), display));
        }

        if settings.is_subdomain(first) {
            let target = settings.server.with_subdomain(first);
            let path = underscore(rest);
            if !explicit_colon {
                return InternalLink::Subdomain(format!("{}/{path}", target.base_url()));
            }
            return InternalLink::Anchor(anchor(&target, &path, display));
        }

        if settings.is_category_namespace(first) {
            if !explicit_colon {
                return InternalLink::Category(body.to_owned());
            }
            return InternalLink::Anchor(anchor(&settings.server, &underscore(body), display));
        }

        let path = self.capitalize(&underscore(body));
        InternalLink::Anchor(anchor(&settings.server, &path, display))
    }

    /// Resolve every double-bracket link in `text`.
    ///
    /// Silent links are removed from the text and recorded on `doc`.
    pub fn resolve_internal_links(&self, text: &str, doc: &mut Document) -> String {
        INTERNAL_LINK
            .replace_all(text, |caps: &Captures| {
                let explicit_colon = !caps[1].is_empty();
                let pipe = caps.get(3).map(|m| m.as_str());

                match self.resolve_internal_link(&caps[2], explicit_colon, pipe) {
                    InternalLink::Anchor(html) => html,
                    InternalLink::Category(name) => {
                        tracing::debug!(category = %name, "Recorded category link");
                        doc.add_category(name);
                        String::new()
                    }
                    InternalLink::Subdomain(url) => {
                        tracing::debug!(url = %url, "Recorded subdomain link");
                        doc.add_subdomain_link(url);
                        String::new()
                    }
                }
            })
            .into_owned()
    }

    /// Upper-case the first character unless lower-case targets are allowed.
    fn capitalize(&self, path: &str) -> String {
        if self.settings.allow_lower_case {
            return path.to_owned();
        }
        let mut chars = path.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Display text for a link body and its optional pipe.
///
/// An empty pipe drops the first `:` segment (`Template:Test` shows `Test`).
fn pipe_link<'t>(body: &'t str, pipe: Option<&'t str>) -> &'t str {
    match pipe {
        Some("") => body.split_once(':').map_or(body, |(_, rest)| rest),
        Some(text) => text,
        None => body,
    }
}

fn underscore(path: &str) -> String {
    path.replace(' ', "_")
}

fn anchor(server: &TargetServer, path: &str, display: &str) -> String {
    format!("<a href='{}/{path}'>{display}</a>", server.base_url())
}
