//! The render pipeline.

use wikiml_config::{ConfigError, Settings};

use crate::Document;
use crate::emphasis::apply_emphasis;
use crate::headers::transform_headers;
use crate::links::{LinkResolver, resolve_external_links};
use crate::list::build_lists;
use crate::placeholder::{preformat, protect, restore};
use crate::rule::transform_rules;
use crate::table::build_tables;

/// Result of rendering wiki markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderResult {
    /// Rendered HTML.
    pub html: String,
    /// Targets of external links shown as `[n]`, in numbering order.
    pub unnamed_external_links: Vec<String>,
    /// Category links that rendered nothing, in source order.
    pub categories: Vec<String>,
    /// URLs of subdomain links that rendered nothing, in source order.
    pub subdomain_links: Vec<String>,
}

/// Wiki markup renderer bound to one set of validated settings.
///
/// The parser holds no per-document state; every [`parse`](Self::parse) call
/// works on its own [`Document`], so one parser may be shared across threads.
///
/// # Example
///
/// ```
/// use wikiml_renderer::{Settings, WikiParser};
///
/// let parser = WikiParser::new(Settings::default()).unwrap();
/// let result = parser.parse("==Intro==\nSee [[main page]] or [http://example.com].");
///
/// assert_eq!(
///     result.html,
///     "<h2>Intro</h2>\nSee <a href='http://www.wiki.com/wiki/Main_page'>main page</a> \
///      or <a href='http://example.com'>[1]</a>."
/// );
/// assert_eq!(result.unnamed_external_links, ["http://example.com"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WikiParser {
    settings: Settings,
}

impl WikiParser {
    /// Create a parser after validating `settings`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for inconsistent settings.
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Settings this parser renders with.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Render `source` to HTML.
    ///
    /// Stages run in a fixed order. Literal blocks are set aside first and put
    /// back last, so no stage ever sees their content.
    #[must_use]
    pub fn parse(&self, source: &str) -> RenderResult {
        tracing::debug!(bytes = source.len(), "Rendering document");

        let mut doc = Document::new(source);
        let text = preformat(doc.source());
        let text = protect(&text, &mut doc);
        let text = transform_headers(&text);
        let text = LinkResolver::new(&self.settings).resolve_internal_links(&text, &mut doc);
        let text = resolve_external_links(&text, &mut doc);
        let text = build_lists(&text);
        let text = build_tables(&text);
        let text = apply_emphasis(&text);
        let text = transform_rules(&text);
        doc.set_html(text);
        restore(&mut doc);

        tracing::debug!(
            bytes = doc.html().len(),
            external_links = doc.unnamed_external_links().len(),
            categories = doc.categories().len(),
            "Rendered document"
        );
        doc.into_result()
    }
}

/// Render `source` with `settings`.
///
/// Shorthand for [`WikiParser::new`] followed by [`WikiParser::parse`].
///
/// # Errors
///
/// Returns `ConfigError::Validation` for inconsistent settings.
pub fn parse(source: &str, settings: &Settings) -> Result<RenderResult, ConfigError> {
    let parser = WikiParser::new(settings.clone())?;
    Ok(parser.parse(source))
}
