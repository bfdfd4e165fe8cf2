//! Per-render document state.

use std::collections::HashMap;

use crate::RenderResult;

/// Mutable record for a single render.
///
/// Holds the source text, the working HTML buffer and the side tables the
/// pipeline stages append to. A document belongs to exactly one render and
/// is consumed by [`into_result`](Self::into_result).
#[derive(Debug, Default)]
pub struct Document {
    source: String,
    html: String,
    unnamed_external_links: Vec<String>,
    categories: Vec<String>,
    subdomain_links: Vec<String>,
    placeholders: HashMap<String, String>,
}

impl Document {
    /// Create a document whose working buffer starts as the source text.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            html: source.clone(),
            source,
            ..Self::default()
        }
    }

    /// Original markup.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current working buffer.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Replace the working buffer.
    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    /// Record an external link rendered without display text.
    ///
    /// Returns the number the link is displayed with (1-based, in call order).
    pub fn add_unnamed_external_link(&mut self, url: impl Into<String>) -> usize {
        self.unnamed_external_links.push(url.into());
        self.unnamed_external_links.len()
    }

    /// External links numbered so far, in order.
    #[must_use]
    pub fn unnamed_external_links(&self) -> &[String] {
        &self.unnamed_external_links
    }

    /// Record a category link that rendered no output.
    pub(crate) fn add_category(&mut self, name: impl Into<String>) {
        self.categories.push(name.into());
    }

    /// Categories recorded so far, in order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Record a subdomain link that rendered no output.
    pub(crate) fn add_subdomain_link(&mut self, url: impl Into<String>) {
        self.subdomain_links.push(url.into());
    }

    /// Subdomain link targets recorded so far, in order.
    #[must_use]
    pub fn subdomain_links(&self) -> &[String] {
        &self.subdomain_links
    }

    /// Store a literal block and return the key that stands in for it.
    pub fn set_placeholder(&mut self, text: impl Into<String>) -> String {
        let key = format!("<<<PLACEHOLDER_{}>>>", self.placeholders.len());
        self.placeholders.insert(key.clone(), text.into());
        key
    }

    /// Literal blocks awaiting restoration.
    #[must_use]
    pub fn placeholders(&self) -> &HashMap<String, String> {
        &self.placeholders
    }

    /// Every recorded link target, across all side tables.
    pub(crate) fn link_targets_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.unnamed_external_links
            .iter_mut()
            .chain(self.categories.iter_mut())
            .chain(self.subdomain_links.iter_mut())
    }

    /// Take the stored literal blocks, leaving the table empty.
    pub(crate) fn take_placeholders(&mut self) -> HashMap<String, String> {
        std::mem::take(&mut self.placeholders)
    }

    /// Finish the render.
    #[must_use]
    pub fn into_result(self) -> RenderResult {
        RenderResult {
            html: self.html,
            unnamed_external_links: self.unnamed_external_links,
            categories: self.categories,
            subdomain_links: self.subdomain_links,
        }
    }
}
