//! Interwiki table entries.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::TargetServer;

/// One row of the interwiki table.
///
/// `indicators` select the entry as a sister wiki (a different domain).
/// `subdomains` only make sense on the entry that describes the active
/// server's own domain; they select a sibling subdomain of it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterwikiEntry {
    /// Server the entry describes.
    pub server: TargetServer,
    /// Prefix segments that route a link to this wiki (`s`, `wikisource`).
    #[serde(default)]
    pub indicators: BTreeSet<String>,
    /// Subdomain labels reachable on this wiki's domain (`en`, `fr`).
    #[serde(default)]
    pub subdomains: Option<BTreeSet<String>>,
}

impl InterwikiEntry {
    /// Create an entry with the given indicators and no subdomains.
    pub fn new<I, S>(server: TargetServer, indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            server,
            indicators: indicators.into_iter().map(Into::into).collect(),
            subdomains: None,
        }
    }

    /// Attach a subdomain table to this entry.
    #[must_use]
    pub fn with_subdomains<I, S>(mut self, subdomains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdomains = Some(subdomains.into_iter().map(Into::into).collect());
        self
    }

    /// Whether `segment` names this wiki as a sister wiki.
    #[must_use]
    pub fn has_indicator(&self, segment: &str) -> bool {
        self.indicators.contains(segment)
    }

    /// Whether `segment` is one of this wiki's subdomains.
    #[must_use]
    pub fn has_subdomain(&self, segment: &str) -> bool {
        self.subdomains
            .as_ref()
            .is_some_and(|subdomains| subdomains.contains(segment))
    }
}
