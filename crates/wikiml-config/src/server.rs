//! Target server descriptors.

use serde::Deserialize;

/// Server that generated links point at.
///
/// Combined as `protocol://subdomain.domain.tld/path` to form the base URL.
/// Link resolution never mutates a descriptor; it derives a copy through the
/// `with_*` constructors instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TargetServer {
    /// URL scheme, e.g. `http`.
    pub protocol: String,
    /// Subdomain label, e.g. `en`.
    pub subdomain: String,
    /// Second-level domain, e.g. `wikipedia`.
    pub domain: String,
    /// Top-level domain, e.g. `org`.
    pub tld: String,
    /// Path prefix for article URLs, e.g. `wiki`.
    pub path: String,
}

impl Default for TargetServer {
    fn default() -> Self {
        Self::new("http", "www", "wiki", "com", "wiki")
    }
}

impl TargetServer {
    /// Create a descriptor from its five parts.
    pub fn new(
        protocol: impl Into<String>,
        subdomain: impl Into<String>,
        domain: impl Into<String>,
        tld: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            subdomain: subdomain.into(),
            domain: domain.into(),
            tld: tld.into(),
            path: path.into(),
        }
    }

    /// Base URL without a trailing slash.
    ///
    /// ```
    /// use wikiml_config::TargetServer;
    ///
    /// let server = TargetServer::new("http", "en", "wikipedia", "org", "wiki");
    /// assert_eq!(server.base_url(), "http://en.wikipedia.org/wiki");
    /// ```
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}.{}.{}/{}",
            self.protocol, self.subdomain, self.domain, self.tld, self.path
        )
    }

    /// Copy of this server with the subdomain replaced.
    #[must_use]
    pub fn with_subdomain(&self, subdomain: impl Into<String>) -> Self {
        Self {
            subdomain: subdomain.into(),
            ..self.clone()
        }
    }

    /// Copy of this server with the domain replaced.
    #[must_use]
    pub fn with_domain(&self, domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..self.clone()
        }
    }

    /// Copy of this server with the top-level domain replaced.
    #[must_use]
    pub fn with_tld(&self, tld: impl Into<String>) -> Self {
        Self {
            tld: tld.into(),
            ..self.clone()
        }
    }
}
