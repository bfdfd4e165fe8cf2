//! Settings for the wikiml renderer.
//!
//! [`Settings`] is built once per parser and shared read-only by every
//! document that parser renders. It can be assembled in code with the
//! `with_*` helpers or parsed from a `wikiml.toml` file:
//!
//! ```toml
//! category_namespace = "Category"
//! allow_lower_case = false
//!
//! [server]
//! protocol = "http"
//! subdomain = "en"
//! domain = "wikipedia"
//! tld = "org"
//! path = "wiki"
//!
//! [[interwiki]]
//! indicators = ["s", "wikisource"]
//!
//! [interwiki.server]
//! subdomain = "www"
//! domain = "wikisource"
//! tld = "org"
//! ```
//!
//! Inconsistent tables are rejected by [`Settings::validate`], which both
//! loaders run before handing the settings out.

mod interwiki;
mod server;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use interwiki::InterwikiEntry;
pub use server::TargetServer;

/// Conventional settings filename.
pub const CONFIG_FILENAME: &str = "wikiml.toml";

/// Namespace treated as the category namespace unless configured otherwise.
pub const DEFAULT_CATEGORY_NAMESPACE: &str = "Category";

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server plain links resolve against.
    pub server: TargetServer,
    /// Ordered sister-wiki and subdomain table. The first matching entry wins.
    pub interwiki: Vec<InterwikiEntry>,
    /// Namespace label whose links are only rendered when colon-prefixed.
    pub category_namespace: String,
    /// Keep the first letter of internal link targets as written.
    pub allow_lower_case: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: TargetServer::default(),
            interwiki: Vec::new(),
            category_namespace: DEFAULT_CATEGORY_NAMESPACE.to_owned(),
            allow_lower_case: false,
        }
    }
}

/// Settings error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Settings error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a label to be usable as a single `:`-delimited link segment.
fn require_segment(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if value.contains(':') {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain ':' (got {value:?})"
        )));
    }
    Ok(())
}

impl Settings {
    /// Settings for the given server with every other field at its default.
    #[must_use]
    pub fn new(server: TargetServer) -> Self {
        Self {
            server,
            ..Self::default()
        }
    }

    /// Replace the active server.
    #[must_use]
    pub fn with_server(mut self, server: TargetServer) -> Self {
        self.server = server;
        self
    }

    /// Append an entry to the interwiki table.
    #[must_use]
    pub fn with_interwiki(mut self, entry: InterwikiEntry) -> Self {
        self.interwiki.push(entry);
        self
    }

    /// Set the category namespace label.
    #[must_use]
    pub fn with_category_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.category_namespace = namespace.into();
        self
    }

    /// Enable or disable lower-case link targets.
    #[must_use]
    pub fn with_lower_case(mut self, allowed: bool) -> Self {
        self.allow_lower_case = allowed;
        self
    }

    /// Parse and validate settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Validation` for inconsistent settings.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if `path` does not exist, plus the
    /// errors of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check that the settings are internally consistent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.protocol, "server.protocol")?;
        require_non_empty(&self.server.domain, "server.domain")?;
        require_non_empty(&self.server.tld, "server.tld")?;
        require_segment(&self.category_namespace, "category_namespace")?;
        self.validate_interwiki()
    }

    /// Validate the interwiki table.
    fn validate_interwiki(&self) -> Result<(), ConfigError> {
        for (idx, entry) in self.interwiki.iter().enumerate() {
            for indicator in &entry.indicators {
                require_segment(indicator, &format!("interwiki[{idx}].indicators"))?;
            }

            let Some(subdomains) = &entry.subdomains else {
                continue;
            };

            // Subdomain links keep the active domain, so a table elsewhere is unreachable
            if entry.server.domain != self.server.domain {
                return Err(ConfigError::Validation(format!(
                    "interwiki[{idx}].subdomains requires server.domain to be {:?} (got {:?})",
                    self.server.domain, entry.server.domain
                )));
            }
            for subdomain in subdomains {
                require_segment(subdomain, &format!("interwiki[{idx}].subdomains"))?;
            }
        }
        Ok(())
    }

    /// First interwiki entry that names `segment` as a sister-wiki indicator.
    #[must_use]
    pub fn sister_wiki(&self, segment: &str) -> Option<&InterwikiEntry> {
        self.interwiki
            .iter()
            .find(|entry| entry.has_indicator(segment))
    }

    /// Interwiki entry describing the active server's own domain.
    #[must_use]
    pub fn home_wiki(&self) -> Option<&InterwikiEntry> {
        self.interwiki
            .iter()
            .find(|entry| entry.server.domain == self.server.domain)
    }

    /// Whether `segment` is a subdomain of the active domain.
    #[must_use]
    pub fn is_subdomain(&self, segment: &str) -> bool {
        self.home_wiki()
            .is_some_and(|entry| entry.has_subdomain(segment))
    }

    /// Whether `segment` is the category namespace label.
    #[must_use]
    pub fn is_category_namespace(&self, segment: &str) -> bool {
        segment == self.category_namespace
    }
}
