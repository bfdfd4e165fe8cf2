//! Wiki markup to HTML renderer.
//!
//! [`WikiParser`] runs a fixed pipeline of text transformations over a
//! per-render [`Document`]:
//!
//! 1. space-indented runs become `<pre>` blocks ([`preformat`])
//! 2. literal blocks are swapped for placeholder keys ([`protect`])
//! 3. `=` headings ([`transform_headers`])
//! 4. `[[internal]]` links ([`LinkResolver`])
//! 5. `[external]` links ([`resolve_external_links`])
//! 6. `#*;:` lists ([`build_lists`])
//! 7. `{| |}` tables ([`build_tables`])
//! 8. `''` emphasis, first span only ([`apply_emphasis`])
//! 9. `----` rules ([`transform_rules`])
//! 10. literal blocks restored ([`restore`])
//!
//! Markup a stage does not recognize is passed through unchanged; rendering
//! never fails. Only settings validation can return an error.
//!
//! # Example
//!
//! ```
//! use wikiml_renderer::{Settings, parse};
//!
//! let result = parse("#one\n##two\n#three", &Settings::default()).unwrap();
//! assert_eq!(
//!     result.html,
//!     "<ol>\n<li>one\n<ol>\n<li>two</li>\n</ol>\n</li>\n<li>three</li>\n</ol>"
//! );
//! ```

mod attrs;
mod document;
mod emphasis;
mod headers;
pub mod links;
pub mod list;
mod parser;
mod placeholder;
mod rule;
mod table;

pub use attrs::{parse_attributes, render_attributes};
pub use document::Document;
pub use emphasis::apply_emphasis;
pub use headers::transform_headers;
pub use links::{InternalLink, LinkResolver, Scheme, resolve_external_link, resolve_external_links};
pub use list::{ListBuilder, Marker, build_list, build_lists};
pub use parser::{RenderResult, WikiParser, parse};
pub use placeholder::{preformat, protect, restore};
pub use rule::transform_rules;
pub use table::{build_table, build_tables};
pub use wikiml_config::{ConfigError, InterwikiEntry, Settings, TargetServer};
