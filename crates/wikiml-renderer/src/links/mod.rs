//! Link resolution.
//!
//! Two stages, run in this order:
//!
//! 1. **Internal** ([`LinkResolver`]): `[[Page]]`, `[[Page|text]]`, sister-wiki
//!    links (`[[s:Page]]`), subdomain links (`[[:fr:Page]]`) and category links
//!    (`[[:Category:Name]]`). Subdomain and category links without the leading
//!    colon render nothing and are recorded on the [`Document`](crate::Document).
//! 2. **External** ([`resolve_external_links`]): `[scheme://target text]`.
//!    Links without text are numbered `[1]`, `[2]`, ... per document.
//!
//! Only hrefs are synthesized; no request is ever made to the servers named
//! in the settings.

mod external;
mod internal;

pub use external::{Scheme, resolve_external_link, resolve_external_links};
pub use internal::{InternalLink, LinkResolver};
