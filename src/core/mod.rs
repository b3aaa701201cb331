//! Core types - pure abstractions shared across the codebase.

mod document;
mod layout;
mod link;
mod url;

pub use document::DocumentPath;
pub use layout::ContentLayout;
pub use link::{is_http, is_site_root};
pub use url::{UrlPath, encode_site_url};
