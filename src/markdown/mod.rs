//! Markdown front end: parsing, front matter, and HTML output.
//!
//! - [`convert`] - Markdown → syntax tree via `pulldown-cmark`
//! - [`meta`] - front matter extraction
//! - [`render`] - syntax tree → HTML
//! - [`external`] - external link attributes
//! - [`anchor`] - heading ids

mod anchor;
mod convert;
mod external;
mod meta;
mod render;
pub mod tree;

pub use anchor::assign_heading_ids;
pub use convert::{MarkdownOptions, from_markdown};
pub use external::mark_external_links;
pub use meta::extract_frontmatter;
pub use render::{render_document, render_page};
pub use tree::{Document, Element, Image, Link, Node};
