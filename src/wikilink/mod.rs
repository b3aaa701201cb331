//! Wikilink registry, parsing, resolution, and tree rewriting.
//!
//! - [`normalize`] - name variants and cleaned keys
//! - [`scan`] - markdown document discovery
//! - [`registry`] - name → URL registry
//! - [`parse`] - `[[...]]` grammar
//! - [`resolve`] - three-tier lookup
//! - [`transform`] - syntax tree rewriting and dead-link diagnostics

mod normalize;
mod parse;
mod registry;
mod resolve;
mod scan;
mod transform;

pub use parse::Wikilink;
pub use registry::Registry;
pub use resolve::{lookup, resolve, slugify_heading};
pub use transform::{DeadLink, LINK_CLASS, transform};
