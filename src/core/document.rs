//! Document path type.
//!
//! A `DocumentPath` is the slash-separated path of a markdown document
//! relative to the content root (`Articles/rust-notes.md`). It is the only
//! input to URL derivation.

use std::fmt;
use std::path::{Component, Path};

/// Markdown source extension (with leading dot).
pub const MARKDOWN_EXT: &str = ".md";

/// Relative, slash-separated path to a markdown document.
///
/// Invariants:
/// - Uses `/` as separator on every platform
/// - Never starts with `/`
/// - Always ends with `.md`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentPath(String);

impl DocumentPath {
    /// Create from a slash-separated relative path string.
    ///
    /// Returns `None` for paths that are not markdown documents.
    pub fn new(path: &str) -> Option<Self> {
        let path = path.trim_start_matches("./").trim_start_matches('/');
        if path.len() <= MARKDOWN_EXT.len() || !path.ends_with(MARKDOWN_EXT) {
            return None;
        }
        Some(Self(path.replace('\\', "/")))
    }

    /// Create from a filesystem path relative to the content root.
    pub fn from_relative(path: &Path) -> Option<Self> {
        let mut parts = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_str()?),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Self::new(&parts.join("/"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full path without the `.md` extension (`Articles/rust-notes`).
    #[inline]
    pub fn without_ext(&self) -> &str {
        &self.0[..self.0.len() - MARKDOWN_EXT.len()]
    }

    /// File name without the `.md` extension (`rust-notes`).
    pub fn stem(&self) -> &str {
        let path = self.without_ext();
        path.rsplit_once('/').map_or(path, |(_, name)| name)
    }

    /// First path segment (`Articles`), or the stem for top-level documents.
    pub fn first_segment(&self) -> &str {
        let path = self.without_ext();
        path.split_once('/').map_or(path, |(first, _)| first)
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DocumentPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
