//! URL path type for canonical page URLs.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Browser boundary: encode on output

use std::path::{Path, PathBuf};
use std::sync::Arc;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Serialize, Serializer};

use super::{ContentLayout, DocumentPath};

/// Characters left untouched when encoding a path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Decoded, site-relative URL path.
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Never ends with `/` except for the site root
///
/// Cloning is cheap: many registry variants share one URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Derive the canonical URL of a document.
    ///
    /// - strip `.md`
    /// - drop a trailing `/index`
    /// - lower-case the first segment when it names a section
    ///
    /// Pure function of the path and layout.
    pub fn from_document(path: &DocumentPath, layout: &ContentLayout) -> Self {
        let slug = path.without_ext();
        let slug = slug.strip_suffix("/index").unwrap_or(slug);

        let slug = match slug.split_once('/') {
            Some((first, rest)) if layout.section(first).is_some() => {
                format!("{}/{}", first.to_lowercase(), rest)
            }
            None if layout.section(slug).is_some() => slug.to_lowercase(),
            _ => slug.to_string(),
        };

        Self(Arc::from(format!("/{slug}")))
    }

    /// Create from a decoded path, adding the leading slash if missing.
    pub fn new(path: &str) -> Self {
        let path = path.trim();
        if path.starts_with('/') {
            Self(Arc::from(path))
        } else {
            Self(Arc::from(format!("/{path}")))
        }
    }

    /// URL of a section landing page (`Articles` -> `/articles`).
    pub fn from_section(section: &str) -> Self {
        Self(Arc::from(format!("/{}", section.to_lowercase())))
    }

    /// Site root.
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a `#fragment` to this URL.
    pub fn with_fragment(&self, fragment: &str) -> String {
        format!("{}#{}", self.0, fragment)
    }

    /// Output file for this page under `output_dir`.
    ///
    /// `/` -> `index.html`, `/articles/foo` -> `articles/foo/index.html`
    pub fn output_file(&self, output_dir: &Path) -> PathBuf {
        let mut file = output_dir.to_path_buf();
        for segment in self.0.split('/').filter(|s| !s.is_empty()) {
            file.push(segment);
        }
        file.push("index.html");
        file
    }
}

/// Encode a site-root URL for use in an HTML attribute.
///
/// Each path segment (and the fragment) is percent-encoded; `/` and `#`
/// separators are kept. Valid `%XX` escapes are left alone; any other `%`
/// is encoded as `%25`.
pub fn encode_site_url(url: &str) -> String {
    let (path, fragment) = url.split_once('#').map_or((url, None), |(p, f)| (p, Some(f)));

    let mut encoded = path
        .split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/");

    if let Some(fragment) = fragment {
        encoded.push('#');
        encoded.push_str(&encode_segment(fragment));
    }
    encoded
}

fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut rest = segment;

    while let Some(pos) = rest.find('%') {
        out.extend(utf8_percent_encode(&rest[..pos], SEGMENT));
        let escape = &rest[pos..];
        if is_escape(escape) {
            out.push_str(&escape[..3]);
            rest = &escape[3..];
        } else {
            out.push_str("%25");
            rest = &escape[1..];
        }
    }
    out.extend(utf8_percent_encode(rest, SEGMENT));
    out
}

/// `%` followed by two hex digits.
fn is_escape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 3 && bytes[1].is_ascii_hexdigit() && bytes[2].is_ascii_hexdigit()
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for UrlPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
