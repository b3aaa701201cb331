//! Content tree layout: which document owns the site root, and which
//! top-level directories are site sections.

/// Layout rules shared by URL derivation and registry construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLayout {
    /// Relative path of the root index document (excluded from the registry).
    pub root_index: String,
    /// Top-level directory names whose URL segment is lower-cased.
    pub sections: Vec<String>,
}

impl Default for ContentLayout {
    fn default() -> Self {
        Self {
            root_index: "index.md".to_string(),
            sections: ["Resume", "Articles", "Projects"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ContentLayout {
    /// Return the configured section name matching `segment` (case-insensitive).
    pub fn section(&self, segment: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.eq_ignore_ascii_case(segment))
            .map(String::as_str)
    }

    /// Check whether a document path is the root index document.
    #[inline]
    pub fn is_root_index(&self, path: &str) -> bool {
        path == self.root_index
    }
}
