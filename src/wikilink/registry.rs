//! Name → URL registry for wikilink resolution.
//!
//! Built once per build from the full document list, then shared read-only
//! by every document transform.
//!
//! Insertion is first-write-wins: when two documents produce the same
//! normalized variant, the one processed first keeps it. Processing order
//! is the order of the document list (lexicographic by path when it comes
//! from [`scan_documents`]), so collisions resolve the same way on every
//! platform.

use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

use super::normalize::variants;
use super::scan::scan_documents;
use crate::core::{ContentLayout, DocumentPath, UrlPath};
use crate::{debug, log};

/// Mapping from normalized name variant to canonical URL.
///
/// Iteration order is insertion order; the fuzzy resolver depends on it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Registry {
    entries: IndexMap<String, UrlPath>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from documents, processed in the given order.
    ///
    /// For each document except the root index:
    /// - variants of its file stem
    /// - variants of its full path without extension
    /// - variants of its section name, when the first segment is a section
    pub fn build<'a>(
        documents: impl IntoIterator<Item = &'a DocumentPath>,
        layout: &ContentLayout,
    ) -> Self {
        let mut registry = Self::new();

        for doc in documents {
            if layout.is_root_index(doc.as_str()) {
                continue;
            }

            let url = UrlPath::from_document(doc, layout);
            registry.insert_variants(doc.stem(), &url);
            registry.insert_variants(doc.without_ext(), &url);

            if let Some(section) = layout.section(doc.first_segment()) {
                // Specific pages registered earlier keep the section's name
                registry.insert_variants(section, &UrlPath::from_section(section));
            }
        }

        registry
    }

    /// Scan `content_dir` and build from the result.
    ///
    /// Also returns the scanned documents, in registry order. A scan
    /// failure is not fatal: it is logged and yields no documents and an
    /// empty registry.
    pub fn load(content_dir: &Path, layout: &ContentLayout) -> (Self, Vec<DocumentPath>) {
        match scan_documents(content_dir) {
            Ok(documents) => {
                let registry = Self::build(&documents, layout);
                log!("registry"; "built with {} entries", registry.len());
                (registry, documents)
            }
            Err(e) => {
                log!("error"; "failed to build registry: {}", e);
                (Self::new(), Vec::new())
            }
        }
    }

    /// Insert a key unless present. Returns whether the key was inserted.
    pub fn insert(&mut self, variant: impl Into<String>, url: UrlPath) -> bool {
        match self.entries.entry(variant.into()) {
            Entry::Occupied(existing) => {
                debug!("registry"; "`{}` already maps to {}", existing.key(), existing.get());
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(url);
                true
            }
        }
    }

    fn insert_variants(&mut self, name: &str, url: &UrlPath) {
        for variant in variants(name) {
            self.insert(variant, url.clone());
        }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&UrlPath> {
        self.entries.get(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UrlPath)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn docs(paths: &[&str]) -> Vec<DocumentPath> {
        paths.iter().map(|p| DocumentPath::new(p).unwrap()).collect()
    }

    fn build(paths: &[&str]) -> Registry {
        Registry::build(&docs(paths), &ContentLayout::default())
    }

    fn url(registry: &Registry, key: &str) -> Option<String> {
        registry.get(key).map(ToString::to_string)
    }

    #[test]
    fn test_basename_and_full_path_variants() {
        let registry = build(&["Projects/blockchain-explorer.md"]);
        let expected = Some("/projects/blockchain-explorer".to_string());

        assert_eq!(url(&registry, "blockchain-explorer"), expected);
        assert_eq!(url(&registry, "blockchainexplorer"), expected);
        assert_eq!(url(&registry, "blockchain explorer"), expected);
        assert_eq!(url(&registry, "projects/blockchain-explorer"), expected);
        assert_eq!(url(&registry, "projects/blockchain explorer"), expected);
    }

    #[test]
    fn test_root_index_excluded() {
        let registry = build(&["index.md", "about.md"]);
        assert!(registry.get("index").is_none());
        assert_eq!(url(&registry, "about"), Some("/about".into()));
    }

    #[test]
    fn test_nested_index_registers_parent_url() {
        let registry = build(&["Articles/index.md"]);
        assert_eq!(url(&registry, "index"), Some("/articles".into()));
        assert_eq!(url(&registry, "articles/index"), Some("/articles".into()));
    }

    #[test]
    fn test_section_variants() {
        let registry = build(&["Articles/rust.md"]);
        assert_eq!(url(&registry, "articles"), Some("/articles".into()));
    }

    #[test]
    fn test_section_name_does_not_override_earlier_page() {
        // A top-level `Articles.md` processed first keeps the `articles` key
        let registry = build(&["Articles.md", "Articles/rust.md"]);
        assert_eq!(url(&registry, "articles"), Some("/articles".into()));

        let registry = build(&["Articles/rust.md", "Notes/articles.md"]);
        assert_eq!(url(&registry, "articles"), Some("/articles".into()));

        let registry = build(&["Notes/articles.md", "Articles/rust.md"]);
        assert_eq!(url(&registry, "articles"), Some("/Notes/articles".into()));
    }

    #[test]
    fn test_first_write_wins_and_order_matters() {
        let registry = build(&["a/note.md", "b/note.md"]);
        assert_eq!(url(&registry, "note"), Some("/a/note".into()));

        let registry = build(&["b/note.md", "a/note.md"]);
        assert_eq!(url(&registry, "note"), Some("/b/note".into()));
    }

    #[test]
    fn test_collision_on_normalized_variant() {
        // `my-note` and `my_note` share the variant `mynote`
        let registry = build(&["my-note.md", "my_note.md"]);
        assert_eq!(url(&registry, "mynote"), Some("/my-note".into()));
        assert_eq!(url(&registry, "my note"), Some("/my-note".into()));
        assert_eq!(url(&registry, "my_note"), Some("/my_note".into()));
    }

    #[test]
    fn test_insert_first_write_wins() {
        let mut registry = Registry::new();
        assert!(registry.insert("page", UrlPath::from_section("first")));
        assert!(!registry.insert("page", UrlPath::from_section("second")));
        assert_eq!(url(&registry, "page"), Some("/first".into()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iteration_is_insertion_order() {
        let registry = build(&["zeta.md", "alpha.md"]);
        let keys: Vec<_> = registry.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn test_load() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("Projects")).unwrap();
        fs::write(root.join("index.md"), "home").unwrap();
        fs::write(root.join("Projects/app.md"), "app").unwrap();

        let (registry, documents) = Registry::load(root, &ContentLayout::default());
        assert_eq!(documents.len(), 2);
        assert_eq!(url(&registry, "app"), Some("/projects/app".into()));
        assert_eq!(url(&registry, "projects"), Some("/projects".into()));
        assert!(registry.get("index").is_none());
    }

    #[test]
    fn test_load_missing_content_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let (registry, documents) =
            Registry::load(&temp.path().join("missing"), &ContentLayout::default());
        assert!(registry.is_empty());
        assert!(documents.is_empty());
    }

    #[test]
    fn test_serialize_in_insertion_order() {
        let registry = build(&["b.md", "a.md"]);
        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(json, r#"{"b":"/b","a":"/a"}"#);
    }
}
