//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"          # Markdown source tree (relative to project root)
//! output = "public"            # Rendered HTML (relative to project root)
//! root_index = "index.md"      # Site root document, not linkable by name
//! sections = ["Articles", "Projects", "Resume"]
//! graph = false                # Also write graph.json
//! external_links = true        # target/rel on http(s) links
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::ContentLayout;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Content source directory.
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Root index document, relative to `content`.
    pub root_index: String,

    /// Top-level directories treated as site sections.
    pub sections: Vec<String>,

    /// Write `graph.json` next to the pages.
    pub graph: bool,

    /// Mark http(s) links to open in a new tab.
    pub external_links: bool,

    /// Remove the output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        let layout = ContentLayout::default();
        Self {
            content: "content".into(),
            output: "public".into(),
            root_index: layout.root_index,
            sections: vec!["Articles".into(), "Projects".into(), "Resume".into()],
            graph: false,
            external_links: true,
            clean: false,
        }
    }
}

impl BuildConfig {
    pub const FIELD_SECTIONS: FieldPath = FieldPath::new("build.sections");
    pub const FIELD_ROOT_INDEX: FieldPath = FieldPath::new("build.root_index");
    pub const FIELD_OUTPUT: FieldPath = FieldPath::new("build.output");

    /// Layout rules derived from this section.
    pub fn layout(&self) -> ContentLayout {
        ContentLayout {
            root_index: self.root_index.clone(),
            sections: self.sections.clone(),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for section in &self.sections {
            if section.trim().is_empty() {
                diag.error(Self::FIELD_SECTIONS, "section names must not be empty");
            } else if section.contains(['/', '\\']) {
                diag.error_with_hint(
                    Self::FIELD_SECTIONS,
                    format!("`{section}` is not a single path segment"),
                    "sections name top-level directories of the content tree",
                );
            }
        }

        if !self.root_index.ends_with(".md") {
            diag.error(
                Self::FIELD_ROOT_INDEX,
                format!("`{}` must be a markdown file ending in `.md`", self.root_index),
            );
        }

        // Paths are compared component-wise, after root resolution
        if self.content == self.output {
            diag.error_with_hint(
                Self::FIELD_OUTPUT,
                "output directory is the same as the content directory",
                "`--clean` would delete your sources; pick a separate directory",
            );
        } else if self.content.starts_with(&self.output) {
            diag.error_with_hint(
                Self::FIELD_OUTPUT,
                format!(
                    "output directory `{}` contains the content directory",
                    self.output.display()
                ),
                "`--clean` would delete your sources; pick a separate directory",
            );
        } else if self.output.starts_with(&self.content) {
            diag.error_with_hint(
                Self::FIELD_OUTPUT,
                format!(
                    "output directory `{}` is inside the content directory",
                    self.output.display()
                ),
                "rendered pages would be scanned as content; pick a separate directory",
            );
        }
    }
}
