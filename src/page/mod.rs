//! Page compilation: markdown source → transformed tree → HTML.
//!
//! Pages compile independently against a shared, read-only registry, so
//! [`compile_pages`] runs them in parallel.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::core::{ContentLayout, DocumentPath, UrlPath};
use crate::markdown::{
    Document, MarkdownOptions, assign_heading_ids, extract_frontmatter, from_markdown,
    mark_external_links, render_document, render_page,
};
use crate::wikilink::{DeadLink, Registry, slugify_heading, transform};
use crate::{debug, log};

/// Everything a page compile reads.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub content_dir: &'a Path,
    pub layout: &'a ContentLayout,
    pub registry: &'a Registry,
    /// Add `target`/`rel` to http(s) links
    pub external_links: bool,
}

/// A compiled page, ready to render.
#[derive(Debug, Clone)]
pub struct CompiledPage {
    pub source: DocumentPath,
    pub url: UrlPath,
    pub title: String,
    /// Transformed syntax tree
    pub body: Document,
    /// Unresolved wikilinks, in document order
    pub dead_links: Vec<DeadLink>,
}

impl CompiledPage {
    /// Full HTML page.
    pub fn render(&self) -> String {
        render_page(&self.title, &render_document(&self.body))
    }
}

/// URL of a document, with the root index at `/`.
pub fn page_url(doc: &DocumentPath, layout: &ContentLayout) -> UrlPath {
    if layout.is_root_index(doc.as_str()) {
        UrlPath::root()
    } else {
        UrlPath::from_document(doc, layout)
    }
}

/// Compile one document.
pub fn compile_page(ctx: &PageContext<'_>, doc: &DocumentPath) -> Result<CompiledPage> {
    let path = ctx.content_dir.join(doc.as_str());
    let source =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    let (meta, markdown) =
        extract_frontmatter(&source).with_context(|| format!("invalid front matter in {doc}"))?;

    let mut body = from_markdown(markdown, &MarkdownOptions::all());
    let dead_links = transform(&mut body, ctx.registry, doc.as_str());
    assign_heading_ids(&mut body, slugify_heading);
    if ctx.external_links {
        mark_external_links(&mut body);
    }

    let page = CompiledPage {
        url: page_url(doc, ctx.layout),
        title: meta.title.unwrap_or_else(|| doc.stem().to_string()),
        source: doc.clone(),
        body,
        dead_links,
    };
    debug!("page"; "{} -> {}", page.source, page.url);
    Ok(page)
}

/// Compile every document in parallel, preserving input order.
///
/// A document that fails to compile is logged and skipped.
pub fn compile_pages(ctx: &PageContext<'_>, docs: &[DocumentPath]) -> Vec<CompiledPage> {
    docs.par_iter()
        .filter_map(|doc| match compile_page(ctx, doc) {
            Ok(page) => Some(page),
            Err(e) => {
                log!("error"; "skipping {}: {:#}", doc, e);
                None
            }
        })
        .collect()
}
