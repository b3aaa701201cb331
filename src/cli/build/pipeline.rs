//! Build pipeline phases: output setup, page writing, graph.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::graph::{GRAPH_FILE, Graph, GraphBuilder};
use crate::page::CompiledPage;
use crate::{debug, log};

/// Prepare the output directory, removing it first when `clean` is set.
pub(super) fn init_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean {}", output.display()))?;
        debug!("build"; "cleaned {}", output.display());
    }
    fs::create_dir_all(output)
        .with_context(|| format!("failed to create {}", output.display()))
}

/// Warn about pages sharing a URL. The later page wins on disk.
pub(super) fn report_url_conflicts(pages: &[CompiledPage]) -> usize {
    let mut owners: FxHashMap<&str, &str> = FxHashMap::default();
    let mut conflicts = 0;
    for page in pages {
        if let Some(first) = owners.insert(page.url.as_str(), page.source.as_str()) {
            log!("warning"; "{} and {} both map to {}", first, page.source, page.url);
            conflicts += 1;
        }
    }
    conflicts
}

/// Render and write every page (parallel).
pub(super) fn write_pages(pages: &[CompiledPage], output: &Path) -> Result<()> {
    pages.par_iter().try_for_each(|page| {
        let file = page.url.output_file(output);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&file, page.render())
            .with_context(|| format!("failed to write {}", file.display()))?;
        debug!("build"; "{} -> {}", page.source, file.display());
        Ok(())
    })
}

/// Build the link graph of all pages.
pub(super) fn build_graph(pages: &[CompiledPage]) -> Graph {
    let mut builder = GraphBuilder::new();
    for page in pages {
        builder.add_page(page.url.as_str(), &page.title, page.source.as_str(), &page.body);
    }
    builder.finish()
}

/// Write `graph.json` at the output root.
pub(super) fn write_graph(graph: &Graph, output: &Path) -> Result<()> {
    let path = output.join(GRAPH_FILE);
    let json = serde_json::to_string_pretty(graph).context("failed to serialize graph")?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    log!(
        "build";
        "graph: {} nodes, {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );
    Ok(())
}
