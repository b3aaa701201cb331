//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Init** - prepare (and optionally clean) the output directory
//! - **Compile** - scan, build the registry, compile pages in parallel
//! - **Write** - render pages to `<output>/<url>/index.html`
//! - **Graph** - optional `graph.json`
//! - **Report** - dead wikilinks, grouped by file
//!
//! Dead links never fail a build; `check` is the gate.

mod pipeline;

use anyhow::Result;

use super::common::compile_site;
use crate::config::SiteConfig;
use crate::log;
use crate::utils::path::display_relative;
use crate::utils::plural_count;

/// Counts reported at the end of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub dead_links: usize,
}

/// Build the entire site.
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary> {
    let output = &config.build.output;
    pipeline::init_output(output, config.build.clean)?;

    let site = compile_site(config);
    pipeline::report_url_conflicts(&site.pages);
    pipeline::write_pages(&site.pages, output)?;

    if config.build.graph {
        let graph = pipeline::build_graph(&site.pages);
        pipeline::write_graph(&graph, output)?;
    }

    site.report.print();
    log!(
        "build";
        "wrote {} to {}, {}",
        plural_count(site.pages.len(), "page"),
        display_relative(output, config.get_root()),
        site.report
    );

    Ok(BuildSummary {
        pages: site.pages.len(),
        dead_links: site.report.link_count(),
    })
}
