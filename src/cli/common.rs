//! Steps shared by `build` and `check`.

use crate::config::SiteConfig;
use crate::log;
use crate::page::{CompiledPage, PageContext, compile_pages};
use crate::utils::plural_count;
use crate::wikilink::Registry;

use super::report::DeadLinkReport;

/// Result of compiling the whole content tree.
pub struct CompiledSite {
    pub pages: Vec<CompiledPage>,
    pub report: DeadLinkReport,
}

/// Scan, build the registry, and compile every page in parallel.
pub fn compile_site(config: &SiteConfig) -> CompiledSite {
    let layout = config.layout();
    let (registry, documents) = Registry::load(&config.build.content, &layout);

    let ctx = PageContext {
        content_dir: &config.build.content,
        layout: &layout,
        registry: &registry,
        external_links: config.build.external_links,
    };
    let pages = compile_pages(&ctx, &documents);
    log!("build"; "compiled {}", plural_count(pages.len(), "page"));

    let mut report = DeadLinkReport::new();
    for page in &pages {
        report.extend(page.dead_links.iter().cloned());
    }

    CompiledSite { pages, report }
}
