//! `registry` command: dump the name → URL registry as JSON.

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::wikilink::Registry;

pub fn dump_registry(config: &SiteConfig, pretty: bool) -> Result<()> {
    println!("{}", registry_json(config, pretty)?);
    Ok(())
}

/// The whole stdout payload of `registry`. Log lines go to stderr.
fn registry_json(config: &SiteConfig, pretty: bool) -> Result<String> {
    let (registry, _) = Registry::load(&config.build.content, &config.layout());
    to_json(&registry, pretty)
}

fn to_json(registry: &Registry, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(registry)
    } else {
        serde_json::to_string(registry)
    };
    json.context("failed to serialize registry")
}
