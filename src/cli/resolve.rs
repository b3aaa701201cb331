//! `resolve` command: look up names the way the transformer would.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use crate::config::SiteConfig;
use crate::wikilink::{Registry, Wikilink, lookup, resolve};

/// Resolve each name against the content tree and print the result.
pub fn resolve_names(config: &SiteConfig, names: &[String]) -> Result<()> {
    let (registry, _) = Registry::load(&config.build.content, &config.layout());
    for name in names {
        println!("{}", resolve_line(name, &registry));
    }
    Ok(())
}

/// Wrap bare names in `[[...]]`; full wikilinks pass through.
fn as_wikilink(name: &str) -> String {
    let name = name.trim();
    if name.starts_with("[[") || name.starts_with("![[") {
        name.to_string()
    } else {
        format!("[[{name}]]")
    }
}

fn resolve_line(name: &str, registry: &Registry) -> String {
    let raw = as_wikilink(name);
    let link = Wikilink::parse(&raw);

    match (resolve(&link, registry), lookup(&link.page, registry)) {
        (Some(url), Some((_, tier))) => {
            let tier = format!("({tier})");
            format!(
                "{} → {} {}",
                raw,
                url.if_supports_color(Stream::Stdout, |t| t.green()),
                tier.if_supports_color(Stream::Stdout, |t| t.dimmed())
            )
        }
        _ => format!(
            "{} → {}",
            raw,
            "not found".if_supports_color(Stream::Stdout, |t| t.red())
        ),
    }
}
