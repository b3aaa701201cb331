//! wikiweave - build a markdown site with Obsidian-style wikilinks.

mod cli;
mod config;
mod core;
mod graph;
mod logger;
mod markdown;
mod page;
mod utils;
mod wikilink;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config).map(|_| ()),
        Commands::Check { .. } => cli::check::check_site(&config),
        Commands::Resolve { names } => cli::resolve::resolve_names(&config, names),
        Commands::Registry { pretty } => cli::registry::dump_registry(&config, *pretty),
    }
}
