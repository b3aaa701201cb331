//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Wikilink-aware markdown site builder
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "wikiweave.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the site: rewrite wikilinks and write HTML pages
    #[command(visible_alias = "b")]
    Build {
        /// Clean output directory completely before building
        #[arg(long)]
        clean: bool,

        /// Also write graph.json
        #[arg(short, long)]
        graph: bool,
    },

    /// Report dead wikilinks without writing output
    #[command(visible_alias = "c")]
    Check {
        /// Report dead links as warnings instead of failing
        #[arg(long, short = 'w')]
        warn_only: bool,
    },

    /// Resolve wikilinks against the content tree
    #[command(visible_alias = "r")]
    Resolve {
        /// Page names or full wikilinks (`Page`, `[[Page#Heading|Alias]]`)
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },

    /// Print the name → URL registry as JSON
    Registry {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}
