//! Project configuration management for `wikiweave.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [build] and [check]
//! ├── types/         # ConfigError, diagnostics, field paths
//! ├── util.rs        # config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section   | Purpose                                       |
//! |-----------|-----------------------------------------------|
//! | `[build]` | Content/output paths, layout, output options  |
//! | `[check]` | Whether dead links fail `wikiweave check`     |
//!
//! The config file is optional. Without one, defaults apply and the
//! project root is the current directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildConfig, CheckConfig, CheckLevel};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::{Cli, Commands};
use crate::core::ContentLayout;
use crate::debug;
use crate::utils::path::{normalize_path, resolve_path};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing wikiweave.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file, if one was found
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root: the config file's directory, else the cwd
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub check: CheckConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. A missing file is not
    /// an error: defaults are used.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(normalize_path(&path));
                config
            }
            None => {
                debug!("config"; "`{}` not found, using defaults", cli.config.display());
                Self::default()
            }
        };

        let root = config
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or(cwd, Path::to_path_buf);

        config.finalize(&root, cli);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        toml::from_str(&content).map_err(|err| ConfigError::Parse(path.to_path_buf(), err))
    }

    /// Resolve paths against `root` and apply CLI overrides.
    fn finalize(&mut self, root: &Path, cli: &Cli) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = normalize_path(root);
        self.build.content = normalize_path(&resolve_path(&self.build.content, &root));
        self.build.output = normalize_path(&resolve_path(&self.build.output, &root));
        self.set_root(&root);

        self.apply_command_options(&cli.command);
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, command: &Commands) {
        match command {
            Commands::Build { clean, graph } => {
                self.build.clean = *clean;
                self.build.graph |= *graph;
            }
            Commands::Check { warn_only } => {
                if *warn_only {
                    self.check.level = CheckLevel::Warn;
                }
            }
            Commands::Resolve { .. } | Commands::Registry { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate every section, reporting all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    pub fn get_root(&self) -> &Path {
        &self.root
    }

    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Content layout rules (root index and sections).
    pub fn layout(&self) -> ContentLayout {
        self.build.layout()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("wikiweave").chain(args.iter().copied()))
    }

    #[test]
    fn test_from_str_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.build.root_index, "index.md");
        assert_eq!(config.check.level, CheckLevel::Error);
    }

    #[test]
    fn test_from_str_sections() {
        let config = SiteConfig::from_str(
            "[build]\nsections = [\"Notes\"]\ngraph = true\n[check]\nlevel = \"warn\"",
        )
        .unwrap();
        assert_eq!(config.build.sections, ["Notes"]);
        assert!(config.build.graph);
        assert_eq!(config.check.level, CheckLevel::Warn);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(SiteConfig::from_str("[unknown]\nfield = 1").is_err());
        assert!(SiteConfig::from_str("[build]\nminify = true").is_err());
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[build\ncontent = \"x\"").is_err());
    }

    #[test]
    fn test_load_resolves_paths_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("wikiweave.toml");
        fs::write(&config_path, "[build]\ncontent = \"notes\"\noutput = \"site\"").unwrap();

        let config = SiteConfig::load(&cli(&["-C", config_path.to_str().unwrap(), "check"])).unwrap();
        let root = normalize_path(temp.path());
        assert_eq!(config.get_root(), root);
        assert_eq!(config.build.content, root.join("notes"));
        assert_eq!(config.build.output, root.join("site"));
        assert!(config.config_path.is_some());
    }

    #[test]
    fn test_load_applies_command_options() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("wikiweave.toml");
        fs::write(&config_path, "").unwrap();
        let config_arg = config_path.to_str().unwrap();

        let config = SiteConfig::load(&cli(&["-C", config_arg, "check", "--warn-only"])).unwrap();
        assert_eq!(config.check.level, CheckLevel::Warn);

        let config = SiteConfig::load(&cli(&["-C", config_arg, "build", "--clean", "--graph"])).unwrap();
        assert!(config.build.clean);
        assert!(config.build.graph);
    }

    #[test]
    fn test_load_cli_path_overrides() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("wikiweave.toml");
        fs::write(&config_path, "").unwrap();

        let config = SiteConfig::load(&cli(&[
            "-C",
            config_path.to_str().unwrap(),
            "-c",
            "docs",
            "-o",
            "dist",
            "registry",
        ]))
        .unwrap();
        let root = normalize_path(temp.path());
        assert_eq!(config.build.content, root.join("docs"));
        assert_eq!(config.build.output, root.join("dist"));
    }

    #[test]
    fn test_load_invalid_config_reports_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("wikiweave.toml");
        fs::write(&config_path, "[build]\nbogus = 1").unwrap();

        let err = SiteConfig::load(&cli(&["-C", config_path.to_str().unwrap(), "check"]))
            .unwrap_err();
        assert!(err.to_string().contains("wikiweave.toml"));
    }

    #[test]
    fn test_load_validation_failure() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("wikiweave.toml");
        fs::write(&config_path, "[build]\ncontent = \"same\"\noutput = \"same\"").unwrap();

        let err = SiteConfig::load(&cli(&["-C", config_path.to_str().unwrap(), "check"]))
            .unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_load_rejects_output_containing_content() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("wikiweave.toml");
        fs::write(&config_path, "").unwrap();
        fs::create_dir_all(temp.path().join("content")).unwrap();

        let err = SiteConfig::load(&cli(&[
            "-C",
            config_path.to_str().unwrap(),
            "-o",
            ".",
            "build",
            "--clean",
        ]))
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Diagnostics(_))
        ));
        assert!(temp.path().join("content").is_dir());
    }
}
