//! Configuration management for `dirlist.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── feed       # [feed]
//! │   └── index      # [index]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # TreeConfig (this file)
//! ```
//!
//! The config file is optional. It is looked up in the root directory
//! unless `--config` points elsewhere; CLI flags override file values.

pub mod section;
pub mod types;

pub use section::{FeedFormat, FeedSectionConfig, IndexSectionConfig, TimestampSource};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, FeedArgs, IndexArgs},
    log,
    utils::path::normalize_path,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up in the root directory.
pub const CONFIG_FILENAME: &str = "dirlist.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing dirlist.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Absolute root of the tree being processed (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Traverse and report without writing (internal use only)
    #[serde(skip)]
    pub dry_run: bool,

    /// Listing settings
    #[serde(default)]
    pub index: IndexSectionConfig,

    /// Feed settings
    #[serde(default)]
    pub feed: FeedSectionConfig,
}

impl TreeConfig {
    /// Load configuration for a command.
    ///
    /// `cwd` is the default root when the command names none; it is read
    /// once by the caller so nothing below depends on process state.
    pub fn load(cli: &Cli, command: &Commands, cwd: &Path) -> Result<Self> {
        let root = normalize_path(command.root().map_or(cwd, PathBuf::as_path), cwd);

        let (config_path, explicit) = match &cli.config {
            Some(path) => (normalize_path(path, cwd), true),
            None => (root.join(CONFIG_FILENAME), false),
        };

        let mut config = if config_path.is_file() {
            Self::from_path(&config_path)?
        } else if explicit {
            return Err(ConfigError::Io(
                config_path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            )
            .into());
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.root = root;
        config.apply_command_options(command);
        config.normalize_paths();
        config.validate(command.is_feed())?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Whether `dir` is the configured root (the root exclusion for `..` rows).
    pub fn is_root(&self, dir: &Path) -> bool {
        dir == self.root
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, command: &Commands) {
        crate::logger::set_verbose(command.verbose());
        self.dry_run = command.dry_run();

        match command {
            Commands::Index { args } => self.apply_index_args(args),
            Commands::Feed { args } => self.apply_feed_args(args),
        }
    }

    fn apply_index_args(&mut self, args: &IndexArgs) {
        if args.filter.is_some() {
            self.index.filter.clone_from(&args.filter);
        }
        Self::update_option(&mut self.index.root_parent_link, args.root_parent_link.as_ref());
    }

    fn apply_feed_args(&mut self, args: &FeedArgs) {
        if args.base_url.is_some() {
            self.feed.base_url.clone_from(&args.base_url);
        }
        Self::update_option(&mut self.feed.output, args.output.as_ref());
        Self::update_option(&mut self.feed.format, args.format.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve the feed output path with tilde expansion, relative to root.
    fn normalize_paths(&mut self) {
        let raw = self.feed.output.to_string_lossy().into_owned();
        let expanded = PathBuf::from(shellexpand::tilde(&raw).into_owned());
        self.feed.output = if expanded.is_relative() {
            self.root.join(expanded)
        } else {
            expanded
        };
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration; `feed` enables checks only the feed needs.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self, feed: bool) -> Result<()> {
        if !self.root.is_dir() {
            bail!(ConfigError::Validation(format!(
                "root `{}` is not a directory",
                self.root.display()
            )));
        }

        let mut diag = ConfigDiagnostics::new();
        self.index.validate(&mut diag);
        self.feed.validate(feed, &mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML text.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> TreeConfig {
    let (parsed, ignored) = TreeConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Default config rooted at `root`, as if loaded without a config file.
#[cfg(test)]
pub fn test_config_at(root: &Path) -> TreeConfig {
    TreeConfig {
        root: root.to_path_buf(),
        ..TreeConfig::default()
    }
}

// ============================================================================
// tests
// ============================================================================
