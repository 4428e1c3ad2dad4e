//! Configuration file loading for datafix.
//!
//! Discovers and loads `datafix.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use datafix_core::settings::{LineCountSettings, OrganizeSettings, SwapSettings};
use datafix_types::ErrorPolicy;
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "datafix.toml";

/// Top-level configuration from datafix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatafixConfig {
    pub swap: SwapConfig,
    pub organize: OrganizeConfig,
    pub line_count: LineCountConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SwapConfig {
    /// Glob matched against file names in each session directory.
    pub fixture_pattern: Option<String>,
    pub error_policy: Option<ErrorPolicy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrganizeConfig {
    pub extension: Option<String>,
    pub target_dir: Option<String>,
    pub sentinel: Option<String>,
    pub error_policy: Option<ErrorPolicy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LineCountConfig {
    pub base: Option<Utf8PathBuf>,
    pub dirs: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub exclude_suffixes: Option<Vec<String>>,
    pub exclude_dirs: Option<Vec<String>>,
}

/// Discover the datafix.toml config file in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a datafix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<DatafixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<DatafixConfig> {
    let config: DatafixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load an explicit config path, or discover one in `dir`, or fall back to defaults.
pub fn load_or_default(explicit: Option<&Utf8Path>, dir: &Utf8Path) -> anyhow::Result<DatafixConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(DatafixConfig::default()),
    }
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: DatafixConfig,
}

impl ConfigMerger {
    pub fn new(config: DatafixConfig) -> Self {
        Self { config }
    }

    /// Merge with swap command CLI arguments.
    pub fn merge_swap_args(
        self,
        root: Utf8PathBuf,
        cli_pattern: Option<String>,
        cli_policy: Option<ErrorPolicy>,
        apply: bool,
    ) -> SwapSettings {
        let defaults = SwapSettings::default();
        SwapSettings {
            root,
            fixture_pattern: cli_pattern
                .or(self.config.swap.fixture_pattern)
                .unwrap_or(defaults.fixture_pattern),
            dry_run: !apply,
            policy: cli_policy
                .or(self.config.swap.error_policy)
                .unwrap_or(defaults.policy),
        }
    }

    /// Merge with organize command CLI arguments.
    pub fn merge_organize_args(self, args: OrganizeOverrides) -> OrganizeSettings {
        let defaults = OrganizeSettings::default();
        let cfg = self.config.organize;
        OrganizeSettings {
            root: args.root,
            extension: args
                .extension
                .or(cfg.extension)
                .unwrap_or(defaults.extension),
            target_dir: args
                .target_dir
                .or(cfg.target_dir)
                .unwrap_or(defaults.target_dir),
            sentinel: args.sentinel.or(cfg.sentinel).unwrap_or(defaults.sentinel),
            dry_run: !args.apply,
            policy: args
                .policy
                .or(cfg.error_policy)
                .unwrap_or(defaults.policy),
        }
    }

    /// Merge with line-count command CLI arguments.
    ///
    /// Non-empty CLI lists replace the config file lists.
    pub fn merge_line_count_args(
        self,
        cli_base: Option<Utf8PathBuf>,
        cli_dirs: Vec<String>,
        cli_extensions: Vec<String>,
    ) -> LineCountSettings {
        let defaults = LineCountSettings::default();
        let cfg = self.config.line_count;

        let mut filter = defaults.filter;
        if let Some(exts) = non_empty(cli_extensions).or(cfg.extensions) {
            filter.extensions = exts;
        }
        if let Some(suffixes) = cfg.exclude_suffixes {
            filter.exclude_suffixes = suffixes;
        }
        if let Some(dirs) = cfg.exclude_dirs {
            filter.exclude_dirs = dirs;
        }

        LineCountSettings {
            base: cli_base.or(cfg.base).unwrap_or(defaults.base),
            dirs: non_empty(cli_dirs).or(cfg.dirs).unwrap_or(defaults.dirs),
            filter,
        }
    }
}

/// Organize flags as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct OrganizeOverrides {
    pub root: Utf8PathBuf,
    pub extension: Option<String>,
    pub target_dir: Option<String>,
    pub sentinel: Option<String>,
    pub policy: Option<ErrorPolicy>,
    pub apply: bool,
}

fn non_empty(v: Vec<String>) -> Option<Vec<String>> {
    if v.is_empty() { None } else { Some(v) }
}
