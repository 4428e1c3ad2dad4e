//! Clap-free settings for the pipelines.

use camino::Utf8PathBuf;
use datafix_linecount::{DEFAULT_DIRS, LineFilter};
use datafix_organize::{DEFAULT_EXTENSION, DEFAULT_SENTINEL, DEFAULT_TARGET_DIR};
use datafix_scan::DEFAULT_FIXTURE_PATTERN;
use datafix_types::ErrorPolicy;

/// Settings for the swap pipeline.
#[derive(Debug, Clone)]
pub struct SwapSettings {
    pub root: Utf8PathBuf,
    pub fixture_pattern: String,
    pub dry_run: bool,
    pub policy: ErrorPolicy,
}

impl Default for SwapSettings {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from("."),
            fixture_pattern: DEFAULT_FIXTURE_PATTERN.to_string(),
            dry_run: true,
            policy: ErrorPolicy::default(),
        }
    }
}

/// Settings for the organize pipeline.
#[derive(Debug, Clone)]
pub struct OrganizeSettings {
    pub root: Utf8PathBuf,
    pub extension: String,
    pub target_dir: String,
    pub sentinel: String,
    pub dry_run: bool,
    pub policy: ErrorPolicy,
}

impl Default for OrganizeSettings {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            target_dir: DEFAULT_TARGET_DIR.to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
            dry_run: true,
            policy: ErrorPolicy::default(),
        }
    }
}

/// Settings for the line-count pipeline.
#[derive(Debug, Clone)]
pub struct LineCountSettings {
    /// Directory the project directories are relative to.
    pub base: Utf8PathBuf,
    pub dirs: Vec<String>,
    pub filter: LineFilter,
}

impl Default for LineCountSettings {
    fn default() -> Self {
        Self {
            base: Utf8PathBuf::from(".."),
            dirs: DEFAULT_DIRS.iter().map(|d| d.to_string()).collect(),
            filter: LineFilter::default(),
        }
    }
}
