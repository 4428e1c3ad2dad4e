//! Source line counting across project directories.
//!
//! Each project directory is walked recursively. A file counts when its name
//! ends with one of the configured extensions, does not end with an excluded
//! suffix (generated interop sources), and does not live under an excluded
//! directory (build output).

mod count;

pub use count::{count_dir, count_lines};

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tracing::warn;

/// Project directories reported by default, relative to the base directory.
pub const DEFAULT_DIRS: &[&str] = &[
    "D435FrameProvider",
    "DeviceIntegration",
    "ExtIntegration",
    "FrameProviders",
    "FrameProcessor",
    "libDepthMapProcessor",
    "Primitives",
    "Tests/VolumeCalculatorTests",
    "Tests/DepthMapProcessorTests",
    "Utils/MacReader",
    "Utils/VersionWriter",
    "VolumeCalculatorGUI",
];

pub const DEFAULT_EXTENSIONS: &[&str] = &["h", "cpp", "c", "cs"];
pub const DEFAULT_EXCLUDE_SUFFIXES: &[&str] = &["g.i.cs"];
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &["obj"];

#[derive(Debug, Error)]
pub enum LineCountError {
    #[error("walk {root}: {source}")]
    Walk {
        root: Utf8PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Which files count.
#[derive(Debug, Clone)]
pub struct LineFilter {
    pub extensions: Vec<String>,
    pub exclude_suffixes: Vec<String>,
    pub exclude_dirs: Vec<String>,
}

impl Default for LineFilter {
    fn default() -> Self {
        Self {
            extensions: to_owned(DEFAULT_EXTENSIONS),
            exclude_suffixes: to_owned(DEFAULT_EXCLUDE_SUFFIXES),
            exclude_dirs: to_owned(DEFAULT_EXCLUDE_DIRS),
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl LineFilter {
    /// True when a file called `name` should be counted.
    pub fn accepts_file(&self, name: &str) -> bool {
        let has_ext = self.extensions.iter().any(|ext| {
            name.strip_suffix(ext.trim_start_matches('.'))
                .is_some_and(|stem| stem.len() > 1 && stem.ends_with('.'))
        });
        has_ext && !self.exclude_suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }

    /// True when a directory called `name` should be descended into.
    pub fn accepts_dir(&self, name: &str) -> bool {
        !self.exclude_dirs.iter().any(|d| d == name)
    }
}

/// Line count of one project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirCount {
    pub dir: String,
    pub files: u64,
    pub lines: u64,
    pub missing: bool,
}

/// Count every directory in `dirs` (relative to `base`), in order.
///
/// Repeated entries are counted once. A directory that does not exist counts
/// zero and is flagged as missing.
pub fn count_all(
    base: &Utf8Path,
    dirs: &[String],
    filter: &LineFilter,
) -> Result<Vec<DirCount>, LineCountError> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for dir in dirs {
        if !seen.insert(dir.as_str()) {
            continue;
        }
        let root = base.join(dir);
        if !root.is_dir() {
            warn!(dir = %root, "project directory not found");
            out.push(DirCount {
                dir: dir.clone(),
                files: 0,
                lines: 0,
                missing: true,
            });
            continue;
        }
        let (files, lines) = count_dir(&root, filter)?;
        out.push(DirCount {
            dir: dir.clone(),
            files,
            lines,
            missing: false,
        });
    }
    Ok(out)
}
