//! Capture layout cleanup for a single session directory.
//!
//! Depth-map captures (`*.dm`) are moved from the session directory into a
//! dedicated subdirectory (`maps/`), and the obsolete floor sentinel
//! (`floor.txt`) is removed.

use camino::{Utf8Path, Utf8PathBuf};
use datafix_scan::{ScanError, list_files};
use fs_err as fs;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_EXTENSION: &str = "dm";
pub const DEFAULT_TARGET_DIR: &str = "maps";
pub const DEFAULT_SENTINEL: &str = "floor.txt";

#[derive(Debug, Error)]
pub enum OrganizeError {
    /// A file of the same name already sits in the target directory.
    #[error("refusing to overwrite {to} with {from}")]
    Collision { from: Utf8PathBuf, to: Utf8PathBuf },

    #[error("invalid {field}: {message}")]
    InvalidOption {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct OrganizeOptions {
    /// Extension of files to move, without the leading dot.
    pub extension: String,
    /// Name of the subdirectory that receives them.
    pub target_dir: String,
    /// File name deleted after the move.
    pub sentinel: String,
    pub dry_run: bool,
}

impl Default for OrganizeOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            target_dir: DEFAULT_TARGET_DIR.to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
            dry_run: false,
        }
    }
}

impl OrganizeOptions {
    fn validate(&self) -> Result<(), OrganizeError> {
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() {
            return Err(OrganizeError::InvalidOption {
                field: "extension",
                message: "must not be empty".to_string(),
            });
        }
        for (field, value) in [("target_dir", &self.target_dir), ("sentinel", &self.sentinel)] {
            if value.is_empty() || value.contains(['/', '\\']) || value == "." || value == ".." {
                return Err(OrganizeError::InvalidOption {
                    field,
                    message: format!("'{}' is not a plain file name", value),
                });
            }
        }
        Ok(())
    }

    fn suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizeOutcome {
    /// File names moved (or, in a dry run, to be moved), sorted.
    pub moved: Vec<String>,
    pub sentinel_removed: bool,
}

impl OrganizeOutcome {
    pub fn changed(&self) -> bool {
        !self.moved.is_empty() || self.sentinel_removed
    }
}

/// Move matching files of `dir` into its target subdirectory and delete the sentinel.
///
/// All destination names are checked before anything moves, so a collision
/// leaves the directory untouched.
pub fn organize_dir(dir: &Utf8Path, opts: &OrganizeOptions) -> Result<OrganizeOutcome, OrganizeError> {
    opts.validate()?;

    let suffix = opts.suffix();
    let target = dir.join(&opts.target_dir);

    let mut moves = Vec::new();
    for path in list_files(dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        if !name.ends_with(&suffix) {
            continue;
        }
        let dest = target.join(name);
        if dest.exists() {
            return Err(OrganizeError::Collision { from: path, to: dest });
        }
        moves.push((name.to_string(), path.clone(), dest));
    }

    if !opts.dry_run {
        fs::create_dir_all(&target)?;
        for (_, from, to) in &moves {
            fs::rename(from, to)?;
            debug!(from = %from, to = %to, "moved capture");
        }
    }
    info!("moved {} {} files", moves.len(), opts.extension.trim_start_matches('.'));

    let sentinel = dir.join(&opts.sentinel);
    let sentinel_removed = sentinel.is_file();
    if sentinel_removed && !opts.dry_run {
        fs::remove_file(&sentinel)?;
        debug!(path = %sentinel, "removed sentinel");
    }

    Ok(OrganizeOutcome {
        moved: moves.into_iter().map(|(name, _, _)| name).collect(),
        sentinel_removed,
    })
}
