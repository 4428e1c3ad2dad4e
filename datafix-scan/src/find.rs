use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use glob::{MatchOptions, Pattern};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no file matching '{pattern}' in {dir}")]
    MissingFixture { dir: Utf8PathBuf, pattern: String },

    #[error("{} files match '{pattern}' in {dir}: {}", .matches.len(), join(.matches))]
    AmbiguousFixture {
        dir: Utf8PathBuf,
        pattern: String,
        matches: Vec<Utf8PathBuf>,
    },

    #[error("invalid fixture pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn join(paths: &[Utf8PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result of looking for the fixture in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureLookup {
    /// Exactly one file matched.
    Found(Utf8PathBuf),
    /// The directory holds no regular files at all.
    EmptyDir,
}

/// Immediate subdirectories of `root`, sorted by path.
pub fn list_subdirs(root: &Utf8Path) -> Result<Vec<Utf8PathBuf>, ScanError> {
    list_entries(root, |ft| ft.is_dir())
}

/// Regular files directly inside `dir`, sorted by path.
pub fn list_files(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, ScanError> {
    list_entries(dir, |ft| ft.is_file())
}

fn list_entries(
    dir: &Utf8Path,
    keep: impl Fn(&std::fs::FileType) -> bool,
) -> Result<Vec<Utf8PathBuf>, ScanError> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // Follow symlinks so a linked session directory still counts.
        let file_type = match fs::metadata(&path) {
            Ok(meta) => meta.file_type(),
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !keep(&file_type) {
            continue;
        }
        match Utf8PathBuf::from_path_buf(path) {
            Ok(p) => out.push(p),
            Err(p) => warn!(path = %p.display(), "skipping non-UTF-8 path"),
        }
    }

    // Deterministic order matters.
    out.sort();
    Ok(out)
}

/// Find the single file in `dir` whose name matches `pattern`.
///
/// A directory without any regular files yields [`FixtureLookup::EmptyDir`];
/// zero or several matches among existing files is an error.
pub fn find_fixture(dir: &Utf8Path, pattern: &str) -> Result<FixtureLookup, ScanError> {
    let matcher = Pattern::new(pattern).map_err(|e| ScanError::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    let opts = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let files = list_files(dir)?;
    if files.is_empty() {
        debug!(dir = %dir, "directory has no files");
        return Ok(FixtureLookup::EmptyDir);
    }

    let mut matches: Vec<Utf8PathBuf> = files
        .into_iter()
        .filter(|p| {
            p.file_name()
                .is_some_and(|name| matcher.matches_with(name, opts))
        })
        .collect();

    debug!(dir = %dir, pattern, matches = matches.len(), "scanned for fixture");

    match matches.len() {
        0 => Err(ScanError::MissingFixture {
            dir: dir.to_path_buf(),
            pattern: pattern.to_string(),
        }),
        1 => Ok(FixtureLookup::Found(matches.remove(0))),
        _ => Err(ScanError::AmbiguousFixture {
            dir: dir.to_path_buf(),
            pattern: pattern.to_string(),
            matches,
        }),
    }
}
