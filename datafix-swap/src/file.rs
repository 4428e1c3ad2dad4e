//! File-level operations: read a fixture, apply swaps, write it back.

use crate::error::FixtureResult;
use crate::fixture::{Fixture, NormalizeOutcome};
use camino::{Utf8Path, Utf8PathBuf};
use diffy::PatchFormatter;
use fs_err as fs;
use std::io::Write;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Before/after snapshot of one fixture run through [`normalize_in_place`].
#[derive(Debug, Clone)]
pub struct FixtureChange {
    pub path: Utf8PathBuf,
    pub before: String,
    pub after: String,
    pub outcome: NormalizeOutcome,
    /// The new contents were written to disk.
    pub written: bool,
}

impl FixtureChange {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }

    pub fn patch(&self) -> String {
        render_patch(&self.path, &self.before, &self.after)
    }
}

pub fn read_fixture(path: &Utf8Path) -> FixtureResult<(String, Fixture)> {
    let text = fs::read_to_string(path)?;
    let fixture = Fixture::parse(&text);
    Ok((text, fixture))
}

/// Replace `path` with `contents` via a temp file in the same directory.
///
/// A crash mid-write leaves the old file intact. Permissions of an existing
/// file are carried over to the replacement. A symlink is resolved first so
/// the file it points to is replaced and the link itself stays.
pub fn write_atomic(path: &Utf8Path, contents: &str) -> FixtureResult<()> {
    let target = resolve_link(path)?;
    let dir = match target.parent() {
        Some(p) if !p.as_str().is_empty() => p,
        _ => Utf8Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    if let Ok(meta) = fs::metadata(&target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.persist(&target).map_err(|e| e.error)?;

    debug!(path = %target, bytes = contents.len(), "wrote fixture");
    Ok(())
}

fn resolve_link(path: &Utf8Path) -> FixtureResult<Utf8PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            let resolved = fs::canonicalize(path)?;
            let resolved = Utf8PathBuf::try_from(resolved).map_err(|e| e.into_io_error())?;
            debug!(link = %path, target = %resolved, "resolved fixture symlink");
            Ok(resolved)
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Exchange lines 1 and 2 of the fixture at `path` and rewrite it.
pub fn swap_width_height_in_place(path: &Utf8Path) -> FixtureResult<()> {
    let (_, mut fixture) = read_fixture(path)?;
    fixture.swap_width_height()?;
    write_atomic(path, &fixture.render())
}

/// Exchange lines 0 and 1 of the fixture at `path` when line 0 is smaller.
///
/// The file is only rewritten when a swap happened.
pub fn swap_length_width_in_place(path: &Utf8Path) -> FixtureResult<bool> {
    let (_, mut fixture) = read_fixture(path)?;
    let swapped = fixture.swap_length_width()?;
    if swapped {
        info!(path = %path, "swapped length & width");
        write_atomic(path, &fixture.render())?;
    }
    Ok(swapped)
}

/// Run both swap rules on the fixture at `path` and write the result once.
///
/// With `dry_run` nothing is written. A parse failure in the second rule
/// leaves the file as it was.
pub fn normalize_in_place(path: &Utf8Path, dry_run: bool) -> FixtureResult<FixtureChange> {
    let (before, mut fixture) = read_fixture(path)?;
    let outcome = fixture.normalize()?;
    let after = fixture.render();

    if outcome.length_width_swapped {
        info!(path = %path, "swapped length & width");
    }

    let written = !dry_run;
    if written {
        write_atomic(path, &after)?;
    }

    Ok(FixtureChange {
        path: path.to_path_buf(),
        before,
        after,
        outcome,
        written,
    })
}

/// Unified diff between two versions of `path`; empty when they are equal.
pub fn render_patch(path: &Utf8Path, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

    let patch = diffy::create_patch(before, after);
    let formatter = PatchFormatter::new();
    let body = formatter.fmt_patch(&patch).to_string();
    // diffy emits its own ---/+++ header; keep only the hunks.
    for line in body.lines().skip_while(|l| !l.starts_with("@@")) {
        out.push_str(line);
        out.push('\n');
    }
    out
}
