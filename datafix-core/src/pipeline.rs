//! Swap, organize and line-count pipelines, extracted from the CLI.

use crate::settings::{LineCountSettings, OrganizeSettings, SwapSettings};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use datafix_hash::sha256_hex;
use datafix_linecount::count_all;
use datafix_organize::{OrganizeError, OrganizeOptions, organize_dir};
use datafix_scan::{Dispatch, FixtureLookup, ScanError, dispatch_subdirs, find_fixture};
use datafix_swap::{FixtureError, normalize_in_place};
use datafix_types::report::{
    DirStatus, LineCountEntry, LineCountReport, OrganizeDirResult, OrganizeReport, RunSummary,
    SwapDirResult, SwapReport,
};
use datafix_types::tool::ToolInfo;
use tracing::{debug, warn};

/// Error type for pipeline results.
///
/// Per-directory failures are not errors here; they are recorded in the
/// report and surface through [`exit_code`].
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

/// Why one session directory failed.
#[derive(Debug, thiserror::Error)]
pub enum DirError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("{path}: {source}")]
    Fixture {
        path: Utf8PathBuf,
        #[source]
        source: FixtureError,
    },

    #[error(transparent)]
    Organize(#[from] OrganizeError),
}

impl DirError {
    fn fixture_path(&self) -> Option<&Utf8Path> {
        match self {
            DirError::Fixture { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}

/// Exit code for a finished run: 0 when clean, 2 when any directory failed.
pub fn exit_code(summary: &RunSummary) -> u8 {
    if summary.has_failures() { 2 } else { 0 }
}

/// Normalize the fixture of every session directory under `settings.root`.
pub fn run_swap(settings: &SwapSettings, tool: ToolInfo) -> Result<SwapReport, ToolError> {
    let mut report = SwapReport::new(tool, settings.root.to_string(), settings.dry_run);

    let dispatch = dispatch_subdirs(&settings.root, settings.policy, |dir| {
        swap_one(dir, settings)
    })?;

    report.summary.halted = dispatch.halted;
    for outcome in dispatch.outcomes {
        let result = match outcome.result {
            Ok(r) => r,
            Err(e) => SwapDirResult::failed(
                outcome.dir.to_string(),
                e.fixture_path().map(|p| p.to_string()),
                e.to_string(),
            ),
        };
        report.push(result);
    }

    report.run.finish();
    debug!(summary = ?report.summary, "swap finished");
    Ok(report)
}

fn swap_one(dir: &Utf8Path, settings: &SwapSettings) -> Result<SwapDirResult, DirError> {
    let fixture = match find_fixture(dir, &settings.fixture_pattern)? {
        FixtureLookup::Found(path) => path,
        FixtureLookup::EmptyDir => {
            warn!(dir = %dir, "no files, skipping");
            return Ok(SwapDirResult::skipped(dir.to_string(), "directory has no files"));
        }
    };

    let change =
        normalize_in_place(&fixture, settings.dry_run).map_err(|source| DirError::Fixture {
            path: fixture.clone(),
            source,
        })?;

    let status = if change.changed() {
        DirStatus::Changed
    } else {
        DirStatus::Unchanged
    };
    let patch = change.patch();

    Ok(SwapDirResult {
        dir: dir.to_string(),
        status,
        fixture: Some(fixture.to_string()),
        width_height_swapped: change.outcome.width_height_swapped,
        length_width_swapped: change.outcome.length_width_swapped,
        sha256_before: Some(sha256_hex(change.before.as_bytes())),
        sha256_after: Some(sha256_hex(change.after.as_bytes())),
        patch: (!patch.is_empty()).then_some(patch),
        message: None,
    })
}

/// Move captures into their subdirectory for every session under `settings.root`.
pub fn run_organize(
    settings: &OrganizeSettings,
    tool: ToolInfo,
) -> Result<OrganizeReport, ToolError> {
    let mut report = OrganizeReport::new(tool, settings.root.to_string(), settings.dry_run);
    let opts = OrganizeOptions {
        extension: settings.extension.clone(),
        target_dir: settings.target_dir.clone(),
        sentinel: settings.sentinel.clone(),
        dry_run: settings.dry_run,
    };

    let dispatch: Dispatch<_, DirError> =
        dispatch_subdirs(&settings.root, settings.policy, |dir| {
            Ok(organize_dir(dir, &opts)?)
        })?;

    report.summary.halted = dispatch.halted;
    for outcome in dispatch.outcomes {
        let dir = outcome.dir.to_string();
        let result = match outcome.result {
            Ok(o) => OrganizeDirResult {
                dir,
                status: if o.changed() {
                    DirStatus::Changed
                } else {
                    DirStatus::Unchanged
                },
                moved: o.moved,
                sentinel_removed: o.sentinel_removed,
                message: None,
            },
            Err(e) => OrganizeDirResult {
                dir,
                status: DirStatus::Failed,
                moved: vec![],
                sentinel_removed: false,
                message: Some(e.to_string()),
            },
        };
        report.push(result);
    }

    report.run.finish();
    debug!(summary = ?report.summary, "organize finished");
    Ok(report)
}

/// Count source lines of every configured project directory.
pub fn run_line_count(
    settings: &LineCountSettings,
    tool: ToolInfo,
) -> Result<LineCountReport, ToolError> {
    let mut report = LineCountReport::new(tool, settings.base.to_string());

    let counts = count_all(&settings.base, &settings.dirs, &settings.filter)
        .with_context(|| format!("count lines under {}", settings.base))?;

    for c in counts {
        report.push(LineCountEntry {
            dir: c.dir,
            files: c.files,
            lines: c.lines,
            missing: c.missing,
        });
    }

    report.run.finish();
    Ok(report)
}
