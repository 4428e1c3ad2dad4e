use crate::tool::{RunInfo, ToolInfo};
use serde::{Deserialize, Serialize};

/// Outcome of processing one directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirStatus {
    /// Contents changed (or would change, in a dry run).
    Changed,
    Unchanged,
    /// Nothing to do in this directory (e.g. it holds no files).
    Skipped,
    Failed,
}

// --- swap -----------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapReport {
    pub schema: String,
    pub tool: ToolInfo,
    pub run: RunInfo,
    pub root: String,
    pub dry_run: bool,

    #[serde(default)]
    pub dirs: Vec<SwapDirResult>,
    pub summary: RunSummary,
}

impl SwapReport {
    pub fn new(tool: ToolInfo, root: String, dry_run: bool) -> Self {
        Self {
            schema: crate::schema::DATAFIX_SWAP_V1.to_string(),
            tool,
            run: RunInfo::start(),
            root,
            dry_run,
            dirs: vec![],
            summary: RunSummary::default(),
        }
    }

    pub fn push(&mut self, result: SwapDirResult) {
        self.summary.record(result.status);
        self.dirs.push(result);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapDirResult {
    pub dir: String,
    pub status: DirStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture: Option<String>,

    /// Line 1 and line 2 were exchanged.
    #[serde(default)]
    pub width_height_swapped: bool,

    /// Line 0 and line 1 were exchanged because line 0 was smaller.
    #[serde(default)]
    pub length_width_swapped: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_before: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_after: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SwapDirResult {
    pub fn skipped(dir: String, message: impl Into<String>) -> Self {
        Self {
            dir,
            status: DirStatus::Skipped,
            fixture: None,
            width_height_swapped: false,
            length_width_swapped: false,
            sha256_before: None,
            sha256_after: None,
            patch: None,
            message: Some(message.into()),
        }
    }

    pub fn failed(dir: String, fixture: Option<String>, message: impl Into<String>) -> Self {
        Self {
            status: DirStatus::Failed,
            fixture,
            ..Self::skipped(dir, message)
        }
    }
}

// --- organize -------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizeReport {
    pub schema: String,
    pub tool: ToolInfo,
    pub run: RunInfo,
    pub root: String,
    pub dry_run: bool,

    #[serde(default)]
    pub dirs: Vec<OrganizeDirResult>,
    pub summary: RunSummary,
}

impl OrganizeReport {
    pub fn new(tool: ToolInfo, root: String, dry_run: bool) -> Self {
        Self {
            schema: crate::schema::DATAFIX_ORGANIZE_V1.to_string(),
            tool,
            run: RunInfo::start(),
            root,
            dry_run,
            dirs: vec![],
            summary: RunSummary::default(),
        }
    }

    pub fn push(&mut self, result: OrganizeDirResult) {
        self.summary.record(result.status);
        self.dirs.push(result);
    }

    pub fn files_moved(&self) -> usize {
        self.dirs.iter().map(|d| d.moved.len()).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizeDirResult {
    pub dir: String,
    pub status: DirStatus,

    /// File names moved into the target directory.
    #[serde(default)]
    pub moved: Vec<String>,

    #[serde(default)]
    pub sentinel_removed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// --- line count -----------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineCountReport {
    pub schema: String,
    pub tool: ToolInfo,
    pub run: RunInfo,
    pub base: String,

    #[serde(default)]
    pub entries: Vec<LineCountEntry>,
    pub total_lines: u64,
}

impl LineCountReport {
    pub fn new(tool: ToolInfo, base: String) -> Self {
        Self {
            schema: crate::schema::DATAFIX_LINE_COUNT_V1.to_string(),
            tool,
            run: RunInfo::start(),
            base,
            entries: vec![],
            total_lines: 0,
        }
    }

    pub fn push(&mut self, entry: LineCountEntry) {
        self.total_lines += entry.lines;
        self.entries.push(entry);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCountEntry {
    pub dir: String,
    pub files: u64,
    pub lines: u64,

    /// The directory did not exist under the base.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub missing: bool,
}

// --- shared ---------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub dirs_total: u64,
    pub changed: u64,
    pub unchanged: u64,
    pub skipped: u64,
    pub failed: u64,

    /// The run stopped at the first failure (fail-fast policy).
    #[serde(default)]
    pub halted: bool,
}

impl RunSummary {
    pub fn record(&mut self, status: DirStatus) {
        self.dirs_total += 1;
        match status {
            DirStatus::Changed => self.changed += 1,
            DirStatus::Unchanged => self.unchanged += 1,
            DirStatus::Skipped => self.skipped += 1,
            DirStatus::Failed => self.failed += 1,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
