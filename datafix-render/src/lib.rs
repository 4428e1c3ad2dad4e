//! Rendering helpers (plain text) for console output.

use datafix_types::report::{
    DirStatus, LineCountReport, OrganizeReport, RunSummary, SwapReport,
};

pub fn render_swap_text(report: &SwapReport) -> String {
    let mut out = String::new();
    if report.dry_run {
        out.push_str("dry-run: no files written (use --apply)\n\n");
    }

    for d in &report.dirs {
        out.push_str(&format!("{} [{}]\n", d.dir, status_label(d.status)));
        if d.status == DirStatus::Changed || d.status == DirStatus::Unchanged {
            out.push_str("  swapped width & height\n");
            if d.length_width_swapped {
                out.push_str("  swapped length & width\n");
            }
        }
        if let Some(msg) = &d.message {
            out.push_str(&format!("  {}\n", msg));
        }
        if report.dry_run
            && let Some(patch) = &d.patch
        {
            for line in patch.lines() {
                out.push_str(&format!("  {}\n", line));
            }
        }
    }

    out.push('\n');
    out.push_str(&render_summary(&report.summary));
    out
}

pub fn render_organize_text(report: &OrganizeReport) -> String {
    let mut out = String::new();
    if report.dry_run {
        out.push_str("dry-run: no files moved (use --apply)\n\n");
    }

    for d in &report.dirs {
        out.push_str(&format!("{} [{}]\n", d.dir, status_label(d.status)));
        if d.status != DirStatus::Failed {
            out.push_str(&format!("  moved {} files\n", d.moved.len()));
        }
        if d.sentinel_removed {
            out.push_str("  removed sentinel\n");
        }
        if let Some(msg) = &d.message {
            out.push_str(&format!("  {}\n", msg));
        }
    }

    out.push('\n');
    out.push_str(&format!("- Files moved: {}\n", report.files_moved()));
    out.push_str(&render_summary(&report.summary));
    out
}

pub fn render_line_count_text(report: &LineCountReport) -> String {
    let mut out = String::new();
    out.push_str("Line count by project:\n");
    out.push_str("===============\n");
    for e in &report.entries {
        if e.missing {
            out.push_str(&format!("{}: {} (not found)\n", e.dir, e.lines));
        } else {
            out.push_str(&format!("{}: {}\n", e.dir, e.lines));
        }
    }
    out.push_str("===============\n");
    out.push_str(&format!("Total count = {}\n", report.total_lines));
    out
}

fn render_summary(s: &RunSummary) -> String {
    let mut out = format!(
        "- Directories: {} (changed {}, unchanged {}, skipped {}, failed {})\n",
        s.dirs_total, s.changed, s.unchanged, s.skipped, s.failed
    );
    if s.halted {
        out.push_str("- Stopped at first failure\n");
    }
    out
}

fn status_label(status: DirStatus) -> &'static str {
    match status {
        DirStatus::Changed => "changed",
        DirStatus::Unchanged => "unchanged",
        DirStatus::Skipped => "skipped",
        DirStatus::Failed => "failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datafix_types::report::{LineCountEntry, SwapDirResult};
    use datafix_types::tool::ToolInfo;
    use pretty_assertions::assert_eq;

    fn tool() -> ToolInfo {
        ToolInfo {
            name: "datafix".to_string(),
            version: None,
        }
    }

    #[test]
    fn line_count_table() {
        let mut report = LineCountReport::new(tool(), "..".to_string());
        report.push(LineCountEntry {
            dir: "Primitives".to_string(),
            files: 2,
            lines: 40,
            missing: false,
        });
        report.push(LineCountEntry {
            dir: "Gone".to_string(),
            files: 0,
            lines: 0,
            missing: true,
        });

        assert_eq!(
            render_line_count_text(&report),
            "Line count by project:\n\
             ===============\n\
             Primitives: 40\n\
             Gone: 0 (not found)\n\
             ===============\n\
             Total count = 40\n"
        );
    }

    #[test]
    fn swap_dry_run_shows_patch() {
        let mut report = SwapReport::new(tool(), "/data".to_string(), true);
        report.push(SwapDirResult {
            dir: "/data/s1".to_string(),
            status: DirStatus::Changed,
            fixture: Some("/data/s1/testdata.txt".to_string()),
            width_height_swapped: true,
            length_width_swapped: true,
            sha256_before: None,
            sha256_after: None,
            patch: Some("@@ -1,3 +1,3 @@\n-3\n+7\n".to_string()),
            message: None,
        });

        let text = render_swap_text(&report);
        assert!(text.starts_with("dry-run"));
        assert!(text.contains("/data/s1 [changed]"));
        assert!(text.contains("swapped length & width"));
        assert!(text.contains("  +7\n"));
        assert!(text.contains("changed 1"));
    }

    #[test]
    fn failed_dir_shows_message_only() {
        let mut report = SwapReport::new(tool(), "/data".to_string(), false);
        report.push(SwapDirResult::failed(
            "/data/bad".to_string(),
            None,
            "line 1 is not an integer",
        ));

        let text = render_swap_text(&report);
        assert!(text.contains("/data/bad [failed]\n  line 1 is not an integer\n"));
        assert!(!text.contains("swapped"));
    }
}
