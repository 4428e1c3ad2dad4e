use datafix_types::ErrorPolicy;
use datafix_types::report::{
    DirStatus, LineCountEntry, LineCountReport, OrganizeDirResult, OrganizeReport, RunSummary,
    SwapDirResult, SwapReport,
};
use datafix_types::tool::ToolInfo;
use pretty_assertions::assert_eq;

fn tool() -> ToolInfo {
    ToolInfo {
        name: "datafix".to_string(),
        version: Some("0.0.0".to_string()),
    }
}

#[test]
fn dir_status_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(DirStatus::Changed).unwrap(),
        serde_json::json!("changed")
    );
    assert_eq!(
        serde_json::to_value(DirStatus::Failed).unwrap(),
        serde_json::json!("failed")
    );
}

#[test]
fn error_policy_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_value(ErrorPolicy::FailFast).unwrap(),
        serde_json::json!("fail-fast")
    );
    let parsed: ErrorPolicy = serde_json::from_str("\"collect\"").unwrap();
    assert_eq!(parsed, ErrorPolicy::Collect);
}

#[test]
fn swap_report_tracks_summary() {
    let mut report = SwapReport::new(tool(), "/data".to_string(), false);
    report.push(SwapDirResult::skipped("/data/empty".to_string(), "no files"));
    report.push(SwapDirResult::failed(
        "/data/bad".to_string(),
        Some("/data/bad/testdata.txt".to_string()),
        "invalid number",
    ));

    assert_eq!(report.schema, "datafix.swap.v1");
    assert_eq!(
        report.summary,
        RunSummary {
            dirs_total: 2,
            changed: 0,
            unchanged: 0,
            skipped: 1,
            failed: 1,
            halted: false,
        }
    );
    assert!(report.summary.has_failures());
}

#[test]
fn skipped_result_omits_hashes_and_patch() {
    let value =
        serde_json::to_value(SwapDirResult::skipped("d".to_string(), "no files")).unwrap();
    assert!(value.get("sha256_before").is_none());
    assert!(value.get("patch").is_none());
    assert_eq!(value["message"], serde_json::json!("no files"));
}

#[test]
fn organize_report_counts_moved_files() {
    let mut report = OrganizeReport::new(tool(), "/data".to_string(), true);
    report.push(OrganizeDirResult {
        dir: "/data/a".to_string(),
        status: DirStatus::Changed,
        moved: vec!["1.dm".to_string(), "2.dm".to_string()],
        sentinel_removed: true,
        message: None,
    });
    assert_eq!(report.files_moved(), 2);
    assert_eq!(report.summary.changed, 1);
}

#[test]
fn line_count_report_totals_entries_and_omits_missing_false() {
    let mut report = LineCountReport::new(tool(), "..".to_string());
    report.push(LineCountEntry {
        dir: "Primitives".to_string(),
        files: 3,
        lines: 120,
        missing: false,
    });
    report.push(LineCountEntry {
        dir: "Gone".to_string(),
        files: 0,
        lines: 0,
        missing: true,
    });
    assert_eq!(report.total_lines, 120);

    let value = serde_json::to_value(&report).unwrap();
    assert!(value["entries"][0].get("missing").is_none());
    assert_eq!(value["entries"][1]["missing"], serde_json::json!(true));
}
