mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use config::{ConfigMerger, OrganizeOverrides};
use datafix_core::pipeline::{ToolError, exit_code, run_line_count, run_organize, run_swap};
use datafix_render::{render_line_count_text, render_organize_text, render_swap_text};
use datafix_types::ErrorPolicy;
use datafix_types::tool::ToolInfo;
use fs_err as fs;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "datafix",
    version,
    about = "Maintenance tools for volume-calculator test data."
)]
struct Cli {
    /// Config file (default: ./datafix.toml when present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize dimension fixtures: swap width/height, then length/width when needed.
    Swap(SwapArgs),
    /// Move depth-map captures into a subdirectory and remove sentinel files.
    Organize(OrganizeArgs),
    /// Count source lines per project directory.
    LineCount(LineCountArgs),
}

#[derive(Debug, Parser)]
struct SwapArgs {
    /// Test-data root whose subdirectories hold one fixture each (default: current directory).
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Fixture file name pattern (glob, default: testdata.txt).
    #[arg(long)]
    pattern: Option<String>,

    /// Write changes to disk. If omitted, runs a dry-run and prints the diff.
    #[arg(long, default_value_t = false)]
    apply: bool,

    /// What to do when a directory fails (fail-fast, collect).
    #[arg(long)]
    error_policy: Option<ErrorPolicy>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Parser)]
struct OrganizeArgs {
    /// Test-data root whose subdirectories are capture sessions (default: current directory).
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Extension of files to move (default: dm).
    #[arg(long)]
    extension: Option<String>,

    /// Subdirectory receiving the moved files (default: maps).
    #[arg(long)]
    target_dir: Option<String>,

    /// File removed from each session (default: floor.txt).
    #[arg(long)]
    sentinel: Option<String>,

    /// Move and delete files. If omitted, only reports what would happen.
    #[arg(long, default_value_t = false)]
    apply: bool,

    /// What to do when a directory fails (fail-fast, collect).
    #[arg(long)]
    error_policy: Option<ErrorPolicy>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Parser)]
struct LineCountArgs {
    /// Directory the project directories are relative to (default: ..).
    #[arg(long)]
    base: Option<Utf8PathBuf>,

    /// Project directory to count; repeat for several (replaces the default list).
    #[arg(long = "dir")]
    dirs: Vec<String>,

    /// File extension to count; repeat for several (default: h, cpp, c, cs).
    #[arg(long = "ext")]
    extensions: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, clap::Args)]
struct OutputArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also write the JSON report to this path.
    #[arg(long)]
    report: Option<Utf8PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<u8> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file_config = config::load_or_default(cli.config.as_deref(), Utf8Path::new("."))
        .context("load datafix.toml config")?;
    let merger = ConfigMerger::new(file_config);

    match cli.cmd {
        Command::Swap(args) => cmd_swap(args, merger),
        Command::Organize(args) => cmd_organize(args, merger),
        Command::LineCount(args) => cmd_line_count(args, merger),
    }
}

fn cmd_swap(args: SwapArgs, merger: ConfigMerger) -> anyhow::Result<u8> {
    let settings = merger.merge_swap_args(args.root, args.pattern, args.error_policy, args.apply);
    debug!(?settings, "merged swap settings");

    let report = run_swap(&settings, tool_info()).map_err(tool_error)?;

    emit(&args.output, &report, || render_swap_text(&report))?;
    info!(
        changed = report.summary.changed,
        failed = report.summary.failed,
        "swap done"
    );
    Ok(exit_code(&report.summary))
}

fn cmd_organize(args: OrganizeArgs, merger: ConfigMerger) -> anyhow::Result<u8> {
    let settings = merger.merge_organize_args(OrganizeOverrides {
        root: args.root,
        extension: args.extension,
        target_dir: args.target_dir,
        sentinel: args.sentinel,
        policy: args.error_policy,
        apply: args.apply,
    });
    debug!(?settings, "merged organize settings");

    let report = run_organize(&settings, tool_info()).map_err(tool_error)?;

    emit(&args.output, &report, || render_organize_text(&report))?;
    info!(moved = report.files_moved(), "organize done");
    Ok(exit_code(&report.summary))
}

fn cmd_line_count(args: LineCountArgs, merger: ConfigMerger) -> anyhow::Result<u8> {
    let settings = merger.merge_line_count_args(args.base, args.dirs, args.extensions);
    debug!(?settings, "merged line-count settings");

    let report = run_line_count(&settings, tool_info()).map_err(tool_error)?;

    emit(&args.output, &report, || render_line_count_text(&report))?;
    Ok(0)
}

fn tool_error(e: ToolError) -> anyhow::Error {
    match e {
        ToolError::Internal(e) => e,
        other => anyhow::Error::new(other),
    }
}

/// Print `report` in the requested format and optionally write it as JSON.
fn emit<T: serde::Serialize>(
    output: &OutputArgs,
    report: &T,
    render_text: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    match output.format {
        OutputFormat::Text => print!("{}", render_text()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(report).context("serialize json")?
        ),
    }
    if let Some(path) = &output.report {
        write_json(path, report)?;
        info!("wrote report to {}", path);
    }
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Utf8Path, v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "datafix".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
