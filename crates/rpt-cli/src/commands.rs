//! Command implementations for the report ETL CLI.

use anyhow::Context;

use rpt_ingest::DatasetRegistry;
use rpt_merge::{JoinMode, execute_merge, plan_merge};
use rpt_model::FileKind;
use rpt_output::export_merged;
use rpt_pipeline::{load_pipeline_config, run_pipeline};

use crate::cli::{ExportFormatArg, JoinModeArg, MergeArgs, RunArgs};
use crate::types::{MergeResult, RunResult, parse_key_selections};

pub fn run_pipeline_command(args: &RunArgs) -> anyhow::Result<RunResult> {
    let config = load_pipeline_config(&args.config)
        .with_context(|| format!("load pipeline config {}", args.config.display()))?;
    let steps = config.steps.len();
    let table = run_pipeline(&config)?;
    Ok(RunResult {
        destination: config.destination.path.clone(),
        steps,
        table,
    })
}

pub fn run_merge_command(args: &MergeArgs) -> anyhow::Result<MergeResult> {
    let merge_keys = parse_key_selections(&args.on)?;

    // Per-file load failures are reported and skipped; the merge proceeds
    // with whatever loaded, as long as at least two datasets remain.
    let mut registry = DatasetRegistry::new();
    let report = registry.load_files(args.files.iter().map(std::path::PathBuf::as_path));
    let mut skipped = Vec::new();
    for (path, error) in &report.failed {
        eprintln!("error: skipping {}: {error}", path.display());
        skipped.push(path.display().to_string());
    }

    let order = report.loaded;
    let plan = plan_merge(&registry, &merge_keys, &order)?;
    let merged = execute_merge(&registry, &plan, &order, join_mode(args.mode))?;
    let output = export_merged(&merged, &args.out_dir, export_kind(args.format))
        .with_context(|| format!("export merged report to {}", args.out_dir.display()))?;

    Ok(MergeResult {
        output,
        table: merged,
        merged: order,
        skipped,
    })
}

fn join_mode(arg: JoinModeArg) -> JoinMode {
    match arg {
        JoinModeArg::Inner => JoinMode::Inner,
        JoinModeArg::Left => JoinMode::Left,
        JoinModeArg::Outer => JoinMode::Outer,
    }
}

fn export_kind(arg: ExportFormatArg) -> FileKind {
    match arg {
        ExportFormatArg::Csv => FileKind::Csv,
        ExportFormatArg::Xlsx => FileKind::Xlsx,
    }
}
