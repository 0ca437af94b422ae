//! CLI argument definitions for the report ETL.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "report-etl",
    version,
    about = "Merge marketing reports and run SQL transformation pipelines",
    long_about = "Merge marketing report exports (Shopify, Facebook Ads, Google Ads, ...)\n\
                  on a shared key, or run a YAML-defined SQL pipeline that loads a table,\n\
                  applies transformation steps, and writes the result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a SQL transformation pipeline described by a YAML config.
    Run(RunArgs),

    /// Merge report files on a shared key and export the result.
    Merge(MergeArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the pipeline YAML config.
    #[arg(value_name = "CONFIG", default_value = "config/pipeline.yaml")]
    pub config: PathBuf,
}

#[derive(Parser)]
pub struct MergeArgs {
    /// Report files to merge (CSV, XLSX, or JSON), joined in the given order.
    #[arg(value_name = "FILE", required = true, num_args = 2..)]
    pub files: Vec<PathBuf>,

    /// Merge key per file as `<file-name>=<column>` (repeat per file).
    #[arg(long = "on", value_name = "FILE=COLUMN", required = true)]
    pub on: Vec<String>,

    /// Join semantics applied across the whole merge chain.
    #[arg(long = "mode", value_enum, default_value = "inner")]
    pub mode: JoinModeArg,

    /// Export format for the merged report.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ExportFormatArg,

    /// Directory the dated merged report is written into.
    #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,
}

/// CLI join mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum JoinModeArg {
    Inner,
    Left,
    Outer,
}

/// CLI export format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Xlsx,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
