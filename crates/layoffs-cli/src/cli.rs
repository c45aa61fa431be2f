//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "layoffs",
    version,
    about = "Clean and analyze corporate layoff records",
    long_about = "Deduplicate, normalize, and impute a raw layoffs CSV, then\n\
                  compute aggregate views over the clean dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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
    /// Clean a raw layoffs CSV and write the clean dataset.
    Clean(CleanArgs),

    /// Clean a raw layoffs CSV and report the analytics views.
    Analyze(AnalyzeArgs),

    /// List the available analytics views.
    Views,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Path to the raw layoffs CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for generated files (default: <INPUT_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// How null fields compare when detecting duplicates.
    #[arg(long = "null-keys", value_enum, default_value = "distinct")]
    pub null_keys: NullKeysArg,

    /// Only impute industries that are null, leaving blank values alone.
    #[arg(long = "keep-blank-industry")]
    pub keep_blank_industry: bool,

    /// Report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub clean: CleanArgs,

    /// Rank threshold for the per-year company ranking.
    #[arg(long = "top-n", default_value_t = 5)]
    pub top_n: usize,

    /// Print the analytics report as JSON on stdout instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NullKeysArg {
    /// A null never equals another null.
    Distinct,
    /// Nulls in the same field compare equal.
    Equal,
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
