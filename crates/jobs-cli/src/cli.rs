//! CLI argument definitions for the dashboard.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use jobs_ingest::DEFAULT_DATASET_PATH;
use jobs_model::Dimension;

#[derive(Parser)]
#[command(
    name = "jobs-dashboard",
    version,
    about = "Job postings analytics - KPIs and charts from an enriched postings file",
    long_about = "Summarize a semicolon-delimited job postings file.\n\n\
                  Renders headline KPIs and ranked charts as terminal tables,\n\
                  JSON, or a directory of SVG charts with an HTML overview."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML file with [dashboard] and [theme] tables.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

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
    /// Print the headline KPIs.
    Summary(SummaryArgs),

    /// Build every chart and render the dashboard.
    Report(ReportArgs),

    /// Rank the values of one dimension.
    Top(TopArgs),
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Semicolon-delimited postings file.
    #[arg(value_name = "DATA", default_value = DEFAULT_DATASET_PATH)]
    pub data: PathBuf,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Semicolon-delimited postings file.
    #[arg(value_name = "DATA", default_value = DEFAULT_DATASET_PATH)]
    pub data: PathBuf,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Directory for SVG output (default: ./dashboard).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Entries kept in each ranked chart (overrides the config file).
    #[arg(long = "top-n", value_name = "N")]
    pub top_n: Option<NonZeroUsize>,

    /// Number of salary histogram bins (overrides the config file).
    #[arg(long = "bins", value_name = "N")]
    pub bins: Option<NonZeroUsize>,
}

#[derive(Parser)]
pub struct TopArgs {
    /// Semicolon-delimited postings file.
    #[arg(value_name = "DATA", default_value = DEFAULT_DATASET_PATH)]
    pub data: PathBuf,

    /// Dimension to rank, e.g. skills, tools, country, seniority, companies.
    #[arg(long = "dimension", short = 'd', value_name = "DIMENSION")]
    pub dimension: Dimension,

    /// Number of entries to keep.
    #[arg(long = "limit", short = 'n', default_value = "10")]
    pub limit: NonZeroUsize,

    /// Roll the remaining entries into an "Other" bucket.
    #[arg(long = "with-other")]
    pub with_other: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Svg,
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
