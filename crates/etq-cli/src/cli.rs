//! CLI argument definitions for the label printing tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "etiqueta",
    version,
    about = "Etiqueta Studio - print inventory label sheets from CSV",
    long_about = "Load an inventory CSV, validate it, select rows and render a\n\
                  printable HTML label sheet with one block per physical unit."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Validate a CSV file and list what it contains.
    Check(CheckArgs),

    /// Render the printable label sheet for selected rows.
    Print(PrintArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the inventory CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,
}

#[derive(Parser)]
pub struct PrintArgs {
    /// Path to the inventory CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Output path for the rendered sheet (default: the input path with an
    /// .html extension).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Select a record id (repeatable).
    #[arg(long = "id", value_name = "ID", conflicts_with = "all")]
    pub ids: Vec<String>,

    /// Select every visible row instead of naming ids.
    #[arg(long = "all")]
    pub all: bool,

    /// Case-insensitive substring filter applied before --all.
    #[arg(long = "search", value_name = "QUERY")]
    pub search: Option<String>,

    /// Open the rendered sheet in the default browser for printing.
    #[arg(long = "open")]
    pub open: bool,
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
