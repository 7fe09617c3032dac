//! CLI argument definitions for the capture labeler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dns_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "dns-extract",
    version,
    about = "Label DNS capture exports for model training",
    long_about = "Normalize a DNS capture export (CSV, optionally gzip) onto the canonical\n\
                  tshark field schema and label every record with a class/subclass pair\n\
                  checked against a taxonomy file."
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
    /// Normalize and label one capture file.
    Extract(ExtractArgs),

    /// List the classes and subclasses of a taxonomy file.
    Taxonomy(TaxonomyArgs),
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Capture export to read (CSV, optionally gzip-compressed).
    #[arg(long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Taxonomy JSON listing the allowed classes and subclasses.
    #[arg(long = "taxonomy", value_name = "PATH")]
    pub taxonomy: PathBuf,

    /// Class assigned to every record.
    #[arg(long = "class")]
    pub class: String,

    /// Subclass assigned to every record.
    #[arg(long = "subclass")]
    pub subclass: String,

    /// Output CSV path.
    #[arg(long = "out", value_name = "PATH", default_value = "tmp/extracted.csv")]
    pub out: PathBuf,

    /// Derive the response flag from the response code when the flag column is absent.
    ///
    /// Records with a response code are marked as responses, all others as
    /// queries. Without this flag a missing response flag is written as 0.
    #[arg(long = "infer-response-from-rcode")]
    pub infer_response_from_rcode: bool,

    /// JSON file overriding the canonical columns and aliases.
    #[arg(long = "schema-config", value_name = "PATH")]
    pub schema_config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TaxonomyArgs {
    /// Taxonomy JSON to list.
    #[arg(long = "taxonomy", value_name = "PATH")]
    pub taxonomy: PathBuf,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
