//! CLI argument definitions for recval.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "recval",
    version,
    about = "recval - Validate records against a declarative field schema",
    long_about = "Validate structured records against a JSON schema describing\n\
                  per-field type, length, numeric range, pattern, and enumeration\n\
                  constraints. Derives schema-driven test cases to exercise the\n\
                  validator and supports interactive record entry."
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
    /// Run the schema-derived test cases through the validator.
    Run(RunArgs),

    /// Validate a single record file against a schema.
    Validate(ValidateArgs),

    /// Print the schema-derived test cases as JSON.
    Cases(CasesArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the schema JSON file.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Prompt for custom records after the generated cases finish.
    #[arg(long = "interactive")]
    pub interactive: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the schema JSON file.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Path to the record JSON file to validate.
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,
}

#[derive(Parser)]
pub struct CasesArgs {
    /// Path to the schema JSON file.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,
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
