//! CLI argument definitions for the patient education browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use patedu_model::{ComplexityLevel, Language, ProcedureCategory};

#[derive(Parser)]
#[command(
    name = "patedu",
    version,
    about = "Patient education library - browse bilingual procedure explanations",
    long_about = "Browse a bilingual (English/Spanish) library of patient-facing\n\
                  procedure explanations.\n\n\
                  Covers general medical procedures plus bedside interventions and\n\
                  screening programs, with preparation, risk, and follow-up guidance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Emit results as JSON instead of tables.
    #[arg(long = "json", global = true)]
    pub json: bool,

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
    /// Show the full education record for a single id.
    Show(ShowArgs),

    /// Search both stores by keyword.
    Search(SearchArgs),

    /// List records, optionally narrowed by filters.
    List(ListArgs),

    /// Check id integrity of the compiled-in stores and report counts.
    Verify,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Record id, e.g. `lab-cbc` or `scr-colonoscopy`.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Language for patient-facing text (en, es).
    #[arg(long = "lang", default_value = "en")]
    pub lang: Language,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Case-insensitive keyword. Matches ids, names, and education text.
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Language for displayed names (en, es).
    #[arg(long = "lang", default_value = "en")]
    pub lang: Language,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Restrict to one store.
    #[arg(long = "store", value_enum, default_value = "all")]
    pub store: StoreArg,

    /// Keep only procedures in this category, e.g. `diagnostic`.
    #[arg(long = "category")]
    pub category: Option<ProcedureCategory>,

    /// Keep only records at this complexity level, e.g. `moderate`.
    #[arg(long = "complexity")]
    pub complexity: Option<ComplexityLevel>,

    /// Keep only records listing this specialty, e.g. `cardiology`.
    #[arg(long = "specialty")]
    pub specialty: Option<String>,

    /// Keep only records touching this body region, e.g. `chest`.
    #[arg(long = "body-region")]
    pub body_region: Option<String>,

    /// Language for displayed names (en, es).
    #[arg(long = "lang", default_value = "en")]
    pub lang: Language,
}

/// Store selector for `list`.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreArg {
    All,
    Procedures,
    BedsideScreening,
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
