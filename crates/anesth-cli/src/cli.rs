//! CLI argument definitions for the schedule lookup.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use anesth_cli::config::Overrides;
use anesth_ingest::Layout;
use anesth_lookup::PolicyKind;

#[derive(Parser)]
#[command(
    name = "anesth-finder",
    version,
    about = "Find the anesthesiologist assigned to a surgeon on a given date",
    long_about = "Look up which anesthesiologist puts a surgeon's patients to sleep on a date.\n\n\
                  The schedule is read from a CSV file or a published spreadsheet export URL,\n\
                  in long (Date, Surgeon, Anesthesiologist) or wide (Date, one column per surgeon) layout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub schedule: ScheduleArgs,

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

/// Where the schedule comes from and how misses are answered.
#[derive(Args)]
pub struct ScheduleArgs {
    /// CSV file path or http(s) export URL (overrides the settings file).
    #[arg(long = "source", value_name = "PATH_OR_URL", global = true)]
    pub source: Option<String>,

    /// CSV layout of the schedule.
    #[arg(long = "layout", value_enum, global = true)]
    pub layout: Option<LayoutArg>,

    /// What to answer when nothing is scheduled.
    ///
    /// `random-fallback` answers with a random name from the fallback roster
    /// instead of reporting the miss. The answer is marked as random.
    #[arg(long = "policy", value_enum, global = true)]
    pub policy: Option<PolicyArg>,

    /// Do not append a timestamp parameter to the export URL.
    #[arg(long = "no-cache-bust", global = true)]
    pub no_cache_bust: bool,

    /// Settings file to use instead of the platform default.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

impl ScheduleArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            location: self.source.clone(),
            layout: self.layout.map(Layout::from),
            policy: self.policy.map(PolicyKind::from),
            no_cache_bust: self.no_cache_bust,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List every surgeon found in the schedule.
    Surgeons,

    /// Find the anesthesiologist for a surgeon on a date.
    Lookup(LookupArgs),

    /// Print the loaded schedule as a table.
    Schedule(ScheduleTableArgs),
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Operation date as YYYY-MM-DD.
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: String,

    /// Surgeon name as written in the schedule (e.g. "Dr. Martin").
    #[arg(long = "surgeon", value_name = "NAME")]
    pub surgeon: String,

    /// Print the outcome as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ScheduleTableArgs {
    /// Only show this date (YYYY-MM-DD).
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<String>,
}

/// CLI layout choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    Long,
    Wide,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Long => Layout::Long,
            LayoutArg::Wide => Layout::Wide,
        }
    }
}

/// CLI miss policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    Strict,
    RandomFallback,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Strict => PolicyKind::Strict,
            PolicyArg::RandomFallback => PolicyKind::RandomFallback,
        }
    }
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
