use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;
use crate::snapshot::parse_iso_date;
use crate::state::CONFIG_FILENAME;
use crate::stats::StreakPolicy;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "inkstreak")]
#[command(author, version, about = "Track daily word counts, writing streaks and heatmaps")]
#[command(long_about = "Records one word-count snapshot per document per day and derives \
    a contribution-style heatmap, a cumulative trend and writing streaks from them.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count the words in a file and store today's snapshot
    Record(RecordArgs),

    /// Store a word count directly
    Add(AddArgs),

    /// Bulk-import snapshots from a JSON array
    Import(ImportArgs),

    /// List stored snapshots, newest first
    Log(LogArgs),

    /// Show the current and longest writing streak
    Streak(StreakArgs),

    /// Show today's total and change
    Today(TodayArgs),

    /// Show the one-year activity heatmap
    Heatmap(HeatmapArgs),

    /// Show the cumulative word count over time
    Trend(TrendArgs),

    /// Everything at once: summary, heatmap and trend
    Report(ReportArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Location of the snapshot log, shared by every command that touches it.
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Snapshot log file (default: state directory of the project)
    #[arg(long = "log", value_name = "PATH")]
    pub log: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RecordArgs {
    /// Text or markdown file to count
    pub file: PathBuf,

    /// Entity id to record under (default: the file stem)
    #[arg(long)]
    pub entity: Option<String>,

    /// Day to record for (default: today)
    #[arg(long, value_parser = parse_iso_date)]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Entity id (chapter or document)
    #[arg(long)]
    pub entity: String,

    /// Absolute word count of the entity on that day
    #[arg(long)]
    pub words: u64,

    /// Day to record for (default: today)
    #[arg(long, value_parser = parse_iso_date)]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// JSON file holding an array of `{date, entity_id, word_count}` rows
    pub file: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Parser, Debug)]
pub struct LogArgs {
    /// Only show snapshots of this entity
    #[arg(long)]
    pub entity: Option<String>,

    /// First day to include
    #[arg(long, value_parser = parse_iso_date)]
    pub from: Option<NaiveDate>,

    /// Last day to include
    #[arg(long, value_parser = parse_iso_date)]
    pub to: Option<NaiveDate>,

    /// Show at most this many snapshots
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Parser, Debug)]
pub struct StreakArgs {
    /// Reference day (default: today)
    #[arg(long, value_parser = parse_iso_date)]
    pub today: Option<NaiveDate>,

    /// Where the current streak is anchored [possible values: today, latest]
    #[arg(long)]
    pub policy: Option<StreakPolicy>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Parser, Debug)]
pub struct TodayArgs {
    /// Reference day (default: today)
    #[arg(long, value_parser = parse_iso_date)]
    pub today: Option<NaiveDate>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Parser, Debug)]
pub struct HeatmapArgs {
    /// Reference day: selects the calendar year and the text strip (default: today)
    #[arg(long, value_parser = parse_iso_date)]
    pub today: Option<NaiveDate>,

    /// Output format [possible values: text, json, svg]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Parser, Debug)]
pub struct TrendArgs {
    /// Output format [possible values: text, json, svg]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Reference day (default: today)
    #[arg(long, value_parser = parse_iso_date)]
    pub today: Option<NaiveDate>,

    /// Output format [possible values: text, json, markdown, html]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file (default: discovered)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
