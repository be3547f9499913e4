//! One module per subcommand. Each `run_*` builds its context from the
//! global flags and prints its own output; errors bubble up to `main`.

pub mod config;
pub mod context;
pub mod heatmap;
pub mod import;
pub mod init;
pub mod log_cmd;
pub mod record;
pub mod report;
pub mod streak;
pub mod today;
pub mod trend;

pub use config::run_config;
pub use context::CommandContext;
pub use heatmap::run_heatmap;
pub use import::run_import;
pub use init::{generate_config_template, run_init};
pub use log_cmd::run_log;
pub use record::{run_add, run_record};
pub use report::run_report;
pub use streak::run_streak;
pub use today::run_today;
pub use trend::run_trend;

use crate::Result;
use crate::cli::{Cli, Commands};

/// Dispatch the parsed command line.
///
/// # Errors
/// Returns whatever error the selected command fails with.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Record(args) => run_record(args, cli),
        Commands::Add(args) => run_add(args, cli),
        Commands::Import(args) => run_import(args, cli),
        Commands::Log(args) => run_log(args, cli),
        Commands::Streak(args) => run_streak(args, cli),
        Commands::Today(args) => run_today(args, cli),
        Commands::Heatmap(args) => run_heatmap(args, cli),
        Commands::Trend(args) => run_trend(args, cli),
        Commands::Report(args) => run_report(args, cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, cli),
    }
}
