use serde::Serialize;

use crate::Result;
use crate::cli::{Cli, StreakArgs};
use crate::output::{OutputFormat, TextFormatter, to_json};
use crate::snapshot::format_iso_date;
use crate::stats::{StreakPolicy, current_streak_from, longest_streak_from};

use super::context::CommandContext;

const SUPPORTED_FORMATS: &[OutputFormat] = &[OutputFormat::Text, OutputFormat::Json];

#[derive(Debug, Serialize)]
struct StreakView {
    today: String,
    current: u32,
    longest: u32,
    policy: StreakPolicy,
}

/// `inkstreak streak`
///
/// # Errors
/// Returns an error for unsupported formats or an unreadable log.
pub fn run_streak(args: &StreakArgs, cli: &Cli) -> Result<()> {
    args.format.ensure_supported("streak", SUPPORTED_FORMATS)?;
    let ctx = CommandContext::from_cli(cli, &args.store, args.today)?;
    let output = streak_output(args, &ctx)?;
    ctx.emit(&output);
    Ok(())
}

pub(crate) fn streak_output(args: &StreakArgs, ctx: &CommandContext) -> Result<String> {
    let totals = ctx.daily_totals()?;
    let policy = args.policy.unwrap_or(ctx.config.stats.streak_policy);
    let current = current_streak_from(&totals, ctx.today, policy);
    let longest = longest_streak_from(&totals);

    match args.format {
        OutputFormat::Json => {
            let view = StreakView {
                today: format_iso_date(ctx.today),
                current,
                longest,
                policy,
            };
            Ok(format!("{}\n", to_json(&view)?))
        }
        _ => Ok(TextFormatter::new(ctx.color).format_streak(current, longest, policy)),
    }
}

#[cfg(test)]
#[path = "streak_tests.rs"]
mod tests;
