use serde::Serialize;

use crate::Result;
use crate::cli::{Cli, TodayArgs};
use crate::output::{OutputFormat, TextFormatter, to_json};
use crate::snapshot::format_iso_date;
use crate::stats::today_word_change_from;

use super::context::CommandContext;

const SUPPORTED_FORMATS: &[OutputFormat] = &[OutputFormat::Text, OutputFormat::Json];

#[derive(Debug, Serialize)]
struct TodayView {
    date: String,
    total: u64,
    change: i64,
}

/// `inkstreak today`
///
/// # Errors
/// Returns an error for unsupported formats or an unreadable log.
pub fn run_today(args: &TodayArgs, cli: &Cli) -> Result<()> {
    args.format.ensure_supported("today", SUPPORTED_FORMATS)?;
    let ctx = CommandContext::from_cli(cli, &args.store, args.today)?;
    let output = today_output(args.format, &ctx)?;
    ctx.emit(&output);
    Ok(())
}

pub(crate) fn today_output(format: OutputFormat, ctx: &CommandContext) -> Result<String> {
    let totals = ctx.daily_totals()?;
    let total = totals.get(ctx.today);
    let change = today_word_change_from(&totals, ctx.today);

    match format {
        OutputFormat::Json => {
            let view = TodayView {
                date: format_iso_date(ctx.today),
                total,
                change,
            };
            Ok(format!("{}\n", to_json(&view)?))
        }
        _ => Ok(TextFormatter::new(ctx.color).format_today(ctx.today, total, change)),
    }
}

#[cfg(test)]
#[path = "today_tests.rs"]
mod tests;
