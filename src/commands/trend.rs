use crate::Result;
use crate::cli::{Cli, TrendArgs};
use crate::output::svg::{CumulativeLineChart, SvgElement};
use crate::output::{OutputFormat, TextFormatter, to_json};
use crate::stats::build_cumulative_from;

use super::context::CommandContext;

const SUPPORTED_FORMATS: &[OutputFormat] =
    &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Svg];

/// `inkstreak trend`
///
/// # Errors
/// Returns an error for unsupported formats or an unreadable log.
pub fn run_trend(args: &TrendArgs, cli: &Cli) -> Result<()> {
    args.format.ensure_supported("trend", SUPPORTED_FORMATS)?;
    let ctx = CommandContext::from_cli(cli, &args.store, None)?;
    let output = trend_output(args.format, &ctx)?;
    ctx.emit(&output);
    Ok(())
}

pub(crate) fn trend_output(format: OutputFormat, ctx: &CommandContext) -> Result<String> {
    let points = build_cumulative_from(&ctx.daily_totals()?);

    match format {
        OutputFormat::Json => Ok(format!("{}\n", to_json(&points)?)),
        OutputFormat::Svg => Ok(format!(
            "{}\n",
            CumulativeLineChart::from_points(&points).render()
        )),
        _ => Ok(TextFormatter::new(ctx.color).format_trend(&points)),
    }
}

#[cfg(test)]
#[path = "trend_tests.rs"]
mod tests;
