use crate::Result;
use crate::cli::{Cli, HeatmapArgs};
use crate::output::svg::{HeatmapCalendar, SvgElement};
use crate::output::{OutputFormat, TextFormatter, to_json};
use crate::stats::{HeatmapWindow, build_heatmap_in};

use super::context::CommandContext;

const SUPPORTED_FORMATS: &[OutputFormat] =
    &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Svg];

/// `inkstreak heatmap`
///
/// # Errors
/// Returns an error for unsupported formats or an unreadable log.
pub fn run_heatmap(args: &HeatmapArgs, cli: &Cli) -> Result<()> {
    args.format.ensure_supported("heatmap", SUPPORTED_FORMATS)?;
    let ctx = CommandContext::from_cli(cli, &args.store, args.today)?;
    let output = heatmap_output(args.format, &ctx)?;
    ctx.emit(&output);
    Ok(())
}

pub(crate) fn heatmap_output(format: OutputFormat, ctx: &CommandContext) -> Result<String> {
    let totals = ctx.daily_totals()?;
    let cells = build_heatmap_in(&totals, HeatmapWindow::for_today(ctx.today));

    match format {
        OutputFormat::Json => Ok(format!("{}\n", to_json(&cells)?)),
        OutputFormat::Svg => Ok(format!("{}\n", HeatmapCalendar::new(&cells).render())),
        _ => Ok(TextFormatter::new(ctx.color).format_heatmap(&cells, ctx.today)),
    }
}

#[cfg(test)]
#[path = "heatmap_tests.rs"]
mod tests;
