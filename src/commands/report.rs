use crate::Result;
use crate::cli::{Cli, ReportArgs};
use crate::output::{
    HtmlFormatter, JsonFormatter, MarkdownFormatter, OutputFormat, ReportFormatter,
    TextFormatter,
};
use crate::stats::WritingReport;

use super::context::{CommandContext, write_output};

const SUPPORTED_FORMATS: &[OutputFormat] = &[
    OutputFormat::Text,
    OutputFormat::Json,
    OutputFormat::Markdown,
    OutputFormat::Html,
];

/// `inkstreak report`
///
/// # Errors
/// Returns an error for unsupported formats, an unreadable log, or an
/// unwritable output file.
pub fn run_report(args: &ReportArgs, cli: &Cli) -> Result<()> {
    args.format.ensure_supported("report", SUPPORTED_FORMATS)?;
    let ctx = CommandContext::from_cli(cli, &args.store, args.today)?;
    let output = render_report(args.format, &ctx)?;
    write_output(args.output.as_deref(), &output, ctx.quiet)
}

pub(crate) fn render_report(format: OutputFormat, ctx: &CommandContext) -> Result<String> {
    let log = ctx.load_log()?;
    let report = WritingReport::build(&log.snapshots(), ctx.today, &ctx.config.stats);
    let recent_points = ctx.config.stats.recent_points;

    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Markdown => {
            Box::new(MarkdownFormatter::new().with_recent_points(recent_points))
        }
        OutputFormat::Html => Box::new(HtmlFormatter::new()),
        _ => Box::new(TextFormatter::new(ctx.color).with_recent_points(recent_points)),
    };

    let mut output = formatter.format(&report)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
