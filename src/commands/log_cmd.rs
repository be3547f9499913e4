use std::cmp::Reverse;

use crate::Result;
use crate::cli::{Cli, LogArgs};
use crate::output::{OutputFormat, TextFormatter, to_json};
use crate::snapshot::DailySnapshot;

use super::context::CommandContext;

const SUPPORTED_FORMATS: &[OutputFormat] = &[OutputFormat::Text, OutputFormat::Json];

/// `inkstreak log`
///
/// # Errors
/// Returns an error for unsupported formats or an unreadable log.
pub fn run_log(args: &LogArgs, cli: &Cli) -> Result<()> {
    args.format.ensure_supported("log", SUPPORTED_FORMATS)?;
    let ctx = CommandContext::from_cli(cli, &args.store, None)?;
    let output = list_snapshots(args, &ctx)?;
    ctx.emit(&output);
    Ok(())
}

pub(crate) fn list_snapshots(args: &LogArgs, ctx: &CommandContext) -> Result<String> {
    let log = ctx.load_log()?;

    let mut rows: Vec<DailySnapshot> = log
        .iter()
        .filter(|s| args.entity.as_deref().is_none_or(|id| s.entity_id() == id))
        .filter(|s| args.from.is_none_or(|from| s.date() >= from))
        .filter(|s| args.to.is_none_or(|to| s.date() <= to))
        .cloned()
        .collect();
    rows.sort_by(|a, b| {
        Reverse(a.date())
            .cmp(&Reverse(b.date()))
            .then_with(|| a.entity_id().cmp(b.entity_id()))
    });
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }

    match args.format {
        OutputFormat::Json => Ok(format!("{}\n", to_json(&rows)?)),
        _ => Ok(TextFormatter::new(ctx.color).format_log(&rows)),
    }
}

#[cfg(test)]
#[path = "log_cmd_tests.rs"]
mod tests;
