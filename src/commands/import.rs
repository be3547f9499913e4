use crate::Result;
use crate::cli::{Cli, ImportArgs};
use crate::state::SaveOutcome;
use crate::store::import_snapshots;

use super::context::CommandContext;

/// `inkstreak import <FILE>`
///
/// # Errors
/// Returns an error if the file is not a valid snapshot array or the log
/// cannot be saved.
pub fn run_import(args: &ImportArgs, cli: &Cli) -> Result<()> {
    let ctx = CommandContext::from_cli(cli, &args.store, None)?;
    let message = import_file(args, &ctx)?;
    ctx.emit(&message);
    Ok(())
}

pub(crate) fn import_file(args: &ImportArgs, ctx: &CommandContext) -> Result<String> {
    let rows = import_snapshots(&args.file)?;
    let total = rows.len();
    let (kept, expired): (Vec<_>, Vec<_>) =
        rows.into_iter().partition(|s| ctx.is_retained(s.date()));
    if !expired.is_empty() {
        log::warn!("skipping {} snapshots older than the retention window", expired.len());
    }

    let mut log = ctx.load_log()?;
    let changed = log.extend(kept);
    if changed > 0 && ctx.save_log(&mut log)? == SaveOutcome::Skipped {
        return Ok(String::new());
    }

    let mut message = format!(
        "Imported {total} snapshots from {} ({changed} new or updated",
        args.file.display()
    );
    if !expired.is_empty() {
        message.push_str(&format!(
            ", {} older than the retention window skipped",
            expired.len()
        ));
    }
    message.push_str(")\n");
    Ok(message)
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
