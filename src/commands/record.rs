use std::path::Path;

use crate::cli::{AddArgs, Cli, RecordArgs};
use crate::counter::WordCounter;
use crate::output::svg::format_thousands;
use crate::snapshot::{DailySnapshot, format_iso_date};
use crate::state::SaveOutcome;
use crate::store::UpsertOutcome;
use crate::{InkstreakError, Result};

use super::context::CommandContext;

/// `inkstreak record <FILE>`
///
/// # Errors
/// Returns an error if the file cannot be counted or the log cannot be saved.
pub fn run_record(args: &RecordArgs, cli: &Cli) -> Result<()> {
    let ctx = CommandContext::from_cli(cli, &args.store, None)?;
    let message = record_file(args, &ctx)?;
    ctx.emit(&message);
    Ok(())
}

/// `inkstreak add --entity ID --words N`
///
/// # Errors
/// Returns an error if the snapshot is invalid or the log cannot be saved.
pub fn run_add(args: &AddArgs, cli: &Cli) -> Result<()> {
    let ctx = CommandContext::from_cli(cli, &args.store, None)?;
    let message = add_count(args, &ctx)?;
    ctx.emit(&message);
    Ok(())
}

pub(crate) fn record_file(args: &RecordArgs, ctx: &CommandContext) -> Result<String> {
    let counter_config = &ctx.config.counter;
    if !counter_config.accepts(&args.file) {
        return Err(InkstreakError::Config(format!(
            "{} is not a tracked file type (tracked extensions: {})",
            args.file.display(),
            counter_config.extensions.join(", ")
        )));
    }

    let words = WordCounter::new().count_file(&args.file)?;
    let entity = match &args.entity {
        Some(entity) => entity.clone(),
        None => entity_from_path(&args.file)?,
    };
    log::info!("counted {words} words in {}", args.file.display());

    let snapshot = DailySnapshot::new(args.date.unwrap_or(ctx.today), entity, words)?;
    store_snapshot(snapshot, ctx)
}

pub(crate) fn add_count(args: &AddArgs, ctx: &CommandContext) -> Result<String> {
    let snapshot =
        DailySnapshot::new(args.date.unwrap_or(ctx.today), args.entity.as_str(), args.words)?;
    store_snapshot(snapshot, ctx)
}

/// Entity id derived from the file name, e.g. `chapter-1.md` -> `chapter-1`.
fn entity_from_path(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.trim().is_empty())
        .ok_or_else(|| InkstreakError::InvalidSnapshot {
            field: "entity_id",
            value: path.display().to_string(),
            reason: "cannot derive an entity id from the file name; pass --entity".to_string(),
        })
}

fn store_snapshot(snapshot: DailySnapshot, ctx: &CommandContext) -> Result<String> {
    ctx.ensure_retained(&snapshot)?;
    let mut log = ctx.load_log()?;
    let outcome = log.upsert(snapshot.clone());

    if outcome != UpsertOutcome::Unchanged && ctx.save_log(&mut log)? == SaveOutcome::Skipped {
        return Ok(String::new());
    }
    Ok(describe_upsert(&snapshot, outcome))
}

fn describe_upsert(snapshot: &DailySnapshot, outcome: UpsertOutcome) -> String {
    let entity = snapshot.entity_id();
    let date = format_iso_date(snapshot.date());
    let words = snapshot.word_count();

    match outcome {
        UpsertOutcome::Inserted => {
            format!("Recorded {} words for {entity} on {date}\n", format_thousands(words))
        }
        UpsertOutcome::Updated { previous } => {
            let change = i128::from(words) - i128::from(previous);
            format!(
                "Updated {entity} on {date}: {} -> {} words ({change:+})\n",
                format_thousands(previous),
                format_thousands(words)
            )
        }
        UpsertOutcome::Unchanged => {
            format!("{entity} on {date} unchanged at {} words\n", format_thousands(words))
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
