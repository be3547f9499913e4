//! Per-invocation state shared by every command: effective config, project
//! root, snapshot log location and the reference day.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::cli::{Cli, ColorChoice, StoreArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult, validate_config_semantics};
use crate::output::{ColorMode, print_warning_full};
use crate::snapshot::{DailySnapshot, format_iso_date};
use crate::state::{SaveOutcome, discover_project_root, snapshot_log_path};
use crate::stats::{DailyTotals, aggregate_with};
use crate::store::SnapshotLog;
use crate::{InkstreakError, Result};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Today's date in the local calendar.
///
/// This is the only place the wall clock is read.
#[must_use]
pub(crate) fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Project root for the current working directory.
///
/// # Errors
/// Returns an error if the current directory cannot be determined.
pub(crate) fn resolve_project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(discover_project_root(&cwd))
}

/// Load and validate the effective configuration.
///
/// `--no-config` short-circuits to defaults; an explicit `config_path` wins
/// over discovery.
///
/// # Errors
/// Returns an error if a config file cannot be read, parsed or validated.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    no_config: bool,
    project_root: &Path,
) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::with_project_root(project_root.to_path_buf());
    let loaded = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    validate_config_semantics(&loaded.config)?;
    Ok(loaded)
}

/// Snapshot log location: `--log`, then `[store] path` (relative to the
/// project root), then the state directory.
#[must_use]
pub(crate) fn resolve_log_path(
    project_root: &Path,
    config: &Config,
    log_override: Option<&Path>,
) -> PathBuf {
    if let Some(path) = log_override {
        return path.to_path_buf();
    }
    match &config.store.path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => project_root.join(path),
        None => snapshot_log_path(project_root),
    }
}

#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub config_source: Option<PathBuf>,
    pub project_root: PathBuf,
    pub log_path: PathBuf,
    pub today: NaiveDate,
    pub color: ColorMode,
    pub quiet: bool,
}

impl CommandContext {
    /// Build the context from the global flags.
    ///
    /// # Errors
    /// Returns an error if the working directory or the config cannot be read.
    pub fn from_cli(cli: &Cli, store: &StoreArgs, today: Option<NaiveDate>) -> Result<Self> {
        let project_root = resolve_project_root()?;
        let loaded = load_config(None, cli.no_config, &project_root)?;
        let today = today.unwrap_or_else(local_today);

        let mut ctx = Self::new(loaded, project_root, store.log.as_deref(), today);
        ctx.color = color_choice_to_mode(cli.color);
        ctx.quiet = cli.quiet;
        log::debug!(
            "project root {}, log {}, today {today}",
            ctx.project_root.display(),
            ctx.log_path.display()
        );
        Ok(ctx)
    }

    #[must_use]
    pub fn new(
        loaded: LoadResult,
        project_root: PathBuf,
        log_override: Option<&Path>,
        today: NaiveDate,
    ) -> Self {
        let log_path = resolve_log_path(&project_root, &loaded.config, log_override);
        Self {
            config: loaded.config,
            config_source: loaded.source,
            project_root,
            log_path,
            today,
            color: ColorMode::Never,
            quiet: false,
        }
    }

    /// Read the snapshot log, empty when it does not exist yet.
    ///
    /// # Errors
    /// Returns an error if an existing log cannot be read or parsed.
    pub fn load_log(&self) -> Result<SnapshotLog> {
        SnapshotLog::load_or_default(&self.log_path)
    }

    /// Day totals of the stored log under the configured duplicate policy.
    ///
    /// # Errors
    /// Returns an error if an existing log cannot be read or parsed.
    pub fn daily_totals(&self) -> Result<DailyTotals> {
        let log = self.load_log()?;
        Ok(aggregate_with(&log.snapshots(), self.config.stats.duplicates))
    }

    /// Whether retention keeps a snapshot dated `date`.
    #[must_use]
    pub fn is_retained(&self, date: NaiveDate) -> bool {
        self.config
            .store
            .retention_cutoff(self.today)
            .is_none_or(|cutoff| date >= cutoff)
    }

    /// Reject a snapshot that retention would drop on the next save.
    ///
    /// # Errors
    /// Returns `InvalidSnapshot` if the snapshot is older than the window.
    pub fn ensure_retained(&self, snapshot: &DailySnapshot) -> Result<()> {
        if self.is_retained(snapshot.date()) {
            return Ok(());
        }
        let max_age_days = self.config.store.max_age_days.unwrap_or_default();
        Err(InkstreakError::InvalidSnapshot {
            field: "date",
            value: format_iso_date(snapshot.date()),
            reason: format!(
                "older than the retention window of {max_age_days} days (store.max_age_days)"
            ),
        })
    }

    /// Apply retention and persist the log.
    ///
    /// A lock timeout is reported as a warning and returned as
    /// `SaveOutcome::Skipped`.
    ///
    /// # Errors
    /// Returns an error if the log cannot be written.
    pub fn save_log(&self, log: &mut SnapshotLog) -> Result<SaveOutcome> {
        let dropped = log.apply_retention(&self.config.store, self.today);
        if dropped > 0 {
            log::info!("retention dropped {dropped} old snapshots");
        }

        let outcome = log.save(&self.log_path)?;
        if outcome == SaveOutcome::Skipped {
            print_warning_full(
                &format!("snapshot log not saved: {}", self.log_path.display()),
                Some("another inkstreak process held the lock"),
                Some("Re-run the command once the other process has finished"),
            );
        }
        Ok(outcome)
    }

    /// Print `content` unless `--quiet` is set.
    pub fn emit(&self, content: &str) {
        if !self.quiet {
            print!("{content}");
        }
    }
}

/// Write output to a file or stdout.
///
/// `quiet` only affects stdout; file writes always happen.
///
/// # Errors
/// Returns an error if the file or its parent directory cannot be created.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| InkstreakError::FileAccess {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| InkstreakError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("wrote {}", path.display());
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
