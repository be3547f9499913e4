//! Persistent snapshot log.
//!
//! Snapshots are kept unique per `(entity_id, date)` in insertion order and
//! stored as JSON in the state directory.

mod import;

use std::fs;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::snapshot::DailySnapshot;
use crate::state::{
    DEFAULT_LOCK_TIMEOUT_MS, SaveOutcome, SharedLockGuard, atomic_write_with_lock,
};
use crate::{InkstreakError, Result};

pub use import::import_snapshots;

const LOG_VERSION: u32 = 1;

/// What [`SnapshotLog::upsert`] did with a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    /// Replaced the count stored for the same entity and day.
    Updated { previous: u64 },
    Unchanged,
}

type SnapshotKey = (String, NaiveDate);

/// Snapshot log with one row per entity per day.
///
/// File format:
/// ```json
/// {
///   "version": 1,
///   "snapshots": [
///     { "date": "2024-01-15", "entity_id": "chapter-1", "word_count": 1200 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LogFile", into = "LogFile")]
pub struct SnapshotLog {
    rows: IndexMap<SnapshotKey, DailySnapshot>,
}

impl SnapshotLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the snapshot for its `(entity_id, date)`.
    pub fn upsert(&mut self, snapshot: DailySnapshot) -> UpsertOutcome {
        let key = (snapshot.entity_id().to_string(), snapshot.date());
        let outcome = match self.rows.get(&key) {
            None => UpsertOutcome::Inserted,
            Some(existing) if existing.word_count() == snapshot.word_count() => {
                UpsertOutcome::Unchanged
            }
            Some(existing) => UpsertOutcome::Updated {
                previous: existing.word_count(),
            },
        };

        log::debug!(
            "upsert {} on {}: {outcome:?}",
            snapshot.entity_id(),
            snapshot.date()
        );

        if outcome != UpsertOutcome::Unchanged {
            self.rows.insert(key, snapshot);
        }
        outcome
    }

    /// Upsert many snapshots, returning how many were inserted or updated.
    pub fn extend<I: IntoIterator<Item = DailySnapshot>>(&mut self, snapshots: I) -> usize {
        snapshots
            .into_iter()
            .map(|s| self.upsert(s))
            .filter(|outcome| *outcome != UpsertOutcome::Unchanged)
            .count()
    }

    /// All snapshots in insertion order.
    #[must_use]
    pub fn snapshots(&self) -> Vec<DailySnapshot> {
        self.rows.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailySnapshot> {
        self.rows.values()
    }

    /// Snapshots dated within `start..=end`.
    #[must_use]
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> Vec<DailySnapshot> {
        self.iter()
            .filter(|s| (start..=end).contains(&s.date()))
            .cloned()
            .collect()
    }

    /// Snapshots belonging to one entity.
    #[must_use]
    pub fn for_entity(&self, entity_id: &str) -> Vec<DailySnapshot> {
        self.iter()
            .filter(|s| s.entity_id() == entity_id)
            .cloned()
            .collect()
    }

    /// Distinct entity ids, sorted.
    #[must_use]
    pub fn entities(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.iter().map(DailySnapshot::entity_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop snapshots older than `max_age_days` before `today`.
    ///
    /// Returns the number of snapshots removed.
    pub fn apply_retention(&mut self, config: &StoreConfig, today: NaiveDate) -> usize {
        let Some(cutoff) = config.retention_cutoff(today) else {
            return 0;
        };

        let original_count = self.rows.len();
        self.rows.retain(|_, s| s.date() >= cutoff);
        original_count - self.rows.len()
    }

    /// Load the log from a JSON file.
    ///
    /// Acquires a shared lock before reading.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|e| InkstreakError::FileAccess {
            path: path.to_path_buf(),
            source: e,
        })?;

        let _lock_guard =
            SharedLockGuard::try_acquire(path, DEFAULT_LOCK_TIMEOUT_MS, "snapshot log");

        let log: Self = serde_json::from_reader(BufReader::new(&file))?;
        log::debug!("loaded {} snapshots from {}", log.len(), path.display());
        Ok(log)
    }

    /// Load the log if the file exists, otherwise return an empty log.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be read or parsed. A
    /// corrupt log is never silently replaced.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no snapshot log at {}, starting empty", path.display());
            Ok(Self::default())
        }
    }

    /// Save the log using the atomic write pattern.
    ///
    /// Returns `SaveOutcome::Skipped` if another process holds the lock.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    #[must_use = "check if save was skipped due to lock timeout"]
    pub fn save(&self, path: &Path) -> Result<SaveOutcome> {
        let json = serde_json::to_string_pretty(self)?;
        atomic_write_with_lock(path, json.as_bytes(), "snapshot log")
    }
}

impl FromIterator<DailySnapshot> for SnapshotLog {
    fn from_iter<I: IntoIterator<Item = DailySnapshot>>(iter: I) -> Self {
        let mut log = Self::new();
        log.extend(iter);
        log
    }
}

/// On-disk shape of the log.
#[derive(Debug, Serialize, Deserialize)]
struct LogFile {
    version: u32,
    #[serde(default)]
    snapshots: Vec<DailySnapshot>,
}

impl TryFrom<LogFile> for SnapshotLog {
    type Error = InkstreakError;

    fn try_from(file: LogFile) -> Result<Self> {
        if file.version != LOG_VERSION {
            return Err(InkstreakError::Config(format!(
                "unsupported snapshot log version {} (expected {LOG_VERSION})",
                file.version
            )));
        }
        Ok(file.snapshots.into_iter().collect())
    }
}

impl From<SnapshotLog> for LogFile {
    fn from(log: SnapshotLog) -> Self {
        Self {
            version: LOG_VERSION,
            snapshots: log.rows.into_values().collect(),
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
