use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::stats::{DuplicatePolicy, StreakPolicy};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Default number of trend rows shown by text and markdown output.
pub const DEFAULT_RECENT_POINTS: usize = 14;

/// Root of `.inkstreak.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub stats: StatsConfig,

    #[serde(default)]
    pub counter: CounterConfig,
}

/// Snapshot log location and retention `[store]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Log file path, relative to the project root. Defaults to the state
    /// directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Drop snapshots older than this many days on save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age_days: Option<u32>,
}

impl StoreConfig {
    /// Oldest date kept by retention, relative to `today`.
    ///
    /// `None` when retention is off or the window reaches past the
    /// earliest representable date.
    #[must_use]
    pub fn retention_cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        let max_age_days = self.max_age_days?;
        today.checked_sub_days(Days::new(u64::from(max_age_days)))
    }
}

/// How statistics are derived `[stats]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsConfig {
    #[serde(default)]
    pub streak_policy: StreakPolicy,

    /// How several snapshots of one entity on one day are combined.
    #[serde(default)]
    pub duplicates: DuplicatePolicy,

    #[serde(default = "default_recent_points")]
    pub recent_points: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            streak_policy: StreakPolicy::default(),
            duplicates: DuplicatePolicy::default(),
            recent_points: DEFAULT_RECENT_POINTS,
        }
    }
}

/// Files accepted by `record` `[counter]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CounterConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl CounterConfig {
    /// Whether `path` has one of the configured extensions (case-insensitive).
    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }
}

const fn default_recent_points() -> usize {
    DEFAULT_RECENT_POINTS
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "txt".to_string()]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
