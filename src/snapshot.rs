//! Daily word-count snapshots: the only input the statistics engine consumes.
//!
//! A snapshot records the *absolute* word count of one writable entity
//! (chapter or document) as of the last save on a calendar day. Dates are
//! plain calendar dates in the caller's local calendar; nothing here converts
//! between timezones.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{InkstreakError, Result};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// # Errors
/// Returns `InvalidDate` for anything that is not a zero-padded ISO date or
/// does not name a real calendar day (e.g. `2023-02-29`).
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_formed {
        return Err(InkstreakError::InvalidDate {
            value: value.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|_| InkstreakError::InvalidDate {
        value: value.to_string(),
    })
}

#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Largest word count a snapshot can store (the log writes signed integers).
pub const MAX_WORD_COUNT: u64 = i64::MAX.unsigned_abs();

/// Absolute word count of one entity on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot", into = "RawSnapshot")]
pub struct DailySnapshot {
    date: NaiveDate,
    entity_id: String,
    word_count: u64,
}

impl DailySnapshot {
    /// Create a snapshot from already-typed parts.
    ///
    /// # Errors
    /// Returns `InvalidSnapshot` if `entity_id` is blank or `word_count`
    /// exceeds [`MAX_WORD_COUNT`].
    pub fn new(date: NaiveDate, entity_id: impl Into<String>, word_count: u64) -> Result<Self> {
        let entity_id = entity_id.into();
        if entity_id.trim().is_empty() {
            return Err(InkstreakError::InvalidSnapshot {
                field: "entity_id",
                value: entity_id,
                reason: "entity id cannot be empty".to_string(),
            });
        }
        if word_count > MAX_WORD_COUNT {
            return Err(InkstreakError::InvalidSnapshot {
                field: "word_count",
                value: word_count.to_string(),
                reason: format!("word count cannot exceed {MAX_WORD_COUNT}"),
            });
        }
        Ok(Self {
            date,
            entity_id,
            word_count,
        })
    }

    /// Validate a loosely-typed row coming from outside the crate.
    ///
    /// # Errors
    /// Returns an error for a malformed date, a blank entity id or a negative
    /// word count.
    pub fn parse(date: &str, entity_id: &str, word_count: i64) -> Result<Self> {
        let date = parse_iso_date(date)?;
        let word_count = u64::try_from(word_count).map_err(|_| InkstreakError::InvalidSnapshot {
            field: "word_count",
            value: word_count.to_string(),
            reason: "word count cannot be negative".to_string(),
        })?;
        Self::new(date, entity_id, word_count)
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    #[must_use]
    pub const fn word_count(&self) -> u64 {
        self.word_count
    }
}

/// Wire shape of a snapshot row.
#[derive(Debug, Serialize, Deserialize)]
struct RawSnapshot {
    date: String,
    #[serde(alias = "owner_entity_id", alias = "document_id", alias = "chapter_id")]
    entity_id: String,
    word_count: i64,
}

impl TryFrom<RawSnapshot> for DailySnapshot {
    type Error = InkstreakError;

    fn try_from(raw: RawSnapshot) -> Result<Self> {
        Self::parse(&raw.date, &raw.entity_id, raw.word_count)
    }
}

impl From<DailySnapshot> for RawSnapshot {
    fn from(snapshot: DailySnapshot) -> Self {
        Self {
            date: format_iso_date(snapshot.date),
            entity_id: snapshot.entity_id,
            // `DailySnapshot::new` caps counts at MAX_WORD_COUNT.
            word_count: i64::try_from(snapshot.word_count).unwrap_or(i64::MAX),
        }
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
