use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::snapshot::DailySnapshot;

/// How rows sharing an `(entity, date)` key are combined.
///
/// Storage normally guarantees one row per key; the policy only matters when
/// that guarantee was broken upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Every row contributes to the day total.
    #[default]
    Sum,
    /// The last row seen for a key replaces earlier ones.
    #[serde(alias = "last-wins", alias = "last_wins")]
    Last,
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sum => write!(f, "sum"),
            Self::Last => write!(f, "last"),
        }
    }
}

/// Total word count per calendar day across all entities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyTotals {
    totals: BTreeMap<NaiveDate, u64>,
}

impl DailyTotals {
    /// Total for `date`, or 0 when nothing was recorded that day.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> u64 {
        self.totals.get(&date).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.totals.contains_key(&date)
    }

    /// Days in chronological order.
    pub fn ascending(&self) -> impl DoubleEndedIterator<Item = (NaiveDate, u64)> + '_ {
        self.totals.iter().map(|(date, total)| (*date, *total))
    }

    /// Days newest first.
    pub fn descending(&self) -> impl Iterator<Item = (NaiveDate, u64)> + '_ {
        self.ascending().rev()
    }

    /// Newest recorded day and its total.
    #[must_use]
    pub fn latest(&self) -> Option<(NaiveDate, u64)> {
        self.ascending().next_back()
    }

    /// Newest recorded day strictly before `date`.
    #[must_use]
    pub fn latest_before(&self, date: NaiveDate) -> Option<(NaiveDate, u64)> {
        self.totals
            .range(..date)
            .next_back()
            .map(|(day, total)| (*day, *total))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

impl FromIterator<(NaiveDate, u64)> for DailyTotals {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, u64)>>(iter: I) -> Self {
        let mut totals = BTreeMap::new();
        for (date, words) in iter {
            let entry: &mut u64 = totals.entry(date).or_default();
            *entry = entry.saturating_add(words);
        }
        Self { totals }
    }
}

/// Sum every snapshot's word count into its day, regardless of entity.
#[must_use]
pub fn aggregate(snapshots: &[DailySnapshot]) -> DailyTotals {
    aggregate_with(snapshots, DuplicatePolicy::Sum)
}

/// Aggregate with an explicit policy for duplicate `(entity, date)` rows.
#[must_use]
pub fn aggregate_with(snapshots: &[DailySnapshot], policy: DuplicatePolicy) -> DailyTotals {
    match policy {
        DuplicatePolicy::Sum => snapshots
            .iter()
            .map(|s| (s.date(), s.word_count()))
            .collect(),
        DuplicatePolicy::Last => {
            let mut latest: HashMap<(&str, NaiveDate), u64> = HashMap::new();
            for snapshot in snapshots {
                latest.insert(
                    (snapshot.entity_id(), snapshot.date()),
                    snapshot.word_count(),
                );
            }
            latest
                .into_iter()
                .map(|((_, date), words)| (date, words))
                .collect()
        }
    }
}

/// A day total as a signed value for delta arithmetic, saturating at `i64::MAX`.
#[must_use]
pub(crate) fn signed_total(total: u64) -> i64 {
    i64::try_from(total).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
