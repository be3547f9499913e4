//! Chart data model.

use chrono::NaiveDate;

/// One plotted day.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub value: f64,
    /// Change from the previous plotted day.
    pub delta: i64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64, delta: i64) -> Self {
        Self { date, value, delta }
    }

    /// Short axis label, e.g. `03/14`.
    #[must_use]
    pub fn short_label(&self) -> String {
        self.date.format("%m/%d").to_string()
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
