//! Week-column layout shared by the text strip and the SVG calendar.
//!
//! Weeks start on Monday; row 0 is Monday and row 6 is Sunday.

use chrono::{Datelike, Days, NaiveDate};

use crate::stats::HeatmapCell;

pub type Week<'a> = [Option<&'a HeatmapCell>; 7];

#[derive(Debug)]
pub struct CalendarGrid<'a> {
    first_monday: Option<NaiveDate>,
    weeks: Vec<Week<'a>>,
}

impl<'a> CalendarGrid<'a> {
    /// Lay out date-ordered cells into week columns.
    #[must_use]
    pub fn new(cells: &'a [HeatmapCell]) -> Self {
        let Some(first) = cells.first() else {
            return Self {
                first_monday: None,
                weeks: Vec::new(),
            };
        };

        let back = u64::from(first.date.weekday().num_days_from_monday());
        let first_monday = first.date - Days::new(back);
        let mut weeks: Vec<Week<'a>> = Vec::new();

        for cell in cells {
            let Ok(offset) = usize::try_from((cell.date - first_monday).num_days()) else {
                continue;
            };
            let (week, row) = (offset / 7, offset % 7);
            if weeks.len() <= week {
                weeks.resize(week + 1, [None; 7]);
            }
            weeks[week][row] = Some(cell);
        }

        Self {
            first_monday: Some(first_monday),
            weeks,
        }
    }

    #[must_use]
    pub fn weeks(&self) -> &[Week<'a>] {
        &self.weeks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Month abbreviation for columns where a month begins (and the first
    /// column), e.g. `(0, "Jul")`.
    #[must_use]
    pub fn month_labels(&self) -> Vec<(usize, String)> {
        let Some(first_monday) = self.first_monday else {
            return Vec::new();
        };

        let mut labels = Vec::new();
        for (idx, week) in self.weeks.iter().enumerate() {
            let month_start = week.iter().flatten().find(|cell| cell.date.day() == 1);
            if let Some(cell) = month_start {
                labels.push((idx, cell.date.format("%b").to_string()));
            } else if idx == 0 {
                let date = week
                    .iter()
                    .flatten()
                    .next()
                    .map_or(first_monday, |cell| cell.date);
                labels.push((idx, date.format("%b").to_string()));
            }
        }
        labels
    }
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
