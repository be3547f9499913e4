use std::fmt::Write;

use chrono::{Days, NaiveDate};

use super::calendar::CalendarGrid;
use super::svg::format_thousands;
use super::{ColorMode, ReportFormatter, ansi};
use crate::config::DEFAULT_RECENT_POINTS;
use crate::error::Result;
use crate::snapshot::{DailySnapshot, format_iso_date};
use crate::stats::{CumulativePoint, HeatmapCell, HeatmapLevel, StreakPolicy, WritingReport};

/// Weeks shown by the terminal heatmap strip.
pub const TEXT_HEATMAP_WEEKS: u64 = 26;

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "", "Wed", "", "Fri", "", "Sun"];
const ROW_LABEL_WIDTH: usize = 5;

pub struct TextFormatter {
    use_colors: bool,
    recent_points: usize,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors_on_stdout(),
            recent_points: DEFAULT_RECENT_POINTS,
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            recent_points: DEFAULT_RECENT_POINTS,
        }
    }

    /// Number of trend rows shown in reports.
    #[must_use]
    pub const fn with_recent_points(mut self, n: usize) -> Self {
        self.recent_points = n;
        self
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, ansi::BOLD)
    }

    fn signed(&self, change: i64) -> String {
        let magnitude = format_thousands(change.unsigned_abs());
        match change.signum() {
            1 => self.paint(&format!("+{magnitude}"), ansi::GREEN),
            -1 => self.paint(&format!("-{magnitude}"), ansi::RED),
            _ => "0".to_string(),
        }
    }

    fn glyph(&self, level: HeatmapLevel) -> String {
        match level {
            HeatmapLevel::None => self.paint("·", ansi::DIM),
            HeatmapLevel::Low => self.paint("░", ansi::GREEN),
            HeatmapLevel::Medium => self.paint("▒", ansi::GREEN),
            HeatmapLevel::High => self.paint("▓", ansi::GREEN),
            HeatmapLevel::Peak if self.use_colors => {
                format!("{}{}█{}", ansi::BOLD, ansi::GREEN, ansi::RESET)
            }
            HeatmapLevel::Peak => "█".to_string(),
        }
    }

    /// Current and longest streak.
    #[must_use]
    pub fn format_streak(&self, current: u32, longest: u32, policy: StreakPolicy) -> String {
        let mut output = String::new();
        let current_text = self.paint(&plural(current.into(), "day"), ansi::YELLOW);
        let _ = writeln!(output, "Current streak: {current_text} (policy: {policy})");
        let _ = writeln!(output, "Longest streak: {}", plural(longest.into(), "day"));
        output
    }

    /// Today's total and change.
    #[must_use]
    pub fn format_today(&self, today: NaiveDate, total: u64, change: i64) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "Today ({})", format_iso_date(today));
        let _ = writeln!(output, "  Total   {} words", format_thousands(total));
        let _ = writeln!(output, "  Change  {}", self.signed(change));
        output
    }

    /// Compact weekly strip of the last 26 weeks up to `today`.
    #[must_use]
    pub fn format_heatmap(&self, cells: &[HeatmapCell], today: NaiveDate) -> String {
        let start = today - Days::new(TEXT_HEATMAP_WEEKS * 7 - 1);
        let visible: Vec<HeatmapCell> = cells
            .iter()
            .filter(|cell| cell.date >= start && cell.date <= today)
            .cloned()
            .collect();
        let grid = CalendarGrid::new(&visible);

        let mut output = String::new();
        if grid.is_empty() {
            output.push_str("(no days to show)\n");
            return output;
        }

        let mut months = vec![' '; grid.len() + ROW_LABEL_WIDTH];
        for (column, name) in grid.month_labels() {
            let at = column + ROW_LABEL_WIDTH;
            let end = at + name.chars().count();
            if end <= months.len() && months[at..end].iter().all(|c| *c == ' ') {
                for (offset, c) in name.chars().enumerate() {
                    months[at + offset] = c;
                }
            }
        }
        let _ = writeln!(output, "{}", months.iter().collect::<String>().trim_end());

        for (row, name) in WEEKDAY_NAMES.iter().enumerate() {
            let _ = write!(output, "{name:<ROW_LABEL_WIDTH$}");
            for week in grid.weeks() {
                match week[row] {
                    Some(cell) => output.push_str(&self.glyph(cell.level)),
                    None => output.push(' '),
                }
            }
            output.push('\n');
        }

        let legend: Vec<String> = [
            HeatmapLevel::None,
            HeatmapLevel::Low,
            HeatmapLevel::Medium,
            HeatmapLevel::High,
            HeatmapLevel::Peak,
        ]
        .into_iter()
        .map(|level| self.glyph(level))
        .collect();
        let _ = writeln!(
            output,
            "{:ROW_LABEL_WIDTH$}less {} more",
            "",
            legend.join(" ")
        );
        output
    }

    /// Trend rows: date, running total, change.
    #[must_use]
    pub fn format_trend(&self, points: &[CumulativePoint]) -> String {
        if points.is_empty() {
            return "No writing recorded yet.\n".to_string();
        }

        let totals: Vec<String> = points
            .iter()
            .map(|p| format_thousands(p.cumulative))
            .collect();
        let width = totals.iter().map(String::len).max().unwrap_or(0);

        let mut output = String::new();
        for (point, total) in points.iter().zip(&totals) {
            let _ = writeln!(
                output,
                "  {}  {total:>width$}  {}",
                format_iso_date(point.date),
                self.signed(point.daily)
            );
        }
        output
    }

    /// Stored snapshots, one per line in the given order.
    #[must_use]
    pub fn format_log(&self, snapshots: &[DailySnapshot]) -> String {
        if snapshots.is_empty() {
            return "No snapshots found.\n".to_string();
        }

        let entity_width = snapshots
            .iter()
            .map(|s| s.entity_id().chars().count())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for snapshot in snapshots {
            let _ = writeln!(
                output,
                "{}  {:<entity_width$}  {:>9}",
                format_iso_date(snapshot.date()),
                snapshot.entity_id(),
                format_thousands(snapshot.word_count())
            );
        }
        output
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &WritingReport) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "{}\n",
            self.bold(&format!("Writing report for {}", format_iso_date(report.today)))
        );

        if report.is_empty() {
            output.push_str("No writing recorded yet.\n");
            output.push_str("Run `inkstreak record <FILE>` to start tracking.\n");
            return Ok(output);
        }

        let _ = writeln!(
            output,
            "  Today        {} words ({})",
            format_thousands(report.today_total),
            self.signed(report.today_change)
        );
        let _ = writeln!(
            output,
            "  Streak       {} (policy: {})",
            self.paint(&plural(report.current_streak.into(), "day"), ansi::YELLOW),
            report.streak_policy
        );
        let _ = writeln!(
            output,
            "  Longest      {}",
            plural(report.longest_streak.into(), "day")
        );
        let _ = writeln!(output, "  Active days  {}", report.active_days);
        let _ = writeln!(
            output,
            "  Snapshots    {} across {}",
            report.total_snapshots,
            plural(u64::try_from(report.entities).unwrap_or_default(), "entity")
        );

        let _ = writeln!(output, "\n{}", self.bold("Activity"));
        output.push_str(&self.format_heatmap(&report.heatmap, report.today));

        let _ = writeln!(output, "\n{}", self.bold("Recent days"));
        output.push_str(&self.format_trend(report.recent_points(self.recent_points)));

        Ok(output)
    }
}

fn plural(n: u64, unit: &str) -> String {
    match (n, unit) {
        (1, _) => format!("1 {unit}"),
        (_, "entity") => format!("{n} entities"),
        _ => format!("{n} {unit}s"),
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
