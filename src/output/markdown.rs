use std::fmt::Write;

use crate::config::DEFAULT_RECENT_POINTS;
use crate::error::Result;
use crate::snapshot::format_iso_date;
use crate::stats::WritingReport;

use super::ReportFormatter;
use super::svg::format_thousands;

pub struct MarkdownFormatter {
    recent_points: usize,
}

impl MarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recent_points: DEFAULT_RECENT_POINTS,
        }
    }

    #[must_use]
    pub const fn with_recent_points(mut self, n: usize) -> Self {
        self.recent_points = n;
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &WritingReport) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(output, "## Writing Report ({})\n", format_iso_date(report.today));

        if report.is_empty() {
            output.push_str("No writing recorded yet.\n");
            return Ok(output);
        }

        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|------:|\n");
        let _ = writeln!(
            output,
            "| Words today | {} |",
            format_thousands(report.today_total)
        );
        let _ = writeln!(output, "| Change today | {:+} |", report.today_change);
        let _ = writeln!(
            output,
            "| Current streak | {} (policy: {}) |",
            report.current_streak, report.streak_policy
        );
        let _ = writeln!(output, "| Longest streak | {} |", report.longest_streak);
        let _ = writeln!(output, "| Active days | {} |", report.active_days);
        let _ = writeln!(output, "| Snapshots | {} |", report.total_snapshots);
        let _ = writeln!(output, "| Entities | {} |", report.entities);

        let recent = report.recent_points(self.recent_points);
        if !recent.is_empty() {
            output.push_str("\n### Recent Days\n\n");
            output.push_str("| Date | Total | Change |\n");
            output.push_str("|------|------:|-------:|\n");
            for point in recent.iter().rev() {
                let _ = writeln!(
                    output,
                    "| {} | {} | {:+} |",
                    format_iso_date(point.date),
                    format_thousands(point.cumulative),
                    point.daily
                );
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
