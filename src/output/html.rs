use std::fmt::Write;

use crate::error::Result;
use crate::snapshot::format_iso_date;
use crate::stats::WritingReport;

use super::ReportFormatter;
use super::html_template::{HTML_FOOTER, HTML_HEADER};
use super::svg::{CumulativeLineChart, HeatmapCalendar, SvgElement, format_thousands, html_escape};

/// Self-contained HTML page with summary cards and embedded SVG charts.
#[derive(Debug, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_card(output: &mut String, class: &str, value: &str, label: &str) {
        let _ = writeln!(
            output,
            r#"            <div class="summary-card {class}"><span class="value">{}</span><div class="label">{}</div></div>"#,
            html_escape(value),
            html_escape(label)
        );
    }

    fn write_chart(output: &mut String, title: &str, svg: &str) {
        let _ = writeln!(output, r#"        <div class="chart-container">"#);
        let _ = writeln!(output, "            <h3>{}</h3>", html_escape(title));
        for line in svg.lines() {
            let _ = writeln!(output, "            {line}");
        }
        let _ = writeln!(output, "        </div>");
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &WritingReport) -> Result<String> {
        let mut output = String::from(HTML_HEADER);

        let _ = writeln!(
            output,
            "        <h1>Writing Report <small>{}</small></h1>",
            format_iso_date(report.today)
        );

        if report.is_empty() {
            output.push_str("        <div class=\"empty\">No writing recorded yet.</div>\n");
            output.push_str(HTML_FOOTER);
            return Ok(output);
        }

        output.push_str("        <div class=\"summary-grid\">\n");
        Self::write_card(
            &mut output,
            "today",
            &format_thousands(report.today_total),
            "Words today",
        );
        Self::write_card(
            &mut output,
            "change",
            &format!("{:+}", report.today_change),
            "Change today",
        );
        Self::write_card(
            &mut output,
            "streak",
            &report.current_streak.to_string(),
            "Current streak",
        );
        Self::write_card(
            &mut output,
            "longest",
            &report.longest_streak.to_string(),
            "Longest streak",
        );
        Self::write_card(
            &mut output,
            "active",
            &report.active_days.to_string(),
            "Active days",
        );
        output.push_str("        </div>\n");

        Self::write_chart(
            &mut output,
            "Writing Activity",
            &HeatmapCalendar::new(&report.heatmap).render(),
        );
        Self::write_chart(
            &mut output,
            "Cumulative Words",
            &CumulativeLineChart::from_points(&report.cumulative).render(),
        );

        output.push_str(HTML_FOOTER);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
