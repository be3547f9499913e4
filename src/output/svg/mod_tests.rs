use super::*;
use crate::stats::test_support::{date, snap};
use crate::stats::{build_cumulative, build_heatmap};

#[test]
fn charts_compose_into_standalone_documents() {
    let snapshots = [snap("2024-02-01", "ch-1", 300), snap("2024-02-02", "ch-1", 900)];
    let cells = build_heatmap(&snapshots, date("2024-02-02"));
    let points = build_cumulative(&snapshots);

    for svg in [
        HeatmapCalendar::new(&cells).render(),
        CumulativeLineChart::from_points(&points).render(),
    ] {
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.ends_with("</svg>"));
    }
}

#[test]
fn level_palette_is_distinct() {
    use crate::stats::HeatmapLevel;

    let colors: Vec<String> = [
        HeatmapLevel::None,
        HeatmapLevel::Low,
        HeatmapLevel::Medium,
        HeatmapLevel::High,
        HeatmapLevel::Peak,
    ]
    .into_iter()
    .map(|level| level_color(level).to_css())
    .collect();

    let mut unique = colors.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), colors.len());
}
