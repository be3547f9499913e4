use super::*;

#[test]
fn hex_renders_as_is() {
    assert_eq!(ChartColor::hex("#216e39").to_css(), "#216e39");
}

#[test]
fn themed_renders_var_with_fallback() {
    assert_eq!(
        ChartColor::themed("level-1", "#9be9a8").to_css(),
        "var(--color-level-1, #9be9a8)"
    );
}

#[test]
fn named_palette_colors() {
    assert!(ChartColor::muted().to_css().starts_with("var(--color-text-muted"));
    assert!(ChartColor::border().to_css().starts_with("var(--color-border"));
    assert!(ChartColor::primary().to_css().starts_with("var(--color-chart-primary"));
}

#[test]
fn text_anchor_display() {
    assert_eq!(TextAnchor::Start.to_string(), "start");
    assert_eq!(TextAnchor::Middle.to_string(), "middle");
    assert_eq!(TextAnchor::End.to_string(), "end");
    assert_eq!(TextAnchor::default(), TextAnchor::Start);
}
