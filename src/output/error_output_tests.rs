use std::path::PathBuf;

use super::*;

fn render_error(use_colors: bool, err: &InkstreakError) -> String {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(use_colors).write_error(&mut buf, err);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    let err = InkstreakError::Config("stats.recent_points must be at least 1".to_string());
    assert_eq!(
        render_error(false, &err),
        "✖ Config: stats.recent_points must be at least 1\n"
    );
}

#[test]
fn error_without_colors_with_suggestion() {
    let err = InkstreakError::InvalidDate {
        value: "2024-13-01".to_string(),
    };
    let result = render_error(false, &err);

    assert!(result.starts_with("✖ InvalidDate: '2024-13-01' is not a valid date\n"));
    assert!(result.contains("  help: Use the ISO calendar form"));
}

#[test]
fn error_without_colors_full() {
    let err = InkstreakError::FileAccess {
        path: PathBuf::from("draft.md"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    let result = render_error(false, &err);

    assert!(result.contains("✖ FileAccess: draft.md"));
    assert!(result.contains("  × gone\n"));
    assert!(result.contains("  help: Check that the path exists\n"));
}

#[test]
fn error_with_colors_contains_ansi() {
    let err = InkstreakError::Config("bad".to_string());
    let result = render_error(true, &err);

    assert!(result.contains(ansi::RED));
    assert!(result.contains(ansi::BOLD));
    assert!(result.contains(ansi::RESET));
}

#[test]
fn warning_without_colors() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_warning(
        &mut buf,
        "snapshot log save skipped",
        Some("lock held by another process"),
        None,
    );
    let result = String::from_utf8(buf).unwrap();

    assert_eq!(
        result,
        "⚠ Warning: snapshot log save skipped\n  × lock held by another process\n"
    );
}

#[test]
fn warning_with_colors_uses_yellow() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(true).write_warning(&mut buf, "careful", None, Some("retry"));
    let result = String::from_utf8(buf).unwrap();

    assert!(result.contains(ansi::YELLOW));
    assert!(result.contains(ansi::CYAN));
    assert!(result.contains("retry"));
}

#[test]
fn never_mode_disables_colors() {
    let err = InkstreakError::Config("x".to_string());
    let mut buf = Vec::new();
    ErrorOutput::new(ColorMode::Never).write_error(&mut buf, &err);
    assert!(!String::from_utf8(buf).unwrap().contains('\x1b'));
}
