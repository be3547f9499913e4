use super::*;

mod cell_tests {
    use super::*;

    #[test]
    fn renders_rect_with_tooltip() {
        let cell = Cell {
            x: 30.0,
            y: 20.0,
            size: 11.0,
            color: ChartColor::hex("#40c463"),
            tooltip: "2024-01-05: 350 words".to_string(),
        };

        let svg = cell.render();
        assert!(svg.contains(r##"<rect x="30" y="20" width="11" height="11" fill="#40c463""##));
        assert!(svg.contains("<title>2024-01-05: 350 words</title>"));
    }

    #[test]
    fn tooltip_is_escaped() {
        let cell = Cell {
            x: 0.0,
            y: 0.0,
            size: 1.0,
            color: ChartColor::hex("#000"),
            tooltip: "<b>".to_string(),
        };
        assert!(cell.render().contains("&lt;b&gt;"));
    }
}

mod label_tests {
    use super::*;

    #[test]
    fn renders_text_with_defaults() {
        let svg = Label::new(4.0, 8.0, "Mon").render();
        assert!(svg.starts_with(r#"<text x="4" y="8" text-anchor="start""#));
        assert!(svg.contains(">Mon</text>"));
        assert!(svg.contains(r#"font-size="9""#));
    }

    #[test]
    fn anchor_and_size_overrides() {
        let svg = Label::new(0.0, 0.0, "Jan")
            .with_anchor(TextAnchor::Middle)
            .with_font_size(12.0)
            .render();
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(r#"font-size="12""#));
    }
}

mod line_tests {
    use super::*;

    #[test]
    fn empty_line_renders_nothing() {
        let line = Line::new(Vec::new(), ChartColor::hex("#000"));
        assert!(line.render().is_empty());
    }

    #[test]
    fn renders_path_without_area() {
        let line = Line::new(vec![(0.0, 10.0), (5.0, 2.0)], ChartColor::hex("#123"));
        let svg = line.render();
        assert!(svg.contains(r#"d="M0,10 L5,2""#));
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn baseline_adds_area() {
        let line = Line::new(vec![(0.0, 10.0), (5.0, 2.0)], ChartColor::hex("#123"))
            .with_baseline_y(20.0);
        let svg = line.render();
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("L5,20 L0,20 Z"));
    }

    #[test]
    fn single_point_has_no_area() {
        let line = Line::new(vec![(1.0, 1.0)], ChartColor::hex("#123")).with_baseline_y(9.0);
        assert_eq!(line.render().matches("<path").count(), 1);
    }
}
