use super::*;

mod html_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(html_escape("A & B"), "A &amp; B");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(html_escape("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("'single'"), "&#39;single&#39;");
    }

    #[test]
    fn leaves_cjk_untouched() {
        assert_eq!(html_escape("第一章"), "第一章");
    }
}

mod format_number_tests {
    use super::*;

    #[test]
    fn small_numbers_unchanged() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(9999), "9999");
    }

    #[test]
    fn thousands_show_k() {
        assert_eq!(format_number(10_000), "10.0K");
        assert_eq!(format_number(15_500), "15.5K");
    }

    #[test]
    fn millions_show_m() {
        assert_eq!(format_number(2_500_000), "2.5M");
    }

    #[test]
    fn negatives_keep_sign() {
        assert_eq!(format_number(-12_000), "-12.0K");
        assert_eq!(format_number(-40), "-40");
    }
}

mod format_thousands_tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(12_345_678), "12,345,678");
    }
}
