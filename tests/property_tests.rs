//! Property-based tests for console_logger using proptest

use console_logger::{render, ArgumentList, LogLevel, PlaceholderMode};
use proptest::prelude::*;

fn args(values: &[String]) -> ArgumentList {
    values.iter().cloned().collect()
}

/// Argument text that cannot be mistaken for template syntax
fn plain_text() -> impl Strategy<Value = String> {
    "[a-z0-9 ]{0,8}"
}

proptest! {
    /// k sequential placeholders with k arguments consume them all, in order
    #[test]
    fn test_sequential_consumes_in_order(values in prop::collection::vec(plain_text(), 0..8)) {
        let template = vec!["{}"; values.len()].join("|");
        let rendered = render(&template, &args(&values), PlaceholderMode::Sequential);
        prop_assert_eq!(rendered, values.join("|"));
    }

    /// Placeholders beyond the supplied arguments stay visible
    #[test]
    fn test_sequential_excess_placeholders(
        values in prop::collection::vec(plain_text(), 0..5),
        extra in 1usize..4,
    ) {
        let template = "{}".repeat(values.len() + extra);
        let rendered = render(&template, &args(&values), PlaceholderMode::Sequential);
        prop_assert_eq!(rendered, format!("{}{}", values.concat(), "{}".repeat(extra)));
    }

    /// An index may be used any number of times
    #[test]
    fn test_indexed_repetition(value in plain_text(), repeats in 1usize..6) {
        let template = "{0}".repeat(repeats);
        let rendered = render(&template, &args(&[value.clone()]), PlaceholderMode::Indexed);
        prop_assert_eq!(rendered, value.repeat(repeats));
    }

    /// Out-of-range indexes are left verbatim
    #[test]
    fn test_indexed_out_of_range(count in 0usize..5, offset in 0usize..1000) {
        let values: Vec<String> = (0..count).map(|i| i.to_string()).collect();
        let placeholder = format!("{{{}}}", count + offset);
        let rendered = render(&placeholder, &args(&values), PlaceholderMode::Indexed);
        prop_assert_eq!(rendered, placeholder);
    }

    /// Templates without braces pass through unchanged
    #[test]
    fn test_brace_free_templates_unchanged(
        template in "[^{}]{0,64}",
        values in prop::collection::vec(plain_text(), 0..3),
    ) {
        for mode in [PlaceholderMode::Sequential, PlaceholderMode::Indexed] {
            prop_assert_eq!(render(&template, &args(&values), mode), template.clone());
        }
    }

    /// Arbitrary templates and arguments never panic
    #[test]
    fn test_render_never_panics(
        template in "\\PC{0,64}",
        values in prop::collection::vec("\\PC{0,8}", 0..4),
    ) {
        let _ = render(&template, &args(&values), PlaceholderMode::Sequential);
        let _ = render(&template, &args(&values), PlaceholderMode::Indexed);
    }

    /// Brace-heavy templates never panic either
    #[test]
    fn test_brace_soup_never_panics(template in "[{}0-9a ]{0,40}") {
        let values = args(&["x".to_string(), "y".to_string()]);
        let _ = render(&template, &values, PlaceholderMode::Sequential);
        let _ = render(&template, &values, PlaceholderMode::Indexed);
    }

    /// Level names parse back case-insensitively
    #[test]
    fn test_log_level_str_roundtrip(level in prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]) {
        let parsed: LogLevel = level.to_str().to_lowercase().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }
}
