//! Test-only helpers shared by the `htmldoc` integration tests: golden fixture
//! loading, JSON rendering of trees and line diffs for failure output.

pub mod fixtures;
pub mod tree_json;

pub use fixtures::{EntityCase, TreeCase, fixture_files, load_entity_fixtures, load_tree_fixtures};
pub use tree_json::node_to_json;

use std::fmt::Write;

/// Fixture text as a quoted-string body: quotes, backslashes and control characters
/// escaped, everything else verbatim.
pub fn escape_text(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut out, ch| {
            match ch {
                '\\' | '"' => {
                    out.push('\\');
                    out.push(ch);
                }
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                ch if ch.is_control() => {
                    let _ = write!(out, "\\u{{{:X}}}", u32::from(ch));
                }
                ch => out.push(ch),
            }
            out
        })
}

/// Lines around the first difference between two renderings, `-` for expected and
/// `+` for actual. Empty when both are equal.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    const CONTEXT: usize = 3;

    let first = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.len().min(actual.len()));
    if first == expected.len() && first == actual.len() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "first difference at line {}", first + 1);
    let start = first.saturating_sub(CONTEXT);
    for (marker, lines) in [('-', expected), ('+', actual)] {
        let end = (first + CONTEXT + 1).min(lines.len());
        for (index, line) in lines.iter().enumerate().take(end).skip(start) {
            let _ = writeln!(out, "{marker}{:>5} {line}", index + 1);
        }
        if lines.len() <= first {
            let _ = writeln!(out, "{marker}      <ends after line {}>", lines.len());
        }
    }
    let _ = writeln!(
        out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

/// Pretty-print JSON one member per line so failures can go through [`diff_lines`].
pub fn json_lines(value: &serde_json::Value) -> Vec<String> {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|err| panic!("failed to render JSON: {err}"))
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_text_escapes_quotes_and_controls() {
        assert_eq!(escape_text("a\"b\n\u{1}"), "a\\\"b\\n\\u{1}");
        assert_eq!(escape_text("\u{81}é"), "\\u{81}é");
    }

    #[test]
    fn diff_lines_points_at_first_difference() {
        let expected = vec!["a".to_string(), "b".to_string()];
        let actual = vec!["a".to_string(), "c".to_string()];
        let diff = diff_lines(&expected, &actual);
        assert!(diff.starts_with("first difference at line 2\n"));
        assert!(diff.contains("-    2 b\n"));
        assert!(diff.contains("+    2 c\n"));
    }

    #[test]
    fn diff_lines_reports_truncated_side() {
        let expected = vec!["a".to_string(), "b".to_string()];
        let actual = vec!["a".to_string()];
        let diff = diff_lines(&expected, &actual);
        assert!(diff.contains("+      <ends after line 1>"));
        assert!(diff_lines(&actual, &actual).is_empty());
    }
}
