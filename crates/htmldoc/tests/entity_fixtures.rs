use std::path::PathBuf;

use htmldoc::decode_html;
use htmldoc_test_support::{escape_text, fixture_files, load_entity_fixtures};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/entities")
}

#[test]
fn entity_golden_fixtures() {
    let mut failures = Vec::new();
    let mut total = 0usize;

    for path in fixture_files(&fixture_dir()) {
        for case in load_entity_fixtures(&path) {
            total += 1;
            let actual = decode_html(&case.input, case.mode.into());
            if actual != case.expected {
                failures.push(format!(
                    "case '{}' [{:?}]: input \"{}\"\n  expected: \"{}\"\n    actual: \"{}\"",
                    case.id,
                    case.mode,
                    escape_text(&case.input),
                    escape_text(&case.expected),
                    escape_text(&actual)
                ));
            }
        }
    }

    assert!(total > 0, "no entity fixture cases were loaded");
    assert!(
        failures.is_empty(),
        "{} of {total} entity fixture cases failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}
