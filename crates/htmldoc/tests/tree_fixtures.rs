use std::path::PathBuf;

use htmldoc::parse_html;
use htmldoc::snapshot::TreeSnapshot;
use htmldoc_test_support::{diff_lines, fixture_files, json_lines, load_tree_fixtures, node_to_json};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/tree")
}

#[test]
fn tree_golden_fixtures() {
    let mut failures = Vec::new();
    let mut total = 0usize;

    for path in fixture_files(&fixture_dir()) {
        for case in load_tree_fixtures(&path) {
            total += 1;
            let expected: serde_json::Value = serde_json::from_str(&case.expected)
                .unwrap_or_else(|err| panic!("invalid expected JSON in case '{}': {err}", case.id));
            let config = case.config.to_parse_config();
            let doc = parse_html(&case.input, &config).doc;
            let actual = node_to_json(&doc);
            if actual != expected {
                failures.push(format!(
                    "case '{}' ({}):\n{}actual tree:\n{}\n",
                    case.id,
                    path.display(),
                    diff_lines(&json_lines(&expected), &json_lines(&actual)),
                    TreeSnapshot::new(&doc)
                ));
            }
        }
    }

    assert!(total > 0, "no tree fixture cases were loaded");
    assert!(
        failures.is_empty(),
        "{} of {total} tree fixture cases failed:\n\n{}",
        failures.len(),
        failures.join("\n")
    );
}
