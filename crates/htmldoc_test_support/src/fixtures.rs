//! TOML golden fixtures for tree building and entity decoding.
//!
//! Tree fixture file:
//!
//! ```toml
//! format = "htmldoc-tree-v1"
//!
//! [[cases]]
//! id = "mark-rule"
//! input = "<p><strong>x</strong></p>"
//! expected = '{"type":"doc","content":[...]}'
//!
//! [cases.config]
//! alias = { "audio > p" = "audioText" }
//! self_close = ["note"]
//! decode_entities = false
//!
//! [[cases.config.mark_rule]]
//! type = "strong"
//! mark = { type = "bold" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use htmldoc::{AttrValue, Attrs, Mark, MarkRule, ParseConfig};
use serde::Deserialize;

pub const TREE_FIXTURE_FORMAT_V1: &str = "htmldoc-tree-v1";
pub const ENTITY_FIXTURE_FORMAT_V1: &str = "htmldoc-entities-v1";

#[derive(Clone, Debug, Deserialize)]
struct TreeFixtureFile {
    format: String,
    cases: Vec<TreeCase>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TreeCase {
    pub id: String,
    pub input: String,
    #[serde(default)]
    pub config: FixtureConfig,
    /// Expected `doc` tree as JSON (see `tree_json`).
    pub expected: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureConfig {
    #[serde(default)]
    pub alias: BTreeMap<String, String>,
    #[serde(default)]
    pub self_close: Vec<String>,
    #[serde(default)]
    pub mark_rule: Vec<FixtureMarkRule>,
    #[serde(default)]
    pub decode_entities: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FixtureMarkRule {
    #[serde(rename = "type")]
    pub kind: String,
    pub attrs: Option<toml::Table>,
    pub mark: FixtureMark,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FixtureMark {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attrs: toml::Table,
}

impl FixtureConfig {
    pub fn to_parse_config(&self) -> ParseConfig {
        let mut config = ParseConfig::new().with_decode_entities(self.decode_entities);
        for (from, to) in &self.alias {
            config = config.with_alias(from.as_str(), to.as_str());
        }
        for name in &self.self_close {
            config = config.with_self_close(name.as_str());
        }
        for rule in &self.mark_rule {
            config = config.with_mark_rule(MarkRule {
                kind: rule.kind.clone(),
                attrs: rule.attrs.as_ref().map(table_to_attrs),
                mark: Mark {
                    kind: rule.mark.kind.clone(),
                    attrs: table_to_attrs(&rule.mark.attrs),
                },
            });
        }
        config
    }
}

fn table_to_attrs(table: &toml::Table) -> Attrs {
    table
        .iter()
        .map(|(key, value)| {
            let value = match value {
                toml::Value::String(s) => AttrValue::String(s.clone()),
                toml::Value::Integer(i) => AttrValue::Number(*i as f64),
                toml::Value::Float(f) => AttrValue::Number(*f),
                toml::Value::Boolean(b) => AttrValue::Bool(*b),
                other => panic!("unsupported attribute value {other:?} for '{key}'"),
            };
            (key.clone(), value)
        })
        .collect()
}

#[derive(Clone, Debug, Deserialize)]
struct EntityFixtureFile {
    format: String,
    cases: Vec<EntityCase>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EntityCase {
    pub id: String,
    pub input: String,
    #[serde(default)]
    pub mode: FixtureMode,
    pub expected: String,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FixtureMode {
    #[default]
    Legacy,
    Strict,
    Attribute,
}

impl From<FixtureMode> for htmldoc::DecodingMode {
    fn from(mode: FixtureMode) -> Self {
        match mode {
            FixtureMode::Legacy => htmldoc::DecodingMode::Legacy,
            FixtureMode::Strict => htmldoc::DecodingMode::Strict,
            FixtureMode::Attribute => htmldoc::DecodingMode::Attribute,
        }
    }
}

pub fn load_tree_fixtures(path: &Path) -> Vec<TreeCase> {
    let file: TreeFixtureFile = read_toml(path);
    assert_eq!(
        file.format, TREE_FIXTURE_FORMAT_V1,
        "unsupported tree fixture format in {path:?}"
    );
    assert_unique_ids(file.cases.iter().map(|case| case.id.as_str()), path);
    file.cases
}

pub fn load_entity_fixtures(path: &Path) -> Vec<EntityCase> {
    let file: EntityFixtureFile = read_toml(path);
    assert_eq!(
        file.format, ENTITY_FIXTURE_FORMAT_V1,
        "unsupported entity fixture format in {path:?}"
    );
    assert_unique_ids(file.cases.iter().map(|case| case.id.as_str()), path);
    file.cases
}

/// Every `*.toml` file directly under `dir`, sorted by name.
pub fn fixture_files(dir: &Path) -> Vec<std::path::PathBuf> {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("failed to read fixture directory {dir:?}: {err}"));
    let mut files: Vec<_> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read entry in {dir:?}: {err}"))
                .path()
        })
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort();
    assert!(!files.is_empty(), "no fixture files found in {dir:?}");
    files
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> T {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture file {path:?}: {err}"));
    toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse fixture file {path:?}: {err}"))
}

fn assert_unique_ids<'a>(ids: impl Iterator<Item = &'a str>, path: &Path) {
    let mut seen = std::collections::BTreeSet::new();
    for id in ids {
        assert!(seen.insert(id), "duplicate case id '{id}' in {path:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_config_builds_parse_config() {
        let config: FixtureConfig = toml::from_str(
            r#"
            alias = { "audio > p" = "audioText", br = "headBreak" }
            self_close = ["headBreak"]

            [[mark_rule]]
            type = "span"
            attrs = { type = "highlight" }
            mark = { type = "highlight", attrs = { level = 2 } }
            "#,
        )
        .expect("fixture config parses");
        let config = config.to_parse_config();
        assert_eq!(config.resolve_alias("audio", "p"), "audioText");
        assert!(config.is_self_closing("headBreak"));
        let rule = &config.mark_rules[0];
        assert_eq!(rule.kind, "span");
        assert_eq!(
            rule.attrs.as_ref().and_then(|a| a.get("type")),
            Some(&AttrValue::from("highlight"))
        );
        assert_eq!(rule.mark.attrs.get("level"), Some(&AttrValue::Number(2.0)));
        assert!(!config.decode_entities);
    }
}
