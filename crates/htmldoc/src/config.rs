//! Parse configuration: tag aliases, extra self-closing tags and mark rules.
//!
//! A `ParseConfig` is read-only for the duration of a parse and can be shared by
//! reference between concurrent parses. Malformed tables are not validated.

use std::collections::{HashMap, HashSet};

use crate::types::{AttrValue, Attrs, Mark};

/// Tags that never have content, regardless of configuration.
pub const BUILTIN_SELF_CLOSING: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Separator of parent-qualified alias keys (`"audio > p"`).
const PARENT_QUALIFIER: &str = " > ";

/// Converts matching elements into a mark instead of a tree node.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkRule {
    /// Resolved (post-alias) tag name the rule applies to.
    pub kind: String,
    /// Attributes the tag must carry with equal values. `None` matches any tag of `kind`.
    pub attrs: Option<Attrs>,
    pub mark: Mark,
}

impl MarkRule {
    pub fn new(kind: impl Into<String>, mark: Mark) -> Self {
        Self {
            kind: kind.into(),
            attrs: None,
            mark,
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs
            .get_or_insert_with(Attrs::new)
            .insert(name.into(), value.into());
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParseConfig {
    /// Tag renames. Keys are either a tag name or `"parent > child"`.
    pub alias: HashMap<String, String>,
    /// Extra self-closing tag names, unioned with [`BUILTIN_SELF_CLOSING`].
    pub self_close: HashSet<String>,
    pub mark_rules: Vec<MarkRule>,
    /// Decode character references in text (Legacy mode) and attribute values
    /// (Attribute mode). Off by default: text is kept verbatim.
    pub decode_entities: bool,
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.alias.insert(from.into(), to.into());
        self
    }

    pub fn with_self_close(mut self, name: impl Into<String>) -> Self {
        self.self_close.insert(name.into());
        self
    }

    pub fn with_mark_rule(mut self, rule: MarkRule) -> Self {
        self.mark_rules.push(rule);
        self
    }

    pub fn with_decode_entities(mut self, decode: bool) -> Self {
        self.decode_entities = decode;
        self
    }

    /// Resolve the alias for `name` opened inside `parent`.
    ///
    /// The parent-qualified key wins over the plain name; at most one alias applies.
    pub fn resolve_alias<'a>(&'a self, parent: &str, name: &'a str) -> &'a str {
        if self.alias.is_empty() {
            return name;
        }
        let qualified = format!("{parent}{PARENT_QUALIFIER}{name}");
        self.alias
            .get(&qualified)
            .or_else(|| self.alias.get(name))
            .map_or(name, String::as_str)
    }

    pub fn is_self_closing(&self, name: &str) -> bool {
        BUILTIN_SELF_CLOSING.contains(&name) || self.self_close.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_qualified_alias_wins_over_plain_alias() {
        let config = ParseConfig::new()
            .with_alias("p", "paragraph")
            .with_alias("audio > p", "audioText");
        assert_eq!(config.resolve_alias("audio", "p"), "audioText");
        assert_eq!(config.resolve_alias("doc", "p"), "paragraph");
        assert_eq!(config.resolve_alias("doc", "span"), "span");
    }

    #[test]
    fn self_closing_is_builtin_or_configured() {
        let config = ParseConfig::new().with_self_close("note");
        assert!(config.is_self_closing("br"));
        assert!(config.is_self_closing("wbr"));
        assert!(config.is_self_closing("note"));
        assert!(!config.is_self_closing("p"));
    }

    #[test]
    fn mark_rule_builder_collects_required_attrs() {
        let rule = MarkRule::new("span", Mark::new("highlight")).with_attr("type", "highlight");
        let attrs = rule.attrs.as_ref().map(|a| a.len());
        assert_eq!(attrs, Some(1));
        assert!(MarkRule::new("b", Mark::new("bold")).attrs.is_none());
    }
}
