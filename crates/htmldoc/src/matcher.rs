//! Attribute-subset predicates used to turn elements into marks.

use crate::config::MarkRule;
use crate::types::{Attrs, Mark};

/// Every `required` pair is present in `actual` with an equal value.
///
/// `None` requirements match anything; missing `actual` attributes fail any requirement.
pub fn attrs_include(required: Option<&Attrs>, actual: &Attrs) -> bool {
    let Some(required) = required else {
        return true;
    };
    if required.len() > actual.len() {
        return false;
    }
    required
        .iter()
        .all(|(key, value)| actual.get(key) == Some(value))
}

/// `actual` minus every key named in `consumed`.
pub fn attrs_excluding(actual: &Attrs, consumed: Option<&Attrs>) -> Attrs {
    actual
        .iter()
        .filter(|(key, _)| consumed.is_none_or(|c| !c.contains_key(key.as_str())))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Marks produced by every rule matching the element `name` with `attrs`, in rule order.
///
/// Each mark carries the element attributes its rule did not test for; the mark's
/// own configured attrs take precedence over those.
pub fn matching_marks(rules: &[MarkRule], name: &str, attrs: &Attrs) -> Vec<Mark> {
    rules
        .iter()
        .filter(|rule| rule.kind == name && attrs_include(rule.attrs.as_ref(), attrs))
        .map(|rule| {
            let mut merged = attrs_excluding(attrs, rule.attrs.as_ref());
            merged.extend(
                rule.mark
                    .attrs
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone())),
            );
            Mark {
                kind: rule.mark.kind.clone(),
                attrs: merged,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttrValue;

    fn attrs(pairs: &[(&str, AttrValue)]) -> Attrs {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn missing_requirement_matches_everything() {
        assert!(attrs_include(None, &Attrs::new()));
        assert!(attrs_include(None, &attrs(&[("a", AttrValue::Bool(true))])));
    }

    #[test]
    fn absent_attribute_fails_requirement() {
        let required = attrs(&[("type", "highlight".into())]);
        assert!(!attrs_include(Some(&required), &Attrs::new()));
        assert!(!attrs_include(
            Some(&required),
            &attrs(&[("color", "pink".into())])
        ));
    }

    #[test]
    fn subset_with_equal_values_matches() {
        let required = attrs(&[("type", "highlight".into())]);
        let actual = attrs(&[("type", "highlight".into()), ("color", "pink".into())]);
        assert!(attrs_include(Some(&required), &actual));
        let wrong = attrs(&[("type", "note".into()), ("color", "pink".into())]);
        assert!(!attrs_include(Some(&required), &wrong));
    }

    #[test]
    fn typed_values_compare_after_coercion() {
        let required = attrs(&[("level", AttrValue::from(2))]);
        let actual = attrs(&[("level", AttrValue::from_source("2"))]);
        assert!(attrs_include(Some(&required), &actual));
    }

    #[test]
    fn matched_mark_carries_unmatched_attrs() {
        let rules = vec![
            MarkRule::new("span", Mark::new("highlight")).with_attr("type", "highlight"),
        ];
        let actual = attrs(&[
            ("type", "highlight".into()),
            ("color", "pink".into()),
            ("foo", AttrValue::from_source("11")),
        ]);
        let marks = matching_marks(&rules, "span", &actual);
        assert_eq!(
            marks,
            vec![
                Mark::new("highlight")
                    .with_attr("color", "pink")
                    .with_attr("foo", 11)
            ]
        );
    }

    #[test]
    fn configured_mark_attrs_override_element_attrs() {
        let rules = vec![MarkRule::new("a", Mark::new("link").with_attr("target", "_blank"))];
        let actual = attrs(&[("target", "_self".into()), ("href", "/x".into())]);
        let marks = matching_marks(&rules, "a", &actual);
        assert_eq!(
            marks,
            vec![
                Mark::new("link")
                    .with_attr("href", "/x")
                    .with_attr("target", "_blank")
            ]
        );
    }

    #[test]
    fn every_matching_rule_contributes_in_rule_order() {
        let rules = vec![
            MarkRule::new("b", Mark::new("bold")),
            MarkRule::new("i", Mark::new("italic")),
            MarkRule::new("b", Mark::new("strong")),
        ];
        let marks = matching_marks(&rules, "b", &Attrs::new());
        let kinds: Vec<&str> = marks.iter().map(|m| m.kind.as_str()).collect();
        assert_eq!(kinds, ["bold", "strong"]);
        assert!(matching_marks(&rules, "u", &Attrs::new()).is_empty());
    }
}
