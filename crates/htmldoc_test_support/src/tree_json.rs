//! JSON rendering of parsed trees in the rich-text document shape.
//!
//! Elements render as `{"type", "attrs"?, "content"?}` and text as
//! `{"type": "text", "text", "marks"?}`; empty maps and lists are omitted.
//! Integral numbers render as JSON integers so fixtures can write `123`.

use htmldoc::{AttrValue, Attrs, Mark, Node};
use serde_json::{Map, Value, json};

pub fn node_to_json(node: &Node) -> Value {
    match node {
        Node::Element {
            name,
            attrs,
            content,
        } => {
            let mut out = Map::new();
            out.insert("type".into(), json!(name));
            if !attrs.is_empty() {
                out.insert("attrs".into(), attrs_to_json(attrs));
            }
            if !content.is_empty() {
                out.insert(
                    "content".into(),
                    Value::Array(content.iter().map(node_to_json).collect()),
                );
            }
            Value::Object(out)
        }
        Node::Text { text, marks } => {
            let mut out = Map::new();
            out.insert("type".into(), json!("text"));
            out.insert("text".into(), json!(text));
            if !marks.is_empty() {
                out.insert(
                    "marks".into(),
                    Value::Array(marks.iter().map(mark_to_json).collect()),
                );
            }
            Value::Object(out)
        }
    }
}

pub fn mark_to_json(mark: &Mark) -> Value {
    let mut out = Map::new();
    out.insert("type".into(), json!(mark.kind));
    if !mark.attrs.is_empty() {
        out.insert("attrs".into(), attrs_to_json(&mark.attrs));
    }
    Value::Object(out)
}

pub fn attrs_to_json(attrs: &Attrs) -> Value {
    Value::Object(
        attrs
            .iter()
            .map(|(name, value)| (name.clone(), attr_value_to_json(value)))
            .collect(),
    )
}

pub fn attr_value_to_json(value: &AttrValue) -> Value {
    match value {
        AttrValue::Bool(b) => json!(b),
        AttrValue::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => json!(*n as i64),
        AttrValue::Number(n) => json!(n),
        AttrValue::String(s) => json!(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rich_text_shape() {
        let doc = Node::Element {
            name: "doc".into(),
            attrs: Attrs::new(),
            content: vec![
                Node::Element {
                    name: "p".into(),
                    attrs: [("n".to_string(), AttrValue::Number(3.0))].into(),
                    content: vec![Node::Text {
                        text: "x".into(),
                        marks: vec![Mark::new("bold")],
                    }],
                },
                Node::element("br"),
            ],
        };
        assert_eq!(
            node_to_json(&doc),
            json!({
                "type": "doc",
                "content": [
                    {"type": "p", "attrs": {"n": 3}, "content": [
                        {"type": "text", "text": "x", "marks": [{"type": "bold"}]}
                    ]},
                    {"type": "br"}
                ]
            })
        );
    }

    #[test]
    fn fractional_numbers_stay_floats() {
        assert_eq!(attr_value_to_json(&AttrValue::Number(1.5)), json!(1.5));
        assert_eq!(attr_value_to_json(&AttrValue::Number(-4.0)), json!(-4));
    }
}
