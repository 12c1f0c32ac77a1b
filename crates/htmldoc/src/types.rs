use std::collections::BTreeMap;

/// Attribute value as stored on elements and marks.
///
/// Attributes written without `=` are `Bool(true)`. Values that look like a plain
/// decimal number are stored as `Number`; see [`AttrValue::from_source`].
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl AttrValue {
    /// Classify a raw attribute value.
    ///
    /// The trimmed value is numeric when it matches `-?[0-9]+(\.[0-9]+)?`, so `"123 "`
    /// becomes `123` while `"123."` and `".45"` stay strings.
    pub fn from_source(raw: &str) -> Self {
        let trimmed = raw.trim();
        if is_plain_number(trimmed)
            && let Ok(n) = trimmed.parse::<f64>()
        {
            return AttrValue::Number(n);
        }
        AttrValue::String(raw.to_string())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(f64::from(value))
    }
}

fn is_plain_number(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.is_none_or(all_digits)
}

/// Attribute map. Keys are lowercased attribute names; a repeated name overwrites.
pub type Attrs = BTreeMap<String, AttrValue>;

/// Non-structural decoration carried by text nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    pub kind: String,
    pub attrs: Attrs,
}

impl Mark {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attrs: Attrs::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}

/// Simplified document tree node.
///
/// The parse root is an `Element` named `"doc"`. An element with empty `content` is
/// equivalent to one without content.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element {
        name: String,
        attrs: Attrs,
        content: Vec<Node>,
    },
    Text {
        text: String,
        marks: Vec<Mark>,
    },
}

impl Node {
    pub fn element(name: impl Into<String>) -> Self {
        Node::Element {
            name: name.into(),
            attrs: Attrs::new(),
            content: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    /// Node type as exposed to rich-text consumers: the element name, or `"text"`.
    pub fn kind(&self) -> &str {
        match self {
            Node::Element { name, .. } => name,
            Node::Text { .. } => "text",
        }
    }

    pub fn content(&self) -> &[Node] {
        match self {
            Node::Element { content, .. } => content,
            Node::Text { .. } => &[],
        }
    }

    pub fn content_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Element { content, .. } => Some(content),
            Node::Text { .. } => None,
        }
    }

    pub fn attrs(&self) -> Option<&Attrs> {
        match self {
            Node::Element { attrs, .. } => Some(attrs),
            Node::Text { .. } => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text { text, .. } => Some(text),
            Node::Element { .. } => None,
        }
    }

    pub fn marks(&self) -> &[Mark] {
        match self {
            Node::Text { marks, .. } => marks,
            Node::Element { .. } => &[],
        }
    }

    /// Concatenated text of this subtree in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Text { text, .. } => out.push_str(text),
                Node::Element { content, .. } => stack.extend(content.iter().rev()),
            }
        }
        out
    }
}

/// Frees deep subtrees with a worklist; the derived drop would recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let Node::Element { content, .. } = self else {
            return;
        };
        if content.iter().all(|child| child.content().is_empty()) {
            return;
        }
        let mut pending = std::mem::take(content);
        while let Some(mut node) = pending.pop() {
            if let Some(children) = node.content_mut() {
                pending.append(children);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_attribute_values_are_coerced() {
        assert_eq!(AttrValue::from_source("123"), AttrValue::Number(123.0));
        assert_eq!(AttrValue::from_source("-123"), AttrValue::Number(-123.0));
        assert_eq!(AttrValue::from_source("123.45"), AttrValue::Number(123.45));
        assert_eq!(AttrValue::from_source("123 "), AttrValue::Number(123.0));
    }

    #[test]
    fn number_like_values_without_digits_on_both_sides_stay_strings() {
        assert_eq!(AttrValue::from_source("123."), AttrValue::from("123."));
        assert_eq!(AttrValue::from_source(".45"), AttrValue::from(".45"));
        assert_eq!(AttrValue::from_source("-"), AttrValue::from("-"));
        assert_eq!(AttrValue::from_source("1e3"), AttrValue::from("1e3"));
        assert_eq!(AttrValue::from_source(""), AttrValue::from(""));
        assert_eq!(AttrValue::from_source(" "), AttrValue::from(" "));
    }

    #[test]
    fn text_content_walks_in_document_order() {
        let doc = Node::Element {
            name: "doc".to_string(),
            attrs: Attrs::new(),
            content: vec![
                Node::text("a"),
                Node::Element {
                    name: "p".to_string(),
                    attrs: Attrs::new(),
                    content: vec![Node::text("b"), Node::element("br"), Node::text("c")],
                },
                Node::text("d"),
            ],
        };
        assert_eq!(doc.text_content(), "abcd");
        assert_eq!(doc.content()[1].kind(), "p");
        assert_eq!(doc.content()[0].kind(), "text");
    }

    #[test]
    fn dropping_a_deep_tree_does_not_recurse() {
        let mut node = Node::text("leaf");
        for _ in 0..300_000 {
            node = Node::Element {
                name: "div".into(),
                attrs: Attrs::new(),
                content: vec![node],
            };
        }
        assert_eq!(node.kind(), "div");
        drop(node);
    }
}
