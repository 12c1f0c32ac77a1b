use crate::types::{AttrValue, Attrs, Mark, Node};
use std::fmt::{self, Write};
use std::sync::OnceLock;

/// Deterministic tree rendering and comparison for tests.
/// Not a public stable format; intended for diffs in test failures.
///
/// Equivalence rules:
/// - Node kinds and element names must match.
/// - Attributes compare as maps (rendered in key order).
/// - Text must match exactly, marks in order.
#[derive(Debug)]
pub struct TreeSnapshot {
    lines: Vec<String>,
}

impl TreeSnapshot {
    pub fn new(root: &Node) -> Self {
        let mut lines = Vec::new();
        walk_snapshot(root, 0, &mut lines);
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for TreeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct TreeMismatch<'a> {
    path: String,
    detail: String,
    expected_node: &'a Node,
    actual_node: &'a Node,
    expected_subtree: OnceLock<String>,
    actual_subtree: OnceLock<String>,
}

impl fmt::Display for TreeMismatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected_subtree = self
            .expected_subtree
            .get_or_init(|| TreeSnapshot::new(self.expected_node).render());
        let actual_subtree = self
            .actual_subtree
            .get_or_init(|| TreeSnapshot::new(self.actual_node).render());
        writeln!(f, "tree mismatch at {}: {}", self.path, self.detail)?;
        writeln!(f, "expected: {}", format_node_line(self.expected_node))?;
        writeln!(f, "actual:   {}", format_node_line(self.actual_node))?;
        writeln!(f, "expected subtree:\n{expected_subtree}")?;
        writeln!(f, "actual subtree:\n{actual_subtree}")?;
        Ok(())
    }
}

impl std::error::Error for TreeMismatch<'_> {}

pub fn assert_tree_eq(expected: &Node, actual: &Node) {
    if let Err(mismatch) = compare_tree(expected, actual) {
        panic!("{mismatch}");
    }
}

pub fn compare_tree<'a>(expected: &'a Node, actual: &'a Node) -> Result<(), Box<TreeMismatch<'a>>> {
    let mut path = vec![node_label(expected)];
    compare_nodes(expected, actual, &mut path)
}

fn compare_nodes<'a>(
    expected: &'a Node,
    actual: &'a Node,
    path: &mut Vec<String>,
) -> Result<(), Box<TreeMismatch<'a>>> {
    match (expected, actual) {
        (
            Node::Element {
                name: expected_name,
                attrs: expected_attrs,
                content: expected_content,
            },
            Node::Element {
                name: actual_name,
                attrs: actual_attrs,
                content: actual_content,
            },
        ) => {
            if expected_name != actual_name {
                return Err(mismatch(path, "element name", expected, actual));
            }
            if expected_attrs != actual_attrs {
                return Err(mismatch(path, "attributes", expected, actual));
            }
            if expected_content.len() != actual_content.len() {
                let detail = format!(
                    "child count (expected {}, actual {})",
                    expected_content.len(),
                    actual_content.len()
                );
                return Err(mismatch(path, &detail, expected, actual));
            }
            for (idx, (exp, act)) in expected_content.iter().zip(actual_content).enumerate() {
                path.push(format!("{}[{}]", node_label(exp), idx));
                let result = compare_nodes(exp, act, path);
                path.pop();
                result?;
            }
            Ok(())
        }
        (
            Node::Text {
                text: expected_text,
                marks: expected_marks,
            },
            Node::Text {
                text: actual_text,
                marks: actual_marks,
            },
        ) => {
            if expected_text != actual_text {
                return Err(mismatch(path, "text", expected, actual));
            }
            if expected_marks != actual_marks {
                return Err(mismatch(path, "marks", expected, actual));
            }
            Ok(())
        }
        _ => Err(mismatch(path, "node kind", expected, actual)),
    }
}

fn mismatch<'a>(
    path: &[String],
    detail: &str,
    expected: &'a Node,
    actual: &'a Node,
) -> Box<TreeMismatch<'a>> {
    Box::new(TreeMismatch {
        path: format!("/{}", path.join("/")),
        detail: detail.to_string(),
        expected_node: expected,
        actual_node: actual,
        expected_subtree: OnceLock::new(),
        actual_subtree: OnceLock::new(),
    })
}

fn node_label(node: &Node) -> String {
    match node {
        Node::Element { name, attrs, .. } => {
            let mut label = name.clone();
            if let Some(AttrValue::String(id)) = attrs.get("id")
                && !id.is_empty()
            {
                label.push('#');
                write_escaped(&mut label, id);
            }
            label
        }
        Node::Text { .. } => "#text".to_string(),
    }
}

fn walk_snapshot(node: &Node, depth: usize, out: &mut Vec<String>) {
    const INDENT_STEP: usize = 2;
    let mut line = " ".repeat(depth.saturating_mul(INDENT_STEP));
    write_node_line(&mut line, node);
    out.push(line);
    for child in node.content() {
        walk_snapshot(child, depth + 1, out);
    }
}

fn format_node_line(node: &Node) -> String {
    let mut line = String::new();
    write_node_line(&mut line, node);
    line
}

fn write_node_line(out: &mut String, node: &Node) {
    match node {
        Node::Element { name, attrs, .. } => {
            out.push('<');
            out.push_str(name);
            write_attrs(out, attrs);
            out.push('>');
        }
        Node::Text { text, marks } => {
            out.push('"');
            write_escaped(out, text);
            out.push('"');
            if !marks.is_empty() {
                out.push_str(" [");
                for (i, mark) in marks.iter().enumerate() {
                    if i != 0 {
                        out.push_str(", ");
                    }
                    write_mark(out, mark);
                }
                out.push(']');
            }
        }
    }
}

fn write_mark(out: &mut String, mark: &Mark) {
    out.push_str(&mark.kind);
    if !mark.attrs.is_empty() {
        out.push('{');
        write_attrs(out, &mark.attrs);
        out.push_str(" }");
    }
}

fn write_attrs(out: &mut String, attrs: &Attrs) {
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        match value {
            AttrValue::Bool(true) => {}
            AttrValue::Bool(false) => out.push_str("=false"),
            AttrValue::Number(n) => {
                let _ = write!(out, "={n}");
            }
            AttrValue::String(s) => {
                out.push_str("=\"");
                write_escaped(out, s);
                out.push('"');
            }
        }
    }
}

fn write_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ if ch.is_ascii() => out.push(ch),
            _ => {
                let _ = write!(out, "\\u{{{:X}}}", ch as u32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TreeSnapshot, assert_tree_eq, compare_tree};
    use crate::types::{Attrs, Mark, Node};

    fn elem(name: &str, content: Vec<Node>) -> Node {
        Node::Element {
            name: name.to_string(),
            attrs: Attrs::new(),
            content,
        }
    }

    #[test]
    fn snapshot_renders_attrs_and_marks() {
        let mut p = elem(
            "p",
            vec![Node::Text {
                text: "hi\n".to_string(),
                marks: vec![Mark::new("bold"), Mark::new("link").with_attr("href", "/x")],
            }],
        );
        if let Node::Element { attrs, .. } = &mut p {
            attrs.insert("id".into(), "main".into());
            attrs.insert("n".into(), 2.into());
            attrs.insert("hidden".into(), true.into());
        }
        let doc = elem("doc", vec![p, Node::text("é")]);
        assert_eq!(
            TreeSnapshot::new(&doc).as_lines(),
            [
                "<doc>",
                "  <p hidden id=\"main\" n=2>",
                "    \"hi\\n\" [bold, link{ href=\"/x\" }]",
                "  \"\\u{E9}\"",
            ]
        );
    }

    #[test]
    fn equal_trees_compare_equal() {
        let a = elem("doc", vec![elem("p", vec![Node::text("a")])]);
        assert_tree_eq(&a, &a.clone());
    }

    #[test]
    fn mismatch_points_to_text() {
        let expected = elem("doc", vec![elem("p", vec![Node::text("a")])]);
        let actual = elem("doc", vec![elem("p", vec![Node::text("b")])]);
        let err = compare_tree(&expected, &actual).expect_err("expected mismatch");
        let message = err.to_string();
        assert!(message.contains("/doc/p[0]/#text[0]"));
        assert!(message.contains(": text"));
    }

    #[test]
    fn mismatch_reports_marks() {
        let expected = elem("doc", vec![Node::text("a")]);
        let actual = elem(
            "doc",
            vec![Node::Text {
                text: "a".into(),
                marks: vec![Mark::new("bold")],
            }],
        );
        let err = compare_tree(&expected, &actual).expect_err("expected mismatch");
        assert!(err.to_string().contains("marks"));
    }
}
