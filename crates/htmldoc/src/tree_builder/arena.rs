//! Index-based node storage used while the tree is under construction.
//!
//! Children are stored as arena indices so the open stack can refer to elements
//! without borrowing them. `into_node` converts the arena into an owned [`Node`]
//! tree without recursion, so arbitrarily deep inputs cannot overflow the stack
//! while building.

use crate::types::{Attrs, Mark, Node};

#[derive(Debug)]
pub(crate) enum ArenaNode {
    Element {
        name: String,
        attrs: Attrs,
        children: Vec<usize>,
    },
    Text {
        text: String,
        marks: Vec<Mark>,
    },
}

impl ArenaNode {
    pub(crate) fn element(name: String, attrs: Attrs) -> Self {
        ArenaNode::Element {
            name,
            attrs,
            children: Vec::new(),
        }
    }

    fn children(&self) -> Option<&[usize]> {
        match self {
            ArenaNode::Element { children, .. } => Some(children),
            ArenaNode::Text { .. } => None,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<ArenaNode>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: ArenaNode) -> usize {
        let index = self.nodes.len();
        self.nodes.push(node);
        index
    }

    pub(crate) fn add_child(&mut self, parent_index: usize, child: ArenaNode) -> usize {
        let child_index = self.push(child);
        match &mut self.nodes[parent_index] {
            ArenaNode::Element { children, .. } => children.push(child_index),
            ArenaNode::Text { .. } => unreachable!("tree builder parent cannot be a text node"),
        }
        child_index
    }

    pub(crate) fn name(&self, index: usize) -> &str {
        match &self.nodes[index] {
            ArenaNode::Element { name, .. } => name,
            ArenaNode::Text { .. } => unreachable!("open stack only holds elements"),
        }
    }

    /// Append `text` to the last child of `parent_index` if it is a text node carrying
    /// exactly `marks`. Returns whether the text was merged.
    pub(crate) fn merge_into_last_text(
        &mut self,
        parent_index: usize,
        marks: &[Mark],
        text: &str,
    ) -> bool {
        let Some(&last) = self.nodes[parent_index]
            .children()
            .and_then(|children| children.last())
        else {
            return false;
        };
        match &mut self.nodes[last] {
            ArenaNode::Text {
                text: existing,
                marks: existing_marks,
            } if existing_marks.as_slice() == marks => {
                existing.push_str(text);
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn into_node(self, root_index: usize) -> Node {
        let mut nodes = self.nodes;
        let mut built_nodes: Vec<Node> = Vec::with_capacity(nodes.len());

        // Iterative postorder: a node is built once all of its descendants are, at which
        // point its direct children are the last `child_count` entries of `built_nodes`.
        let mut stack: Vec<(usize, bool)> = vec![(root_index, false)];

        while let Some((node_index, visited)) = stack.pop() {
            if !visited {
                stack.push((node_index, true));
                if let Some(children) = nodes[node_index].children() {
                    for &child_index in children.iter().rev() {
                        stack.push((child_index, false));
                    }
                }
                continue;
            }

            let node = match &mut nodes[node_index] {
                ArenaNode::Element {
                    name,
                    attrs,
                    children,
                } => {
                    let first_child = built_nodes.len() - children.len();
                    children.clear();
                    Node::Element {
                        name: std::mem::take(name),
                        attrs: std::mem::take(attrs),
                        content: built_nodes.split_off(first_child),
                    }
                }
                ArenaNode::Text { text, marks } => Node::Text {
                    text: std::mem::take(text),
                    marks: std::mem::take(marks),
                },
            };
            built_nodes.push(node);
        }

        match (built_nodes.pop(), built_nodes.is_empty()) {
            (Some(root), true) => root,
            _ => unreachable!("tree builder should build exactly one root node"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_node_keeps_child_order() {
        let mut arena = NodeArena::new();
        let root = arena.push(ArenaNode::element("doc".into(), Attrs::new()));
        let p = arena.add_child(root, ArenaNode::element("p".into(), Attrs::new()));
        arena.add_child(
            p,
            ArenaNode::Text {
                text: "a".into(),
                marks: Vec::new(),
            },
        );
        arena.add_child(p, ArenaNode::element("br".into(), Attrs::new()));
        arena.add_child(root, ArenaNode::element("hr".into(), Attrs::new()));

        let doc = arena.into_node(root);
        let kinds: Vec<&str> = doc.content().iter().map(Node::kind).collect();
        assert_eq!(kinds, ["p", "hr"]);
        let inner: Vec<&str> = doc.content()[0].content().iter().map(Node::kind).collect();
        assert_eq!(inner, ["text", "br"]);
    }

    #[test]
    fn text_merges_only_with_equal_marks() {
        let mut arena = NodeArena::new();
        let root = arena.push(ArenaNode::element("doc".into(), Attrs::new()));
        assert!(!arena.merge_into_last_text(root, &[], "x"));
        arena.add_child(
            root,
            ArenaNode::Text {
                text: "a".into(),
                marks: vec![Mark::new("bold")],
            },
        );
        assert!(arena.merge_into_last_text(root, &[Mark::new("bold")], "b"));
        assert!(!arena.merge_into_last_text(root, &[], "c"));
        assert!(!arena.merge_into_last_text(root, &[Mark::new("bold").with_attr("x", 1)], "d"));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.into_node(root).content()[0].as_text(), Some("ab"));
    }

    #[test]
    fn into_node_handles_deep_nesting() {
        let depth = 200_000;
        let mut arena = NodeArena::new();
        let root = arena.push(ArenaNode::element("doc".into(), Attrs::new()));
        let mut parent = root;
        for _ in 0..depth {
            parent = arena.add_child(parent, ArenaNode::element("div".into(), Attrs::new()));
        }

        let doc = arena.into_node(root);
        let mut current = &doc;
        let mut seen = 0;
        while let [child] = current.content() {
            assert_eq!(child.kind(), "div");
            seen += 1;
            current = child;
        }
        assert_eq!(seen, depth);
    }
}
