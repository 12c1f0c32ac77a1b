//! Builds the simplified document tree from tokenizer events.
//!
//! Invariants:
//! - The root `doc` element is created once and never popped.
//! - An end tag pops exactly one open entry, whatever its name, and is dropped when
//!   only the root is open.
//! - Tags matched by a mark rule own no content: their text lands in the nearest open
//!   element, carrying the active marks.
//! - Adjacent text merges only when the active marks are equal.

use crate::config::ParseConfig;
use crate::entities::{DecodingMode, HtmlDecoder};
use crate::matcher::matching_marks;
use crate::tokenizer::{OpenKind, RawAttr, Tag, TokenSink};
use crate::types::{AttrValue, Attrs, Mark, Node};
use arena::{ArenaNode, NodeArena};
use stack::{OpenStack, StackEntry};

mod arena;
mod stack;

/// Name of the root element.
pub const ROOT_NAME: &str = "doc";

/// Minimal tree-builder instrumentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeBuilderStats {
    /// End tags seen while only the root was open.
    pub dropped_end_tags: u64,
    /// Elements and mark groups still open at end of input.
    pub unclosed_at_eof: u64,
    /// Deepest open stack observed, root included.
    pub max_depth: u32,
}

struct Decoders {
    text: HtmlDecoder,
    attr: HtmlDecoder,
}

pub struct TreeBuilder<'c> {
    config: &'c ParseConfig,
    arena: NodeArena,
    root: usize,
    stack: OpenStack,
    active_marks: Vec<Mark>,
    decoders: Option<Decoders>,
    /// Reused buffer for decoded text runs.
    scratch: String,
    stats: TreeBuilderStats,
}

impl<'c> TreeBuilder<'c> {
    pub fn new(config: &'c ParseConfig) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.push(ArenaNode::element(ROOT_NAME.to_string(), Attrs::new()));
        let decoders = config.decode_entities.then(|| Decoders {
            text: HtmlDecoder::new(DecodingMode::Legacy),
            attr: HtmlDecoder::new(DecodingMode::Attribute),
        });
        Self {
            config,
            arena,
            root,
            stack: OpenStack::new(root),
            active_marks: Vec::new(),
            decoders,
            scratch: String::new(),
            stats: TreeBuilderStats::default(),
        }
    }

    /// Close the parse and hand over the tree. Open elements stay in place.
    pub fn finish(mut self) -> (Node, TreeBuilderStats) {
        self.stats.unclosed_at_eof = self.stack.open_above_root() as u64;
        self.stats.max_depth = self.stack.max_depth();
        (self.arena.into_node(self.root), self.stats)
    }

    fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let parent = self.stack.current_node();
        if self
            .arena
            .merge_into_last_text(parent, &self.active_marks, text)
        {
            return;
        }
        self.arena.add_child(
            parent,
            ArenaNode::Text {
                text: text.to_string(),
                marks: self.active_marks.clone(),
            },
        );
    }

    fn build_attrs(&mut self, raw: Vec<RawAttr>) -> Attrs {
        raw.into_iter()
            .map(|RawAttr { name, value }| {
                let value = match (value, self.decoders.as_mut()) {
                    (None, _) => AttrValue::Bool(true),
                    (Some(value), Some(decoders)) => {
                        AttrValue::from_source(&decoders.attr.decode(&value))
                    }
                    (Some(value), None) => AttrValue::from_source(&value),
                };
                (name, value)
            })
            .collect()
    }
}

impl TokenSink for TreeBuilder<'_> {
    fn text(&mut self, text: &str) {
        let Some(decoders) = self.decoders.as_mut() else {
            self.insert_text(text);
            return;
        };
        let mut decoded = std::mem::take(&mut self.scratch);
        decoded.clear();
        decoders.text.decode_into(text, &mut decoded);
        self.insert_text(&decoded);
        self.scratch = decoded;
    }

    fn open_element(&mut self, tag: Tag, kind: OpenKind) {
        let Tag { name: source, attrs } = tag;
        let parent = self.stack.current_node();
        let name = self
            .config
            .resolve_alias(self.arena.name(parent), &source)
            .to_string();
        let attrs = self.build_attrs(attrs);
        let self_closing =
            self.config.is_self_closing(&source) || self.config.is_self_closing(&name);

        let marks = matching_marks(&self.config.mark_rules, &name, &attrs);
        if marks.is_empty() {
            let index = self
                .arena
                .add_child(parent, ArenaNode::element(name, attrs));
            self.stack.push(StackEntry::Node(index));
        } else {
            #[cfg(any(test, feature = "debug-stats"))]
            log::trace!(
                target: "htmldoc.tree_builder",
                "<{source}> as {} mark(s) over {} active",
                marks.len(),
                self.active_marks.len()
            );
            self.active_marks.extend(marks.iter().cloned());
            self.stack.push(StackEntry::MarkGroup(marks));
        }

        if kind == OpenKind::Terminal && self_closing {
            self.close_element();
        }
    }

    fn close_element(&mut self) {
        match self.stack.pop_above_root() {
            Some(StackEntry::MarkGroup(marks)) => {
                // Groups close in stack order, so their marks are the tail of the list.
                let keep = self.active_marks.len().saturating_sub(marks.len());
                self.active_marks.truncate(keep);
            }
            Some(StackEntry::Node(_)) => {}
            None => {
                self.stats.dropped_end_tags = self.stats.dropped_end_tags.saturating_add(1);
                #[cfg(any(test, feature = "debug-stats"))]
                log::trace!(
                    target: "htmldoc.tree_builder",
                    "end tag with only the root open; dropped"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests;
