//! HTML fragment to rich-text document tree, plus HTML character reference decoding.
//!
//! [`parse_html`] turns a fragment into a [`Node`] tree rooted at a `doc` element,
//! applying tag aliases, self-closing tags and tag-to-mark rules from a
//! [`ParseConfig`]. [`decode_html`] expands `&name;`, `&#NNN;` and `&#xHHH;` with
//! browser-compatible legacy handling.
//!
//! Neither entry point fails: malformed markup is recovered or dropped, and
//! character reference problems are only reported through an [`EntityErrorSink`].

pub mod char_class;
pub mod config;
pub mod entities;
pub mod matcher;
#[cfg(any(test, feature = "tree-snapshot"))]
pub mod snapshot;
pub mod tokenizer;
pub mod tree_builder;
mod types;

pub use config::{BUILTIN_SELF_CLOSING, MarkRule, ParseConfig};
pub use entities::{
    DecodingMode, EntityDecoder, EntityError, EntityErrorCode, EntityErrorSink, EntityWrite,
    HtmlDecoder, decode_html, decode_html_attribute, decode_html_strict, decode_html_with_errors,
};
pub use tokenizer::{OpenKind, Tag, TokenSink, TokenizerStats};
pub use tree_builder::{TreeBuilder, TreeBuilderStats};
pub use types::{AttrValue, Attrs, Mark, Node};

/// Result of [`parse_html`].
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    /// Root element, named `doc`.
    pub doc: Node,
    pub tokenizer: TokenizerStats,
    pub tree: TreeBuilderStats,
}

/// Parse an HTML fragment into a document tree.
///
/// Unclosed elements stay open to the end of input, so later content nests inside
/// them. Unmatched end tags are dropped.
pub fn parse_html(input: &str, config: &ParseConfig) -> ParseOutput {
    let mut builder = TreeBuilder::new(config);
    let tokenizer = tokenizer::tokenize(input, &mut builder);
    let (doc, tree) = builder.finish();
    #[cfg(any(test, feature = "debug-stats"))]
    log::trace!(
        target: "htmldoc.tree_builder",
        "parsed {} bytes: {tokenizer:?} {tree:?}",
        input.len()
    );
    ParseOutput {
        doc,
        tokenizer,
        tree,
    }
}
