//! HTML character reference decoding over a packed trie of the named references.
//!
//! `decode_html` is the whole-string entry point; `EntityDecoder` is the resumable
//! primitive underneath it. The trie (`HTML_DECODE_TREE`) is generated by
//! the `gen_decode_tree` bin in `crates/tools`; its node layout is documented in `branch`.

pub mod branch;
mod code_point;
mod decode;
mod decode_tree;
mod decoder;
mod error;

pub use code_point::{replace_code_point, validate_numeric_reference};
pub use decode::{
    HtmlDecoder, decode_html, decode_html_attribute, decode_html_strict, decode_html_with_errors,
};
pub use decode_tree::{DECODE_TREE_VERSION, HTML_DECODE_TREE};
pub use decoder::{EntityDecoder, EntityWrite};
pub use error::{EntityError, EntityErrorCode, EntityErrorSink};

/// How permissive the decoder is with references that lack a trailing `;`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecodingMode {
    /// Text content: the longest legacy name is accepted without `;`.
    #[default]
    Legacy,
    /// Every reference must end with `;`.
    Strict,
    /// Attribute values: like `Legacy`, except an unterminated name followed by `=`
    /// or an ASCII alphanumeric stays literal.
    Attribute,
}
