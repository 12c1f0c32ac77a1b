//! Tokenizer state machine definitions.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TokenizerState {
    Text,
    /// After `<`.
    BeforeTagName,
    InTagName,
    /// After `</`.
    BeforeClosingTagName,
    /// Skipping to the `>` of an end tag or of a `/`-closed start tag.
    InClosingTagName,
    BeforeAttrName,
    InAttrName,
    /// After `=`.
    BeforeAttrValue,
    InAttrValue,
    /// `<!...>`: comments, doctypes and conditional comments, skipped unread.
    InExclamation,
}

impl TokenizerState {
    /// States whose unterminated markup is flushed back as text at end of input.
    pub(crate) fn flushes_as_text_at_eof(self) -> bool {
        matches!(
            self,
            TokenizerState::BeforeTagName | TokenizerState::InTagName | TokenizerState::BeforeAttrName
        )
    }
}
