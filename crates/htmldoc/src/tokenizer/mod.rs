//! Permissive single-pass tag tokenizer.
//!
//! The tokenizer walks the input once, byte by byte, and reports text runs, opened
//! elements and end tags to a [`TokenSink`]. Every character it reacts to is ASCII,
//! so every slice it takes lands on a UTF-8 boundary.
//!
//! Invariants:
//! - Never fails: malformed markup is recovered as text or dropped.
//! - Text runs are reported raw; character references are left to the sink.
//! - End tags carry no name. The sink decides what a close means.
//! - `<!...>` is skipped up to the first `>` without being interpreted.

use memchr::memchr;

use crate::char_class::{is_quote, is_whitespace};
use states::TokenizerState;

mod states;

/// Receiver of tokenizer events.
pub trait TokenSink {
    /// A non-empty run of raw text.
    fn text(&mut self, text: &str);
    /// A start tag. For `OpenKind::SelfClosing` a `close_element` follows at its `>`.
    fn open_element(&mut self, tag: Tag, kind: OpenKind);
    /// An end tag, or the `>` completing a `/`-closed start tag.
    fn close_element(&mut self);
}

/// How a start tag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenKind {
    /// Ended by `>`.
    Terminal,
    /// Ended by `/`; a `close_element` follows once the `>` is seen.
    SelfClosing,
}

/// Attribute as written in the source, before decoding or type coercion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawAttr {
    /// Lowercased and trimmed.
    pub name: String,
    /// `None` for an attribute written without `=`.
    pub value: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    /// Lowercased, trimmed, trailing `/` removed.
    pub name: String,
    /// Source order; later duplicates are kept and resolved by the sink.
    pub attrs: Vec<RawAttr>,
}

/// Minimal tokenizer instrumentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenizerStats {
    pub steps: u64,
    pub state_transitions: u64,
    /// Embedded `<` inside tag markup re-read as text.
    pub recoveries: u64,
    pub tags_opened: u64,
    pub tags_closed: u64,
}

/// Tokenize `input` into `sink`.
pub fn tokenize<S: TokenSink>(input: &str, sink: &mut S) -> TokenizerStats {
    Tokenizer::new(input).run(sink)
}

pub struct Tokenizer<'a> {
    input: &'a str,
    state: TokenizerState,
    cursor: usize,
    /// Start of the text run, tag name, attribute name or value being read.
    span_start: usize,
    /// Position of the `<` that opened the tag being read.
    tag_start: usize,
    /// `None` while reading a suppressed (comment-named) tag.
    tag: Option<Tag>,
    attr_quote: Option<u8>,
    /// Whether the `>` ending `InClosingTagName` produces a close event.
    close_pending: bool,
    stats: TokenizerStats,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            state: TokenizerState::Text,
            cursor: 0,
            span_start: 0,
            tag_start: 0,
            tag: None,
            attr_quote: None,
            close_pending: false,
            stats: TokenizerStats::default(),
        }
    }

    /// Consume the whole input, then flush whatever the final state holds.
    pub fn run<S: TokenSink>(mut self, sink: &mut S) -> TokenizerStats {
        let bytes = self.input.as_bytes();
        while self.cursor < bytes.len() {
            self.stats.steps = self.stats.steps.saturating_add(1);
            // States that wait for one delimiter jump straight to it.
            let delimiter = match self.state {
                TokenizerState::Text => Some(b'<'),
                TokenizerState::InClosingTagName | TokenizerState::InExclamation => Some(b'>'),
                TokenizerState::InAttrValue => self.attr_quote,
                _ => None,
            };
            if let Some(delimiter) = delimiter {
                match memchr(delimiter, &bytes[self.cursor..]) {
                    Some(rel) => self.cursor += rel,
                    None => {
                        self.cursor = bytes.len();
                        break;
                    }
                }
            }

            let b = bytes[self.cursor];
            match self.state {
                TokenizerState::Text => self.step_text(b, sink),
                TokenizerState::BeforeTagName => self.step_before_tag_name(b, sink),
                TokenizerState::InTagName => self.step_in_tag_name(b, sink),
                TokenizerState::BeforeClosingTagName => self.step_before_closing_tag_name(b),
                TokenizerState::InClosingTagName => self.step_in_closing_tag_name(b, sink),
                TokenizerState::BeforeAttrName => self.step_before_attr_name(b, sink),
                TokenizerState::InAttrName => self.step_in_attr_name(b, sink),
                TokenizerState::BeforeAttrValue => self.step_before_attr_value(b, sink),
                TokenizerState::InAttrValue => self.step_in_attr_value(b, sink),
                TokenizerState::InExclamation => self.step_in_exclamation(b),
            }
            self.cursor += 1;
        }
        self.finish(sink);
        self.stats
    }

    fn transition_to(&mut self, next: TokenizerState) {
        if self.state == next {
            return;
        }
        #[cfg(any(test, feature = "debug-stats"))]
        {
            log::trace!(
                target: "htmldoc.tokenizer",
                "state {:?} -> {:?} @{}",
                self.state,
                next,
                self.cursor
            );
        }
        self.state = next;
        self.stats.state_transitions = self.stats.state_transitions.saturating_add(1);
    }

    fn step_text<S: TokenSink>(&mut self, b: u8, sink: &mut S) {
        if b == b'<' {
            self.emit_text(sink, self.span_start, self.cursor);
            self.tag_start = self.cursor;
            self.transition_to(TokenizerState::BeforeTagName);
        }
    }

    fn step_before_tag_name<S: TokenSink>(&mut self, b: u8, sink: &mut S) {
        match b {
            b'/' => self.transition_to(TokenizerState::BeforeClosingTagName),
            b'!' => self.transition_to(TokenizerState::InExclamation),
            // `<>` is literal text.
            b'>' => {
                self.span_start = self.tag_start;
                self.transition_to(TokenizerState::Text);
            }
            // `<<`: the first `<` is literal, the second may still open a tag.
            b'<' => {
                self.emit_text(sink, self.tag_start, self.cursor);
                self.tag_start = self.cursor;
            }
            b if is_whitespace(b) => {}
            _ => {
                self.span_start = self.cursor;
                self.transition_to(TokenizerState::InTagName);
            }
        }
    }

    fn step_in_tag_name<S: TokenSink>(&mut self, b: u8, sink: &mut S) {
        match b {
            b'>' => {
                self.begin_tag();
                self.open(sink, OpenKind::Terminal);
                self.enter_text_after_cursor();
            }
            b'/' => {
                self.begin_tag();
                self.open(sink, OpenKind::SelfClosing);
                self.transition_to(TokenizerState::InClosingTagName);
            }
            b'<' => self.recover_embedded_lt(sink),
            b if is_whitespace(b) => {
                self.begin_tag();
                self.transition_to(TokenizerState::BeforeAttrName);
            }
            _ => {}
        }
    }

    fn step_before_closing_tag_name(&mut self, b: u8) {
        if b == b'>' {
            // `</>` closes nothing.
            self.enter_text_after_cursor();
            return;
        }
        self.close_pending = true;
        self.transition_to(TokenizerState::InClosingTagName);
    }

    fn step_in_closing_tag_name<S: TokenSink>(&mut self, b: u8, sink: &mut S) {
        if b == b'>' {
            if std::mem::take(&mut self.close_pending) {
                self.stats.tags_closed = self.stats.tags_closed.saturating_add(1);
                sink.close_element();
            }
            self.enter_text_after_cursor();
        }
    }

    fn step_before_attr_name<S: TokenSink>(&mut self, b: u8, sink: &mut S) {
        match b {
            b'>' => {
                self.open(sink, OpenKind::Terminal);
                self.enter_text_after_cursor();
            }
            b'/' => {
                self.open(sink, OpenKind::SelfClosing);
                self.transition_to(TokenizerState::InClosingTagName);
            }
            b'<' => self.recover_embedded_lt(sink),
            // `name = value`
            b'=' if self.awaiting_value() => {
                self.transition_to(TokenizerState::BeforeAttrValue);
            }
            b if is_whitespace(b) => {}
            _ => {
                self.span_start = self.cursor;
                self.transition_to(TokenizerState::InAttrName);
            }
        }
    }

    /// The last attribute read has no value yet.
    fn awaiting_value(&self) -> bool {
        self.tag
            .as_ref()
            .and_then(|tag| tag.attrs.last())
            .is_some_and(|attr| attr.value.is_none())
    }

    fn step_in_attr_name<S: TokenSink>(&mut self, b: u8, sink: &mut S) {
        match b {
            b'>' => {
                self.push_attr_name();
                self.open(sink, OpenKind::Terminal);
                self.enter_text_after_cursor();
            }
            b'=' => {
                self.push_attr_name();
                self.transition_to(TokenizerState::BeforeAttrValue);
            }
            b'/' => {
                self.push_attr_name();
                self.open(sink, OpenKind::SelfClosing);
                self.transition_to(TokenizerState::InClosingTagName);
            }
            b if is_whitespace(b) => {
                self.push_attr_name();
                self.transition_to(TokenizerState::BeforeAttrName);
            }
            _ => {}
        }
    }

    fn step_before_attr_value<S: TokenSink>(&mut self, b: u8, sink: &mut S) {
        match b {
            b if is_quote(b) => {
                self.attr_quote = Some(b);
                self.span_start = self.cursor + 1;
                self.transition_to(TokenizerState::InAttrValue);
            }
            // `name=>`: empty value.
            b'>' => {
                self.set_attr_value(self.cursor, self.cursor);
                self.open(sink, OpenKind::Terminal);
                self.enter_text_after_cursor();
            }
            b if is_whitespace(b) => {}
            _ => {
                self.attr_quote = None;
                self.span_start = self.cursor;
                self.transition_to(TokenizerState::InAttrValue);
            }
        }
    }

    fn step_in_attr_value<S: TokenSink>(&mut self, b: u8, sink: &mut S) {
        if let Some(quote) = self.attr_quote {
            if b == quote {
                self.set_attr_value(self.span_start, self.cursor);
                self.attr_quote = None;
                self.transition_to(TokenizerState::BeforeAttrName);
            }
            return;
        }
        if b == b'>' {
            self.set_attr_value(self.span_start, self.cursor);
            self.open(sink, OpenKind::Terminal);
            self.enter_text_after_cursor();
        } else if is_whitespace(b) {
            self.set_attr_value(self.span_start, self.cursor);
            self.transition_to(TokenizerState::BeforeAttrName);
        }
    }

    fn step_in_exclamation(&mut self, b: u8) {
        if b == b'>' {
            self.enter_text_after_cursor();
        }
    }

    /// A `<` inside tag markup: the markup read so far was text after all.
    ///
    /// The pending tag is discarded, `tag_start..cursor` is reported as text and the
    /// current `<` is handled as if seen in text.
    fn recover_embedded_lt<S: TokenSink>(&mut self, sink: &mut S) {
        self.stats.recoveries = self.stats.recoveries.saturating_add(1);
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(
            target: "htmldoc.tokenizer",
            "embedded '<' in {:?} @{}; re-reading from @{} as text",
            self.state,
            self.cursor,
            self.tag_start
        );
        self.tag = None;
        self.span_start = self.tag_start;
        self.transition_to(TokenizerState::Text);
        self.step_text(b'<', sink);
    }

    fn finish<S: TokenSink>(&mut self, sink: &mut S) {
        let end = self.input.len();
        match self.state {
            TokenizerState::Text => self.emit_text(sink, self.span_start, end),
            state if state.flushes_as_text_at_eof() => {
                self.tag = None;
                self.emit_text(sink, self.tag_start, end);
            }
            _state => {
                #[cfg(any(test, feature = "debug-stats"))]
                log::trace!(
                    target: "htmldoc.tokenizer",
                    "dropping unterminated markup in {:?} from @{}",
                    _state,
                    self.tag_start
                );
            }
        }
    }

    fn enter_text_after_cursor(&mut self) {
        self.span_start = self.cursor + 1;
        self.transition_to(TokenizerState::Text);
    }

    fn emit_text<S: TokenSink>(&mut self, sink: &mut S, start: usize, end: usize) {
        if end > start {
            sink.text(&self.input[start..end]);
        }
    }

    /// Start a tag named by `span_start..cursor`.
    fn begin_tag(&mut self) {
        let raw = &self.input[self.span_start..self.cursor];
        self.tag = normalize_tag_name(raw).map(|name| Tag {
            name,
            attrs: Vec::new(),
        });
        self.span_start = self.cursor + 1;
    }

    fn push_attr_name(&mut self) {
        let name = self.input[self.span_start..self.cursor]
            .trim()
            .to_ascii_lowercase();
        if let Some(tag) = self.tag.as_mut() {
            tag.attrs.push(RawAttr { name, value: None });
        }
        self.span_start = self.cursor + 1;
    }

    fn set_attr_value(&mut self, start: usize, end: usize) {
        let value = &self.input[start..end];
        if let Some(attr) = self.tag.as_mut().and_then(|tag| tag.attrs.last_mut()) {
            attr.value = Some(value.to_string());
        }
        self.span_start = end + 1;
    }

    fn open<S: TokenSink>(&mut self, sink: &mut S, kind: OpenKind) {
        let Some(tag) = self.tag.take() else {
            self.close_pending = false;
            return;
        };
        self.stats.tags_opened = self.stats.tags_opened.saturating_add(1);
        self.close_pending = kind == OpenKind::SelfClosing;
        sink.open_element(tag, kind);
    }
}

/// Lowercase, trim and drop a trailing `/`. `None` for a `!--...--` comment name.
pub(crate) fn normalize_tag_name(raw: &str) -> Option<String> {
    let name = raw.trim().to_ascii_lowercase();
    let name = name.strip_suffix('/').unwrap_or(&name);
    if is_comment_name(name) {
        return None;
    }
    Some(name.to_string())
}

fn is_comment_name(name: &str) -> bool {
    name.len() >= 5 && name.starts_with("!--") && name.ends_with("--")
}

#[cfg(test)]
mod tests;
