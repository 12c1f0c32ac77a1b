//! Incremental decoder for a single character reference.
//!
//! Contract:
//! - `start_entity(mode)` resets per-reference state. It does not touch the output
//!   buffer, so several references can be decoded before the caller collects them.
//! - `write(input, offset)` is called with `offset` pointing right after the `&`.
//!   It returns `EntityWrite::Done(n)` once the reference resolved, where `n` counts
//!   consumed characters from the `&` (0 = not a reference, nothing emitted), or
//!   `EntityWrite::NeedMoreInput` when `input` ended mid-reference. Further chunks are
//!   passed to `write` with `offset` 0.
//! - `end()` is called once input is exhausted after `NeedMoreInput`; it flushes a
//!   reference that was valid but never `;`-terminated and returns its length.
//! - Decoded characters accumulate in an owned buffer, collected with
//!   [`EntityDecoder::take_output`] or [`EntityDecoder::append_output_to`].
//!
//! A decoder holds mutable state and must not be shared between concurrent decodes.

use super::DecodingMode;
use super::branch::{INLINE_VALUE, branch_start, determine_branch, value_length};
use super::code_point::{replace_code_point, validate_numeric_reference};
use super::decode_tree::HTML_DECODE_TREE;
use super::error::{EntityError, EntityErrorCode, EntityErrorSink};
use crate::char_class::{is_attribute_invalid_end, is_digit, is_hex_digit, hex_value};

/// Bit that turns an ASCII upper case letter into lower case.
const TO_LOWER_BIT: u8 = 0b10_0000;

/// Consumed length of `&#` and `&#x`; a numeric reference must consume more.
const DECIMAL_PREFIX_LEN: usize = 2;
const HEX_PREFIX_LEN: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityWrite {
    /// Reference resolved; characters consumed counting the `&`. 0 = not a reference.
    Done(usize),
    /// Input ended in the middle of a reference.
    NeedMoreInput,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DecoderState {
    EntityStart,
    NumericStart,
    NumericDecimal,
    NumericHex,
    NamedEntity,
}

pub struct EntityDecoder<'t, S = ()> {
    tree: &'t [u16],
    sink: S,
    output: String,
    mode: DecodingMode,
    state: DecoderState,
    /// Characters committed to the current reference, including the `&`.
    consumed: usize,
    /// Characters walked past the last committed named candidate.
    excess: usize,
    numeric: u32,
    tree_index: usize,
    /// Deepest value-bearing trie node seen without a `;` (not tracked in Strict mode).
    candidate: Option<usize>,
}

impl EntityDecoder<'static, ()> {
    /// Decoder over the HTML named reference table that ignores errors.
    pub fn html() -> Self {
        EntityDecoder::new(&HTML_DECODE_TREE, ())
    }
}

impl<S: EntityErrorSink> EntityDecoder<'static, S> {
    pub fn html_with_sink(sink: S) -> Self {
        EntityDecoder::new(&HTML_DECODE_TREE, sink)
    }
}

impl<'t, S: EntityErrorSink> EntityDecoder<'t, S> {
    pub fn new(tree: &'t [u16], sink: S) -> Self {
        Self {
            tree,
            sink,
            output: String::new(),
            mode: DecodingMode::Strict,
            state: DecoderState::EntityStart,
            consumed: 1,
            excess: 1,
            numeric: 0,
            tree_index: 0,
            candidate: None,
        }
    }

    pub fn start_entity(&mut self, mode: DecodingMode) {
        self.mode = mode;
        self.state = DecoderState::EntityStart;
        self.consumed = 1;
        self.excess = 1;
        self.numeric = 0;
        self.tree_index = 0;
        self.candidate = None;
    }

    pub fn write(&mut self, input: &str, offset: usize) -> EntityWrite {
        let bytes = input.as_bytes();
        match self.state {
            DecoderState::EntityStart => {
                if bytes.get(offset) == Some(&b'#') {
                    self.state = DecoderState::NumericStart;
                    self.consumed += 1;
                    return self.numeric_start(bytes, offset + 1);
                }
                self.state = DecoderState::NamedEntity;
                self.named_entity(bytes, offset)
            }
            DecoderState::NumericStart => self.numeric_start(bytes, offset),
            DecoderState::NumericDecimal => self.numeric_digits(bytes, offset, false),
            DecoderState::NumericHex => self.numeric_digits(bytes, offset, true),
            DecoderState::NamedEntity => self.named_entity(bytes, offset),
        }
    }

    pub fn end(&mut self) -> usize {
        match self.state {
            DecoderState::NamedEntity => match self.candidate {
                Some(candidate)
                    if self.mode != DecodingMode::Attribute || candidate == self.tree_index =>
                {
                    self.emit_not_terminated_named(candidate)
                }
                _ => 0,
            },
            DecoderState::NumericDecimal => self.emit_numeric(None, DECIMAL_PREFIX_LEN),
            DecoderState::NumericHex => self.emit_numeric(None, HEX_PREFIX_LEN),
            DecoderState::NumericStart => {
                self.report(EntityErrorCode::AbsenceOfDigitsInNumericCharacterReference);
                0
            }
            DecoderState::EntityStart => 0,
        }
    }

    /// Decoded text produced since the last collection.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Hand over the decoded text and leave an empty buffer behind.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Append the decoded text to `out` and clear the buffer, keeping its capacity.
    pub fn append_output_to(&mut self, out: &mut String) {
        out.push_str(&self.output);
        self.output.clear();
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn numeric_start(&mut self, bytes: &[u8], offset: usize) -> EntityWrite {
        let Some(&b) = bytes.get(offset) else {
            return EntityWrite::NeedMoreInput;
        };
        if b | TO_LOWER_BIT == b'x' {
            self.state = DecoderState::NumericHex;
            self.consumed += 1;
            return self.numeric_digits(bytes, offset + 1, true);
        }
        self.state = DecoderState::NumericDecimal;
        self.numeric_digits(bytes, offset, false)
    }

    fn numeric_digits(&mut self, bytes: &[u8], offset: usize, hex: bool) -> EntityWrite {
        let (base, prefix_len) = if hex {
            (16, HEX_PREFIX_LEN)
        } else {
            (10, DECIMAL_PREFIX_LEN)
        };
        for &b in bytes.iter().skip(offset) {
            let digit = if hex && is_hex_digit(b) {
                hex_value(b)
            } else if !hex && is_digit(b) {
                u32::from(b - b'0')
            } else {
                return EntityWrite::Done(self.emit_numeric(Some(b), prefix_len));
            };
            self.numeric = self.numeric.saturating_mul(base).saturating_add(digit);
            self.consumed += 1;
        }
        EntityWrite::NeedMoreInput
    }

    fn emit_numeric(&mut self, last: Option<u8>, prefix_len: usize) -> usize {
        if self.consumed <= prefix_len {
            self.report(EntityErrorCode::AbsenceOfDigitsInNumericCharacterReference);
            return 0;
        }
        let terminated = last == Some(b';');
        if terminated {
            self.consumed += 1;
        } else if self.mode == DecodingMode::Strict {
            return 0;
        }

        self.output.push(replace_code_point(self.numeric));

        if !terminated {
            self.report(EntityErrorCode::MissingSemicolonAfterCharacterReference);
        }
        if let Some(code) = validate_numeric_reference(self.numeric) {
            self.report(code);
        }
        self.consumed
    }

    fn named_entity(&mut self, bytes: &[u8], offset: usize) -> EntityWrite {
        let mut current = self.word(self.tree_index);
        let mut value_len = value_length(current);

        for &b in bytes.iter().skip(offset) {
            let next = determine_branch(
                self.tree,
                current,
                branch_start(self.tree_index, current),
                b,
            );
            let Some(next) = next else {
                let rejected = match self.candidate {
                    None => true,
                    Some(_) => {
                        self.mode == DecodingMode::Attribute
                            && (value_len == 0 || is_attribute_invalid_end(b))
                    }
                };
                return EntityWrite::Done(match self.candidate {
                    Some(candidate) if !rejected => self.emit_not_terminated_named(candidate),
                    _ => 0,
                });
            };

            self.tree_index = next;
            current = self.word(next);
            value_len = value_length(current);

            if value_len != 0 {
                if b == b';' {
                    let consumed = self.consumed + self.excess;
                    return EntityWrite::Done(self.emit_named_value(next, value_len, consumed));
                }
                if self.mode != DecodingMode::Strict {
                    self.candidate = Some(next);
                    self.consumed += self.excess;
                    self.excess = 0;
                }
            }
            self.excess += 1;
        }

        EntityWrite::NeedMoreInput
    }

    fn emit_not_terminated_named(&mut self, candidate: usize) -> usize {
        let value_len = value_length(self.word(candidate));
        let consumed = self.emit_named_value(candidate, value_len, self.consumed);
        self.report(EntityErrorCode::MissingSemicolonAfterCharacterReference);
        consumed
    }

    fn emit_named_value(&mut self, index: usize, value_len: usize, consumed: usize) -> usize {
        match value_len {
            1 => {
                let unit = self.word(index) & INLINE_VALUE;
                push_code_unit(&mut self.output, unit);
            }
            2 => {
                let unit = self.word(index + 1);
                push_code_unit(&mut self.output, unit);
            }
            _ => {
                let (first, second) = (self.word(index + 1), self.word(index + 2));
                match char::decode_utf16([first, second]).collect::<Result<Vec<char>, _>>() {
                    Ok(chars) => self.output.extend(chars),
                    Err(_) => {
                        push_code_unit(&mut self.output, first);
                        push_code_unit(&mut self.output, second);
                    }
                }
            }
        }
        consumed
    }

    fn word(&self, index: usize) -> u16 {
        self.tree.get(index).copied().unwrap_or(0)
    }

    fn report(&mut self, code: EntityErrorCode) {
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(
            target: "htmldoc.entities",
            "character reference error {code:?} after {} chars",
            self.consumed
        );
        self.sink.report(EntityError {
            code,
            consumed: self.consumed,
        });
    }
}

fn push_code_unit(out: &mut String, unit: u16) {
    out.push(char::from_u32(u32::from(unit)).unwrap_or('\u{FFFD}'));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_one(input: &str, mode: DecodingMode) -> (usize, String) {
        let mut decoder = EntityDecoder::html();
        decoder.start_entity(mode);
        let consumed = match decoder.write(input, 1) {
            EntityWrite::Done(n) => n,
            EntityWrite::NeedMoreInput => decoder.end(),
        };
        (consumed, decoder.take_output())
    }

    #[test]
    fn terminated_named_reference() {
        assert_eq!(decode_one("&amp;", DecodingMode::Legacy), (5, "&".into()));
        assert_eq!(decode_one("&amp;", DecodingMode::Strict), (5, "&".into()));
        assert_eq!(decode_one("&amp;x", DecodingMode::Attribute), (5, "&".into()));
    }

    #[test]
    fn legacy_accepts_longest_unterminated_prefix() {
        assert_eq!(decode_one("&notit;", DecodingMode::Legacy), (4, "¬".into()));
        assert_eq!(decode_one("&amp", DecodingMode::Legacy), (4, "&".into()));
        assert_eq!(decode_one("&ampx", DecodingMode::Legacy), (4, "&".into()));
    }

    #[test]
    fn strict_rejects_unterminated_named_reference() {
        assert_eq!(decode_one("&notit", DecodingMode::Strict), (0, String::new()));
        assert_eq!(decode_one("&amp ", DecodingMode::Strict), (0, String::new()));
    }

    #[test]
    fn attribute_mode_rejects_alphanumeric_or_equals_continuation() {
        assert_eq!(decode_one("&ampx", DecodingMode::Attribute), (0, String::new()));
        assert_eq!(decode_one("&amp=", DecodingMode::Attribute), (0, String::new()));
        assert_eq!(decode_one("&amp ", DecodingMode::Attribute), (4, "&".into()));
        assert_eq!(decode_one("&notit;", DecodingMode::Attribute), (0, String::new()));
    }

    #[test]
    fn numeric_references() {
        assert_eq!(decode_one("&#65;", DecodingMode::Legacy), (5, "A".into()));
        assert_eq!(decode_one("&#x41;", DecodingMode::Legacy), (6, "A".into()));
        assert_eq!(decode_one("&#X41;", DecodingMode::Legacy), (6, "A".into()));
        assert_eq!(decode_one("&#65 ", DecodingMode::Legacy), (4, "A".into()));
        assert_eq!(decode_one("&#65 ", DecodingMode::Strict), (0, String::new()));
        assert_eq!(decode_one("&#65", DecodingMode::Legacy), (4, "A".into()));
    }

    #[test]
    fn numeric_reference_without_digits_consumes_nothing() {
        let mut decoder = EntityDecoder::html_with_sink(Vec::new());
        decoder.start_entity(DecodingMode::Legacy);
        assert_eq!(decoder.write("&#;", 1), EntityWrite::Done(0));
        decoder.start_entity(DecodingMode::Legacy);
        assert_eq!(decoder.write("&#x;", 1), EntityWrite::Done(0));
        assert_eq!(decoder.output(), "");
        let codes: Vec<_> = decoder.sink().iter().map(|e| (e.code, e.consumed)).collect();
        assert_eq!(
            codes,
            [
                (EntityErrorCode::AbsenceOfDigitsInNumericCharacterReference, 2),
                (EntityErrorCode::AbsenceOfDigitsInNumericCharacterReference, 3),
            ]
        );
    }

    #[test]
    fn numeric_overflow_saturates_to_replacement() {
        let (consumed, out) = decode_one("&#99999999999999999999;", DecodingMode::Legacy);
        assert_eq!(consumed, 23);
        assert_eq!(out, "\u{FFFD}");
    }

    #[test]
    fn two_code_point_and_astral_values() {
        assert_eq!(decode_one("&nvlt;", DecodingMode::Legacy).1, "<\u{20D2}");
        assert_eq!(decode_one("&Afr;", DecodingMode::Legacy).1, "\u{1D504}");
        assert_eq!(decode_one("&fjlig;", DecodingMode::Legacy).1, "fj");
    }

    #[test]
    fn inline_and_trailing_word_values() {
        // `;` leaves hold their value inline, legacy names in the following word.
        assert_eq!(decode_one("&amp;", DecodingMode::Strict).1, "&");
        assert_eq!(decode_one("&AElig ", DecodingMode::Legacy), (6, "Æ".into()));
        assert_eq!(decode_one("&AElig;", DecodingMode::Strict), (7, "Æ".into()));
        assert_eq!(decode_one("&Acy;", DecodingMode::Strict).1, "\u{410}");
    }

    #[test]
    fn errors_are_reported_without_blocking_output() {
        let mut decoder = EntityDecoder::html_with_sink(Vec::new());
        decoder.start_entity(DecodingMode::Legacy);
        assert_eq!(decoder.write("&#128 ", 1), EntityWrite::Done(5));
        assert_eq!(decoder.output(), "€");
        let codes: Vec<_> = decoder.sink().iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            [
                EntityErrorCode::MissingSemicolonAfterCharacterReference,
                EntityErrorCode::ControlCharacterReference,
            ]
        );
    }

    #[test]
    fn chunked_writes_resume_named_reference() {
        let mut decoder = EntityDecoder::html();
        decoder.start_entity(DecodingMode::Legacy);
        assert_eq!(decoder.write("&am", 1), EntityWrite::NeedMoreInput);
        assert_eq!(decoder.write("p;", 0), EntityWrite::Done(5));
        assert_eq!(decoder.take_output(), "&");
    }

    #[test]
    fn chunked_writes_resume_numeric_reference() {
        let mut decoder = EntityDecoder::html();
        decoder.start_entity(DecodingMode::Legacy);
        assert_eq!(decoder.write("&#x2", 1), EntityWrite::NeedMoreInput);
        assert_eq!(decoder.write("6", 0), EntityWrite::NeedMoreInput);
        assert_eq!(decoder.write(";", 0), EntityWrite::Done(6));
        assert_eq!(decoder.take_output(), "&");
    }

    #[test]
    fn end_flushes_unterminated_references() {
        let mut decoder = EntityDecoder::html();
        decoder.start_entity(DecodingMode::Attribute);
        assert_eq!(decoder.write("&amp", 1), EntityWrite::NeedMoreInput);
        assert_eq!(decoder.end(), 4);
        assert_eq!(decoder.take_output(), "&");

        decoder.start_entity(DecodingMode::Attribute);
        assert_eq!(decoder.write("&noti", 1), EntityWrite::NeedMoreInput);
        assert_eq!(decoder.end(), 0);

        decoder.start_entity(DecodingMode::Legacy);
        assert_eq!(decoder.write("&#", 1), EntityWrite::NeedMoreInput);
        assert_eq!(decoder.end(), 0);
        assert_eq!(decoder.output(), "");
    }

    /// Every name in the trie, paired with whether it ends in `;`.
    fn all_names() -> Vec<(String, bool)> {
        let tree = &HTML_DECODE_TREE[..];
        let mut names = Vec::new();
        let mut pending = vec![(0usize, String::new())];
        while let Some((index, name)) = pending.pop() {
            let node = tree[index];
            if value_length(node) != 0 && !name.is_empty() {
                names.push((name.clone(), name.ends_with(';')));
            }
            for b in 0u8..0x80 {
                if let Some(child) = determine_branch(tree, node, branch_start(index, node), b) {
                    let mut next = name.clone();
                    next.push(char::from(b));
                    pending.push((child, next));
                }
            }
        }
        names
    }

    #[test]
    fn every_named_reference_decodes_in_full() {
        let names = all_names();
        let terminated = names.iter().filter(|(_, semi)| *semi).count();
        assert_eq!(names.len(), 2231);
        assert_eq!(terminated, 2125);

        for (name, semi) in &names {
            let input = format!("&{name}");
            let mode = if *semi {
                DecodingMode::Strict
            } else {
                DecodingMode::Legacy
            };
            let (consumed, out) = decode_one(&format!("{input} "), mode);
            assert_eq!(consumed, input.len(), "reference {input}");
            assert!(!out.is_empty(), "reference {input} decoded to nothing");
            if !*semi {
                let (_, with_semi) = decode_one(&format!("{input};"), DecodingMode::Strict);
                assert_eq!(out, with_semi, "legacy {input} differs from {input};");
            }
        }
    }

    #[test]
    fn output_accumulates_until_taken() {
        let mut decoder = EntityDecoder::html();
        decoder.start_entity(DecodingMode::Legacy);
        let _ = decoder.write("&lt;", 1);
        decoder.start_entity(DecodingMode::Legacy);
        let _ = decoder.write("&gt;", 1);
        let mut out = String::from("x");
        decoder.append_output_to(&mut out);
        assert_eq!(out, "x<>");
        assert_eq!(decoder.output(), "");
    }
}
