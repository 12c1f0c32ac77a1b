//! Whole-string character reference decoding.
//!
//! Contract:
//! - Literal text between references is copied verbatim.
//! - A `&` that does not start a reference (decoder consumed 0) is kept and scanning
//!   resumes right after it.
//! - Input without `&` is copied without running the decoder.

use memchr::memchr;

use super::DecodingMode;
use super::decoder::{EntityDecoder, EntityWrite};
use super::error::EntityErrorSink;

/// Decode every character reference in `input`.
pub fn decode_html(input: &str, mode: DecodingMode) -> String {
    HtmlDecoder::new(mode).decode(input)
}

pub fn decode_html_strict(input: &str) -> String {
    decode_html(input, DecodingMode::Strict)
}

pub fn decode_html_attribute(input: &str) -> String {
    decode_html(input, DecodingMode::Attribute)
}

/// Like [`decode_html`], reporting diagnostics to `sink`.
pub fn decode_html_with_errors<S: EntityErrorSink>(
    input: &str,
    mode: DecodingMode,
    sink: S,
) -> String {
    HtmlDecoder::with_sink(mode, sink).decode(input)
}

/// Reusable decoder bound to one mode.
///
/// Holds a single [`EntityDecoder`], so one instance serves many strings without
/// reallocating its scratch buffer. Not for concurrent use.
pub struct HtmlDecoder<S = ()> {
    decoder: EntityDecoder<'static, S>,
    mode: DecodingMode,
}

impl HtmlDecoder<()> {
    pub fn new(mode: DecodingMode) -> Self {
        Self::with_sink(mode, ())
    }
}

impl<S: EntityErrorSink> HtmlDecoder<S> {
    pub fn with_sink(mode: DecodingMode, sink: S) -> Self {
        Self {
            decoder: EntityDecoder::html_with_sink(sink),
            mode,
        }
    }

    pub fn mode(&self) -> DecodingMode {
        self.mode
    }

    pub fn decode(&mut self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.decode_into(input, &mut out);
        out
    }

    /// Append the decoded form of `input` to `out`.
    pub fn decode_into(&mut self, input: &str, out: &mut String) {
        let bytes = input.as_bytes();
        // Start of literal text not yet copied to `out`.
        let mut last = 0;
        let mut search = 0;

        while let Some(rel) = memchr(b'&', &bytes[search..]) {
            let amp = search + rel;
            out.push_str(&input[last..amp]);

            self.decoder.start_entity(self.mode);
            let consumed = match self.decoder.write(input, amp + 1) {
                EntityWrite::Done(consumed) => consumed,
                EntityWrite::NeedMoreInput => self.decoder.end(),
            };
            self.decoder.append_output_to(out);

            // References are ASCII, so `amp + consumed` stays on a char boundary.
            if consumed == 0 {
                last = amp;
                search = amp + 1;
            } else {
                last = amp + consumed;
                search = last;
            }
        }

        out.push_str(&input[last..]);
    }

    pub fn sink(&self) -> &S {
        self.decoder.sink()
    }

    pub fn into_sink(self) -> S {
        self.decoder.into_sink()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EntityError, EntityErrorCode};

    #[test]
    fn decodes_basic_references() {
        assert_eq!(decode_html("&amp;", DecodingMode::Legacy), "&");
        assert_eq!(decode_html("&#65;", DecodingMode::Legacy), "A");
        assert_eq!(decode_html("&#x41;", DecodingMode::Legacy), "A");
        assert_eq!(
            decode_html("a &lt; b &gt; c", DecodingMode::default()),
            "a < b > c"
        );
    }

    #[test]
    fn strict_leaves_unterminated_references() {
        assert_eq!(decode_html_strict("&notit"), "&notit");
        assert_eq!(decode_html_strict("&notit;"), "&notit;");
        assert_eq!(decode_html_strict("&not;it"), "¬it");
        assert_eq!(decode_html_strict("&#65"), "&#65");
    }

    #[test]
    fn legacy_takes_longest_prefix() {
        assert_eq!(decode_html("&notit", DecodingMode::Legacy), "¬it");
        assert_eq!(decode_html("&notin;", DecodingMode::Legacy), "∉");
        assert_eq!(decode_html("&ampamp;", DecodingMode::Legacy), "&amp;");
    }

    #[test]
    fn attribute_mode_keeps_query_strings() {
        assert_eq!(
            decode_html_attribute("/p?a=1&copy=2&amp;x"),
            "/p?a=1&copy=2&x"
        );
        assert_eq!(decode_html_attribute("&copy 2024"), "© 2024");
        assert_eq!(decode_html_attribute("&amp"), "&");
    }

    #[test]
    fn unmatched_ampersands_are_kept() {
        assert_eq!(decode_html("&", DecodingMode::Legacy), "&");
        assert_eq!(decode_html("&&&", DecodingMode::Legacy), "&&&");
        assert_eq!(decode_html("a & b", DecodingMode::Legacy), "a & b");
        assert_eq!(decode_html("&&lt;", DecodingMode::Legacy), "&<");
        assert_eq!(decode_html("&#;", DecodingMode::Legacy), "&#;");
        assert_eq!(decode_html("&#x", DecodingMode::Legacy), "&#x");
        assert_eq!(decode_html("&zz;", DecodingMode::Legacy), "&zz;");
    }

    #[test]
    fn input_without_ampersand_is_unchanged() {
        let input = "plain text, ünïcödé";
        assert_eq!(decode_html(input, DecodingMode::Strict), input);
    }

    #[test]
    fn multibyte_text_around_references() {
        assert_eq!(
            decode_html("日本&amp;語&#x1F600;!", DecodingMode::Legacy),
            "日本&語😀!"
        );
    }

    #[test]
    fn errors_reach_the_sink() {
        let mut errors: Vec<EntityError> = Vec::new();
        let out = decode_html_with_errors("&amp &#0; &#;", DecodingMode::Legacy, &mut errors);
        assert_eq!(out, "& \u{FFFD} &#;");
        let codes: Vec<_> = errors.iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            [
                EntityErrorCode::MissingSemicolonAfterCharacterReference,
                EntityErrorCode::NullCharacterReference,
                EntityErrorCode::AbsenceOfDigitsInNumericCharacterReference,
            ]
        );
    }

    #[test]
    fn reusable_decoder_keeps_mode() {
        let mut decoder = HtmlDecoder::new(DecodingMode::Strict);
        assert_eq!(decoder.mode(), DecodingMode::Strict);
        assert_eq!(decoder.decode("&lt;&gt"), "<&gt");
        assert_eq!(decoder.decode("&quot;"), "\"");
        let mut out = String::from(">");
        decoder.decode_into("&amp;", &mut out);
        assert_eq!(out, ">&");
    }
}
