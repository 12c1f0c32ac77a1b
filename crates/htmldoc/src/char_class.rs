//! ASCII character classes shared by the tokenizer and the entity decoder.
//!
//! Every structural character the parser reacts to is ASCII, so the predicates
//! operate on raw bytes. UTF-8 lead and continuation bytes are always >= 0x80 and
//! never match any class here.

/// HTML whitespace as understood by the tokenizer: space, tab, LF, CR, FF and VT.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0c | 0x0b)
}

#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// `a-f` / `A-F` only; digits are checked separately.
#[inline]
pub fn is_hex_letter(b: u8) -> bool {
    matches!(b, b'a'..=b'f' | b'A'..=b'F')
}

#[inline]
pub fn is_hex_digit(b: u8) -> bool {
    is_digit(b) || is_hex_letter(b)
}

#[inline]
pub fn is_alphanumeric(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

#[inline]
pub fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}

/// Characters that make an unterminated named reference inside an attribute value
/// stay literal (`&amp=` or `&ampx` in a URL query string).
#[inline]
pub fn is_attribute_invalid_end(b: u8) -> bool {
    b == b'=' || is_alphanumeric(b)
}

/// Value of an ASCII hex digit. Callers check [`is_hex_digit`] first.
#[inline]
pub(crate) fn hex_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => u32::from(b - b'0'),
        b'a'..=b'f' => u32::from(b - b'a' + 10),
        b'A'..=b'F' => u32::from(b - b'A' + 10),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_covers_vertical_tab_and_form_feed() {
        for b in [b' ', b'\t', b'\n', b'\r', 0x0c, 0x0b] {
            assert!(is_whitespace(b), "expected {b:#04x} to be whitespace");
        }
        assert!(!is_whitespace(b'a'));
        assert!(!is_whitespace(0xa0));
    }

    #[test]
    fn hex_digits_accept_both_cases() {
        assert!(is_hex_digit(b'0'));
        assert!(is_hex_digit(b'f'));
        assert!(is_hex_digit(b'F'));
        assert!(!is_hex_digit(b'g'));
        assert!(!is_hex_letter(b'9'));
        assert_eq!(hex_value(b'b'), 11);
        assert_eq!(hex_value(b'B'), 11);
        assert_eq!(hex_value(b'7'), 7);
    }

    #[test]
    fn attribute_invalid_end_is_equals_or_alphanumeric() {
        assert!(is_attribute_invalid_end(b'='));
        assert!(is_attribute_invalid_end(b'x'));
        assert!(is_attribute_invalid_end(b'3'));
        assert!(!is_attribute_invalid_end(b'&'));
        assert!(!is_attribute_invalid_end(b' '));
    }

    #[test]
    fn non_ascii_bytes_match_no_class() {
        for b in 0x80..=0xffu8 {
            assert!(!is_whitespace(b));
            assert!(!is_alphanumeric(b));
            assert!(!is_hex_digit(b));
            assert!(!is_quote(b));
        }
    }
}
