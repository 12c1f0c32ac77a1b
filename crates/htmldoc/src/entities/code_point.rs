//! Numeric character reference value handling.

use super::error::EntityErrorCode;

const REPLACEMENT: char = '\u{FFFD}';

/// Historical remaps for `&#0;` and the C1 control range 0x80..=0x9F.
///
/// Legacy content encoded Windows-1252 punctuation as numeric references to the C1
/// code points; browsers decode them to the Windows-1252 glyphs. Code points in the
/// range without an entry (0x81, 0x8D, 0x8F, 0x90, 0x9D) pass through unchanged.
static C1_REMAP: [(u32, char); 28] = [
    (0x00, '\u{FFFD}'),
    (0x80, '\u{20AC}'),
    (0x82, '\u{201A}'),
    (0x83, '\u{0192}'),
    (0x84, '\u{201E}'),
    (0x85, '\u{2026}'),
    (0x86, '\u{2020}'),
    (0x87, '\u{2021}'),
    (0x88, '\u{02C6}'),
    (0x89, '\u{2030}'),
    (0x8A, '\u{0160}'),
    (0x8B, '\u{2039}'),
    (0x8C, '\u{0152}'),
    (0x8E, '\u{017D}'),
    (0x91, '\u{2018}'),
    (0x92, '\u{2019}'),
    (0x93, '\u{201C}'),
    (0x94, '\u{201D}'),
    (0x95, '\u{2022}'),
    (0x96, '\u{2013}'),
    (0x97, '\u{2014}'),
    (0x98, '\u{02DC}'),
    (0x99, '\u{2122}'),
    (0x9A, '\u{0161}'),
    (0x9B, '\u{203A}'),
    (0x9C, '\u{0153}'),
    (0x9E, '\u{017E}'),
    (0x9F, '\u{0178}'),
];

/// Map a numeric reference value to the character browsers produce for it.
///
/// Surrogates and values above U+10FFFF become U+FFFD, `0` and the C1 range follow
/// [`C1_REMAP`], everything else is returned unchanged.
pub fn replace_code_point(code: u32) -> char {
    if (0xD800..=0xDFFF).contains(&code) || code > 0x10FFFF {
        return REPLACEMENT;
    }
    if code <= 0x9F
        && let Ok(i) = C1_REMAP.binary_search_by_key(&code, |&(from, _)| from)
    {
        return C1_REMAP[i].1;
    }
    char::from_u32(code).unwrap_or(REPLACEMENT)
}

/// Parse error for a numeric reference value, if any.
///
/// The value is still decoded through [`replace_code_point`]; this only classifies it.
pub fn validate_numeric_reference(code: u32) -> Option<EntityErrorCode> {
    if code == 0 {
        return Some(EntityErrorCode::NullCharacterReference);
    }
    if code > 0x10FFFF {
        return Some(EntityErrorCode::CharacterReferenceOutsideUnicodeRange);
    }
    if (0xD800..=0xDFFF).contains(&code) {
        return Some(EntityErrorCode::SurrogateCharacterReference);
    }
    if is_noncharacter(code) {
        return Some(EntityErrorCode::NoncharacterCharacterReference);
    }
    if is_reportable_control(code) {
        return Some(EntityErrorCode::ControlCharacterReference);
    }
    None
}

fn is_noncharacter(code: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&code) || (code & 0xFFFE) == 0xFFFE
}

// C0 controls other than tab, LF and FF (CR is reported), DEL and C1 controls.
fn is_reportable_control(code: u32) -> bool {
    (code < 0x20 && !matches!(code, 0x09 | 0x0A | 0x0C)) || (0x7F..=0x9F).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrogates_and_out_of_range_become_replacement() {
        assert_eq!(replace_code_point(0xD800), '\u{FFFD}');
        assert_eq!(replace_code_point(0xDFFF), '\u{FFFD}');
        assert_eq!(replace_code_point(0x110000), '\u{FFFD}');
        assert_eq!(replace_code_point(u32::MAX), '\u{FFFD}');
        assert_eq!(replace_code_point(0x10FFFF), '\u{10FFFF}');
    }

    #[test]
    fn windows_1252_remaps_apply() {
        assert_eq!(replace_code_point(0), '\u{FFFD}');
        assert_eq!(replace_code_point(0x80), '€');
        assert_eq!(replace_code_point(0x92), '\u{2019}');
        assert_eq!(replace_code_point(0x9F), 'Ÿ');
        // no historical mapping
        assert_eq!(replace_code_point(0x81), '\u{81}');
        assert_eq!(replace_code_point(0x41), 'A');
    }

    #[test]
    fn remap_table_is_sorted_for_binary_search() {
        assert!(C1_REMAP.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn numeric_validation_classifies_values() {
        assert_eq!(
            validate_numeric_reference(0),
            Some(EntityErrorCode::NullCharacterReference)
        );
        assert_eq!(
            validate_numeric_reference(0x110000),
            Some(EntityErrorCode::CharacterReferenceOutsideUnicodeRange)
        );
        assert_eq!(
            validate_numeric_reference(0xD800),
            Some(EntityErrorCode::SurrogateCharacterReference)
        );
        assert_eq!(
            validate_numeric_reference(0xFFFF),
            Some(EntityErrorCode::NoncharacterCharacterReference)
        );
        assert_eq!(
            validate_numeric_reference(0x80),
            Some(EntityErrorCode::ControlCharacterReference)
        );
        assert_eq!(
            validate_numeric_reference(0x0D),
            Some(EntityErrorCode::ControlCharacterReference)
        );
        assert_eq!(validate_numeric_reference(0x0A), None);
        assert_eq!(validate_numeric_reference(0x41), None);
        assert_eq!(validate_numeric_reference(0x1F600), None);
    }
}
