#![no_main]

use htmldoc::{DecodingMode, EntityError, decode_html, decode_html_with_errors};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    for mode in [
        DecodingMode::Legacy,
        DecodingMode::Strict,
        DecodingMode::Attribute,
    ] {
        let plain = decode_html(input, mode);
        let mut errors: Vec<EntityError> = Vec::new();
        let reported = decode_html_with_errors(input, mode, &mut errors);
        assert_eq!(plain, reported);
        if !input.contains('&') {
            assert_eq!(plain, input);
        }
    }
});
