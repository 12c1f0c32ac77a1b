#![no_main]

use htmldoc::{Mark, MarkRule, ParseConfig, parse_html};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let plain = parse_html(input, &ParseConfig::default());
    assert_eq!(plain.doc.kind(), "doc");

    let config = ParseConfig::new()
        .with_alias("p", "paragraph")
        .with_alias("div > p", "block")
        .with_self_close("note")
        .with_mark_rule(MarkRule::new("b", Mark::new("bold")))
        .with_mark_rule(MarkRule::new("span", Mark::new("highlight")).with_attr("type", "hl"))
        .with_decode_entities(true);
    let rich = parse_html(input, &config);
    assert_eq!(rich.doc.kind(), "doc");
});
