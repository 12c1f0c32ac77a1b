use htmldoc::{DecodingMode, Mark, MarkRule, Node, ParseConfig, decode_html, parse_html};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

const NESTING_TAGS: [&str; 5] = ["div", "p", "span", "section", "em"];

#[quickcheck]
fn arbitrary_input_yields_doc_root(input: String) -> bool {
    let out = parse_html(&input, &ParseConfig::default());
    out.doc.kind() == "doc" && out.tree.max_depth >= 1
}

#[quickcheck]
fn markup_soup_never_panics(pieces: Vec<u8>) -> bool {
    // Bias toward the characters that drive state changes.
    const ALPHABET: &[u8] = b"<>/=\"' !-ab&;#x1\n";
    let input: String = pieces
        .iter()
        .map(|b| char::from(ALPHABET[usize::from(*b) % ALPHABET.len()]))
        .collect();
    let decoding = ParseConfig::new().with_decode_entities(true);
    let out = parse_html(&input, &decoding);
    out.doc.kind() == "doc"
}

#[quickcheck]
fn input_without_lt_is_one_text_node(input: String) -> TestResult {
    if input.contains('<') {
        return TestResult::discard();
    }
    let doc = parse_html(&input, &ParseConfig::default()).doc;
    let expected: &[Node] = if input.is_empty() {
        &[]
    } else {
        &[Node::Text {
            text: input.clone(),
            marks: Vec::new(),
        }]
    };
    TestResult::from_bool(doc.content() == expected)
}

/// Each byte is an op: open a tag, close the innermost one, or write a text run.
#[quickcheck]
fn balanced_tags_mirror_nesting(ops: Vec<u8>) -> bool {
    let mut html = String::new();
    let mut expected = vec![Node::element("doc")];
    let mut open_names = Vec::new();

    for op in ops {
        match op % 3 {
            0 => {
                let name = NESTING_TAGS[usize::from(op / 3) % NESTING_TAGS.len()];
                html.push('<');
                html.push_str(name);
                html.push('>');
                open_names.push(name);
                expected.push(Node::element(name));
            }
            1 if !open_names.is_empty() => {
                let name = open_names.pop().unwrap_or_default();
                html.push_str("</");
                html.push_str(name);
                html.push('>');
                close_expected(&mut expected);
            }
            _ => {
                let text = if op % 2 == 0 { "x" } else { "y z" };
                html.push_str(text);
                push_text(&mut expected, text);
            }
        }
    }
    while expected.len() > 1 {
        close_expected(&mut expected);
    }

    let doc = parse_html(&html, &ParseConfig::default()).doc;
    Some(&doc) == expected.first()
}

fn close_expected(stack: &mut Vec<Node>) {
    if let Some(node) = stack.pop()
        && let Some(content) = stack.last_mut().and_then(Node::content_mut)
    {
        content.push(node);
    }
}

fn push_text(stack: &mut [Node], text: &str) {
    let Some(content) = stack.last_mut().and_then(Node::content_mut) else {
        return;
    };
    if let Some(Node::Text { text: last, .. }) = content.last_mut() {
        last.push_str(text);
    } else {
        content.push(Node::text(text));
    }
}

#[quickcheck]
fn decoding_without_ampersand_is_identity(input: String) -> TestResult {
    if input.contains('&') {
        return TestResult::discard();
    }
    TestResult::from_bool(
        decode_html(&input, DecodingMode::Legacy) == input
            && decode_html(&input, DecodingMode::Strict) == input
            && decode_html(&input, DecodingMode::Attribute) == input,
    )
}

#[quickcheck]
fn escaped_text_decodes_back(input: String) -> bool {
    let escaped = input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;");
    [
        DecodingMode::Legacy,
        DecodingMode::Strict,
        DecodingMode::Attribute,
    ]
    .into_iter()
    .all(|mode| decode_html(&escaped, mode) == input)
}

#[quickcheck]
fn escaped_text_survives_parse_with_decoding(input: String) -> bool {
    let escaped = input.replace('&', "&amp;").replace('<', "&lt;");
    let config = ParseConfig::new().with_decode_entities(true);
    let doc = parse_html(&format!("<p>{escaped}</p>"), &config).doc;
    doc.text_content() == input
}

#[test]
fn deeply_nested_unclosed_input_does_not_overflow() {
    let input = "<div>".repeat(200_000);
    let out = parse_html(&input, &ParseConfig::default());
    assert_eq!(out.tree.unclosed_at_eof, 200_000);
    assert_eq!(out.tree.max_depth, 200_001);

    let mut depth = 0;
    let mut current = &out.doc;
    while let [child] = current.content() {
        depth += 1;
        current = child;
    }
    assert_eq!(depth, 200_000);
    drop(out);
}

#[test]
fn deeply_nested_marks_and_elements_drop_cleanly() {
    let config = ParseConfig::new().with_mark_rule(MarkRule::new("b", Mark::new("bold")));
    let input = "<p><b>x".repeat(100_000);
    let out = parse_html(&input, &config);
    assert_eq!(out.tree.unclosed_at_eof, 200_000);
    assert_eq!(out.doc.text_content().len(), 100_000);
}

#[test]
fn long_unterminated_tag_is_kept_as_text() {
    let input = format!("a<{}", "b".repeat(100_000));
    let doc = parse_html(&input, &ParseConfig::default()).doc;
    assert_eq!(doc.text_content(), input);
}
