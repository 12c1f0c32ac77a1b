use super::{OpenKind, RawAttr, Tag, TokenSink, Tokenizer, TokenizerStats, normalize_tag_name};

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl TokenSink for Recorder {
    fn text(&mut self, text: &str) {
        self.events.push(format!("text {text:?}"));
    }

    fn open_element(&mut self, tag: Tag, kind: OpenKind) {
        let mut line = format!("open {}", tag.name);
        for RawAttr { name, value } in &tag.attrs {
            match value {
                Some(value) => line.push_str(&format!(" {name}={value:?}")),
                None => line.push_str(&format!(" {name}")),
            }
        }
        if kind == OpenKind::SelfClosing {
            line.push_str(" /");
        }
        self.events.push(line);
    }

    fn close_element(&mut self) {
        self.events.push("close".to_string());
    }
}

fn run(input: &str) -> (Vec<String>, TokenizerStats) {
    let mut recorder = Recorder::default();
    let stats = Tokenizer::new(input).run(&mut recorder);
    (recorder.events, stats)
}

fn events(input: &str) -> Vec<String> {
    run(input).0
}

#[test]
fn text_and_balanced_tags() {
    assert_eq!(
        events("a<p>b</p>c"),
        ["text \"a\"", "open p", "text \"b\"", "close", "text \"c\""]
    );
}

#[test]
fn tag_and_attribute_names_are_lowercased() {
    assert_eq!(
        events("<DIV Class=\"X\"></DIV>"),
        ["open div class=\"X\"", "close"]
    );
}

#[test]
fn attribute_forms() {
    assert_eq!(
        events("<input disabled value='a b' size=3 data-x = \"y\">"),
        ["open input disabled value=\"a b\" size=\"3\" data-x=\"y\""]
    );
}

#[test]
fn quoted_value_may_hold_markup_characters() {
    assert_eq!(
        events("<a title=\"1 > 0 < 2\" href='x\"y'>t</a>"),
        [
            "open a title=\"1 > 0 < 2\" href=\"x\\\"y\"",
            "text \"t\"",
            "close"
        ]
    );
}

#[test]
fn self_closing_forms_emit_open_then_close() {
    assert_eq!(events("<foo/>"), ["open foo /", "close"]);
    assert_eq!(events("<foo />"), ["open foo /", "close"]);
    assert_eq!(events("<img src=x/>"), ["open img src=\"x/\""]);
    assert_eq!(events("<input disabled/>"), ["open input disabled /", "close"]);
    assert_eq!(events("<br>"), ["open br"]);
}

#[test]
fn whitespace_around_tag_name() {
    assert_eq!(events("< p></p>"), ["open p", "close"]);
    assert_eq!(events("<p\n></p>"), ["open p", "close"]);
    assert_eq!(events("<p\tid=1\n>"), ["open p id=\"1\""]);
}

#[test]
fn comments_and_doctypes_are_skipped() {
    assert_eq!(
        events("<!DOCTYPE html>a<!-- note -->b<![if IE]>c"),
        ["text \"a\"", "text \"b\"", "text \"c\""]
    );
}

#[test]
fn comment_names_are_suppressed() {
    assert_eq!(normalize_tag_name("!--x--"), None);
    assert_eq!(normalize_tag_name(" P/"), Some("p".to_string()));
    assert_eq!(normalize_tag_name("!-"), Some("!-".to_string()));
}

#[test]
fn embedded_lt_in_text_is_recovered() {
    let (events, stats) = run("<p> 1 < 2 </p>");
    assert_eq!(
        events,
        [
            "open p",
            "text \" 1 \"",
            "text \"< 2 \"",
            "close"
        ]
    );
    assert_eq!(stats.recoveries, 1);
}

#[test]
fn recovery_works_at_input_start() {
    assert_eq!(events("<a <b>x"), ["text \"<a \"", "open b", "text \"x\""]);
}

#[test]
fn gt_in_text_is_literal() {
    assert_eq!(
        events("<p> 2 > 1 </p>"),
        ["open p", "text \" 2 > 1 \"", "close"]
    );
}

#[test]
fn empty_tags() {
    assert_eq!(events("a<>b"), ["text \"a\"", "text \"<>b\""]);
    assert_eq!(events("a</>b"), ["text \"a\"", "text \"b\""]);
    assert_eq!(events("a<<p>"), ["text \"a\"", "text \"<\"", "open p"]);
}

#[test]
fn unterminated_markup_at_eof() {
    assert_eq!(events("a <"), ["text \"a \"", "text \"<\""]);
    assert_eq!(events("a < b"), ["text \"a \"", "text \"< b\""]);
    assert_eq!(events("x<p id"), ["text \"x\""]);
    assert_eq!(events("x<p "), ["text \"x\"", "text \"<p \""]);
    assert_eq!(events("x<p title=\"open"), ["text \"x\""]);
    assert_eq!(events("x</p"), ["text \"x\""]);
    assert_eq!(events("x<!-- open"), ["text \"x\""]);
}

#[test]
fn unmatched_end_tags_still_emit_close() {
    assert_eq!(
        events("111</p1>222</p2>"),
        ["text \"111\"", "close", "text \"222\"", "close"]
    );
}

#[test]
fn empty_attribute_value_before_gt() {
    assert_eq!(events("<a b=>t"), ["open a b=\"\"", "text \"t\""]);
}

#[test]
fn multibyte_text_is_sliced_on_char_boundaries() {
    assert_eq!(
        events("<p>日本語 < 한국어</p>"),
        ["open p", "text \"日本語 \"", "text \"< 한국어\"", "close"]
    );
}

#[test]
fn stats_count_tags() {
    let (_, stats) = run("<a><b/></a></c>");
    assert_eq!(stats.tags_opened, 2);
    assert_eq!(stats.tags_closed, 3);
    assert!(stats.steps > 0);
    assert!(stats.state_transitions > 0);
}
