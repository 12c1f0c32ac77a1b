use crate::snapshot::{TreeSnapshot, assert_tree_eq};
use crate::types::{AttrValue, Attrs, Mark, Node};
use crate::{MarkRule, ParseConfig, parse_html};

fn parse(input: &str) -> Node {
    parse_html(input, &ParseConfig::default()).doc
}

fn lines(doc: &Node) -> Vec<String> {
    TreeSnapshot::new(doc).as_lines().to_vec()
}

fn el(name: &str, content: Vec<Node>) -> Node {
    Node::Element {
        name: name.to_string(),
        attrs: Attrs::new(),
        content,
    }
}

fn marked(text: &str, marks: Vec<Mark>) -> Node {
    Node::Text {
        text: text.to_string(),
        marks,
    }
}

fn bold_config() -> ParseConfig {
    ParseConfig::new()
        .with_mark_rule(MarkRule::new("strong", Mark::new("bold")))
        .with_mark_rule(MarkRule::new("b", Mark::new("bold")))
        .with_mark_rule(MarkRule::new("i", Mark::new("italic")))
}

#[test]
fn balanced_tags_nest() {
    let doc = parse("<div><p>a</p><p>b<span>c</span></p></div>");
    assert_tree_eq(
        &el(
            "doc",
            vec![el(
                "div",
                vec![
                    el("p", vec![Node::text("a")]),
                    el("p", vec![Node::text("b"), el("span", vec![Node::text("c")])]),
                ],
            )],
        ),
        &doc,
    );
}

#[test]
fn unmatched_end_tags_are_dropped() {
    let out = parse_html("111</p1>222</p2>", &ParseConfig::default());
    assert_tree_eq(&el("doc", vec![Node::text("111222")]), &out.doc);
    assert_eq!(out.tree.dropped_end_tags, 2);
}

#[test]
fn missing_end_tags_nest_following_content() {
    let out = parse_html("<p1>111<p2>222", &ParseConfig::default());
    assert_tree_eq(
        &el(
            "doc",
            vec![el(
                "p1",
                vec![Node::text("111"), el("p2", vec![Node::text("222")])],
            )],
        ),
        &out.doc,
    );
    assert_eq!(out.tree.unclosed_at_eof, 2);
    assert_eq!(out.tree.max_depth, 3);
}

#[test]
fn builtin_self_closing_tags_take_no_content() {
    let doc = parse("<p>11<br>22</p>");
    assert_tree_eq(
        &el(
            "doc",
            vec![el(
                "p",
                vec![Node::text("11"), el("br", vec![]), Node::text("22")],
            )],
        ),
        &doc,
    );
    assert_eq!(
        lines(&parse("<img src=a.png><hr/><br />x")),
        ["<doc>", "  <img src=\"a.png\">", "  <hr>", "  <br>", "  \"x\""]
    );
}

#[test]
fn slash_closed_tags_are_closed_by_their_gt() {
    assert_eq!(
        lines(&parse("<p>11<foo/>22</p>")),
        ["<doc>", "  <p>", "    \"11\"", "    <foo>", "    \"22\""]
    );
    assert_eq!(lines(&parse("<foo />x")), ["<doc>", "  <foo>", "  \"x\""]);
}

#[test]
fn mark_rule_turns_tag_into_mark() {
    let doc = parse_html("<p><strong>bold</strong></p>", &bold_config()).doc;
    assert_tree_eq(
        &el(
            "doc",
            vec![el("p", vec![marked("bold", vec![Mark::new("bold")])])],
        ),
        &doc,
    );
}

#[test]
fn mark_rule_with_attrs_keeps_unmatched_attrs() {
    let config = ParseConfig::new().with_mark_rule(
        MarkRule::new("span", Mark::new("highlight")).with_attr("type", "highlight"),
    );
    let doc = parse_html(
        "<span type=\"highlight\" color=\"pink\">x</span><span type=\"note\">y</span>",
        &config,
    )
    .doc;
    assert_eq!(
        lines(&doc),
        [
            "<doc>",
            "  \"x\" [highlight{ color=\"pink\" }]",
            "  <span type=\"note\">",
            "    \"y\"",
        ]
    );
}

#[test]
fn nested_marks_accumulate_in_order() {
    let doc = parse_html("<i>a<b>b</b>c</i>d", &bold_config()).doc;
    assert_tree_eq(
        &el(
            "doc",
            vec![
                marked("a", vec![Mark::new("italic")]),
                marked("b", vec![Mark::new("italic"), Mark::new("bold")]),
                marked("c", vec![Mark::new("italic")]),
                Node::text("d"),
            ],
        ),
        &doc,
    );
}

#[test]
fn equal_marks_from_different_rules_merge_text() {
    let doc = parse_html("<strong>aa</strong><b>bb</b>", &bold_config()).doc;
    assert_tree_eq(
        &el("doc", vec![marked("aabb", vec![Mark::new("bold")])]),
        &doc,
    );
}

#[test]
fn marked_text_lands_in_nearest_element() {
    let doc = parse_html("<p>a<b>b<span>c</span>d</b>e</p>", &bold_config()).doc;
    assert_eq!(
        lines(&doc),
        [
            "<doc>",
            "  <p>",
            "    \"a\"",
            "    \"b\" [bold]",
            "    <span>",
            "      \"c\" [bold]",
            "    \"d\" [bold]",
            "    \"e\"",
        ]
    );
}

#[test]
fn alias_renames_tags() {
    let config = ParseConfig::new().with_alias("p", "paragraph");
    assert_eq!(
        lines(&parse_html("<p>x</p>", &config).doc),
        ["<doc>", "  <paragraph>", "    \"x\""]
    );
}

#[test]
fn parent_qualified_alias() {
    let config = ParseConfig::new()
        .with_alias("p", "paragraph")
        .with_alias("audio > p", "audioText");
    assert_eq!(
        lines(&parse_html("<audio><p>a</p></audio><p>b</p>", &config).doc),
        [
            "<doc>",
            "  <audio>",
            "    <audioText>",
            "      \"a\"",
            "  <paragraph>",
            "    \"b\"",
        ]
    );
}

#[test]
fn self_close_config_applies_to_aliased_name() {
    let config = ParseConfig::new()
        .with_alias("br", "headBreak")
        .with_self_close("headBreak")
        .with_self_close("note");
    assert_eq!(
        lines(&parse_html("<br>a<note>b", &config).doc),
        ["<doc>", "  <headBreak>", "  \"a\"", "  <note>", "  \"b\""]
    );
}

#[test]
fn source_name_keeps_builtin_self_closing() {
    let config = ParseConfig::new().with_alias("br", "lineBreak");
    assert_eq!(
        lines(&parse_html("<br>a", &config).doc),
        ["<doc>", "  <lineBreak>", "  \"a\""]
    );
}

#[test]
fn mark_rules_match_resolved_name() {
    let config = ParseConfig::new()
        .with_alias("em", "i")
        .with_mark_rule(MarkRule::new("i", Mark::new("italic")));
    assert_tree_eq(
        &el("doc", vec![marked("x", vec![Mark::new("italic")])]),
        &parse_html("<em>x</em>", &config).doc,
    );
}

#[test]
fn attributes_are_typed() {
    let doc = parse("<input n=123 neg=\"-4\" f='1.5' s=\"123.\" t=\".45\" sp=\"7 \" disabled NAME=x>");
    let attrs = doc.content()[0].attrs().cloned().unwrap_or_default();
    assert_eq!(attrs.get("n"), Some(&AttrValue::Number(123.0)));
    assert_eq!(attrs.get("neg"), Some(&AttrValue::Number(-4.0)));
    assert_eq!(attrs.get("f"), Some(&AttrValue::Number(1.5)));
    assert_eq!(attrs.get("s"), Some(&AttrValue::from("123.")));
    assert_eq!(attrs.get("t"), Some(&AttrValue::from(".45")));
    assert_eq!(attrs.get("sp"), Some(&AttrValue::Number(7.0)));
    assert_eq!(attrs.get("disabled"), Some(&AttrValue::Bool(true)));
    assert_eq!(attrs.get("name"), Some(&AttrValue::from("x")));
}

#[test]
fn later_duplicate_attribute_wins() {
    let doc = parse("<a x=1 x=2>");
    assert_eq!(
        doc.content()[0].attrs().and_then(|a| a.get("x")),
        Some(&AttrValue::Number(2.0))
    );
}

#[test]
fn embedded_lt_and_gt_stay_in_text() {
    assert_tree_eq(
        &el("doc", vec![el("p", vec![Node::text(" 1 < 2 ")])]),
        &parse("<p> 1 < 2 </p>"),
    );
    assert_tree_eq(
        &el("doc", vec![el("p", vec![Node::text(" 2 > 1 ")])]),
        &parse("<p> 2 > 1 </p>"),
    );
}

#[test]
fn comments_produce_nothing() {
    assert_tree_eq(
        &el("doc", vec![el("p", vec![Node::text("ab")])]),
        &parse("<!DOCTYPE html><p>a<!-- c -->b</p>"),
    );
}

#[test]
fn whitespace_inside_tags() {
    assert_eq!(lines(&parse("< p></p>")), ["<doc>", "  <p>"]);
    assert_eq!(lines(&parse("<p\n></p>")), ["<doc>", "  <p>"]);
}

#[test]
fn closing_never_pops_the_root() {
    let out = parse_html("</a></b>x<p>y</p></p></p>z", &ParseConfig::default());
    assert_eq!(
        lines(&out.doc),
        ["<doc>", "  \"x\"", "  <p>", "    \"y\"", "  \"z\""]
    );
    assert_eq!(out.tree.dropped_end_tags, 4);
    assert_eq!(out.tree.unclosed_at_eof, 0);
}

#[test]
fn entities_are_kept_verbatim_by_default() {
    assert_tree_eq(
        &el("doc", vec![Node::text("a &amp; b")]),
        &parse("a &amp; b"),
    );
}

#[test]
fn entity_decoding_when_enabled() {
    let config = ParseConfig::new().with_decode_entities(true);
    let doc = parse_html(
        "<p title=\"&lt;x&gt;\" href=\"?a=1&copy=2\" n=\"&#49;\">&lt;b&gt; &amp fish</p>",
        &config,
    )
    .doc;
    let p = &doc.content()[0];
    let attrs = p.attrs().cloned().unwrap_or_default();
    assert_eq!(attrs.get("title"), Some(&AttrValue::from("<x>")));
    assert_eq!(attrs.get("href"), Some(&AttrValue::from("?a=1&copy=2")));
    assert_eq!(attrs.get("n"), Some(&AttrValue::Number(1.0)));
    assert_eq!(p.text_content(), "<b> & fish");
}

#[test]
fn tokenizer_stats_are_reported() {
    let out = parse_html("<p> 1 < 2 </p>", &ParseConfig::default());
    assert_eq!(out.tokenizer.recoveries, 1);
    assert_eq!(out.tokenizer.tags_opened, 1);
    assert_eq!(out.tokenizer.tags_closed, 1);
}

#[test]
fn empty_input_yields_empty_doc() {
    let out = parse_html("", &ParseConfig::default());
    assert_tree_eq(&el("doc", vec![]), &out.doc);
    assert_eq!(out.tree.max_depth, 1);
}
