use criterion::{Criterion, black_box, criterion_group, criterion_main};
use htmldoc::{DecodingMode, HtmlDecoder, Mark, MarkRule, ParseConfig, decode_html, parse_html};

const SMALL_BLOCKS: usize = 64;
const LARGE_BLOCKS: usize = 20_000;

fn make_blocks(blocks: usize) -> String {
    let block = "<div class=box><p>hello <strong>world</strong> &amp; friends</p><img src=x></div>";
    let mut out = String::with_capacity(block.len() * blocks);
    for _ in 0..blocks {
        out.push_str(block);
    }
    out
}

fn make_entity_text(bytes: usize) -> String {
    let chunk = "a &lt; b &amp;&amp; c &gt; d &copy 2024 &#x1F600; &notit; ";
    let mut out = String::with_capacity(bytes + chunk.len());
    while out.len() < bytes {
        out.push_str(chunk);
    }
    out
}

fn make_lt_adversarial(bytes: usize) -> String {
    let mut out = String::with_capacity(bytes + 8);
    while out.len() < bytes {
        out.push_str("1 < 2 <a b ");
    }
    out
}

fn rich_text_config() -> ParseConfig {
    ParseConfig::new()
        .with_alias("p", "paragraph")
        .with_mark_rule(MarkRule::new("strong", Mark::new("bold")))
        .with_decode_entities(true)
}

fn bench_parse_small(c: &mut Criterion) {
    let input = make_blocks(SMALL_BLOCKS);
    let config = ParseConfig::default();
    c.bench_function("bench_parse_small", |b| {
        b.iter(|| black_box(parse_html(black_box(&input), &config)));
    });
}

fn bench_parse_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    let config = ParseConfig::default();
    c.bench_function("bench_parse_large", |b| {
        b.iter(|| black_box(parse_html(black_box(&input), &config)));
    });
}

fn bench_parse_large_rich_text(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    let config = rich_text_config();
    c.bench_function("bench_parse_large_rich_text", |b| {
        b.iter(|| black_box(parse_html(black_box(&input), &config)));
    });
}

fn bench_parse_lt_adversarial(c: &mut Criterion) {
    let input = make_lt_adversarial(512 * 1024);
    let config = ParseConfig::default();
    c.bench_function("bench_parse_lt_adversarial", |b| {
        b.iter(|| black_box(parse_html(black_box(&input), &config)));
    });
}

fn bench_decode_entities(c: &mut Criterion) {
    let input = make_entity_text(256 * 1024);
    c.bench_function("bench_decode_entities", |b| {
        b.iter(|| black_box(decode_html(black_box(&input), DecodingMode::Legacy)));
    });
}

fn bench_decode_reused(c: &mut Criterion) {
    let input = make_entity_text(256 * 1024);
    let mut decoder = HtmlDecoder::new(DecodingMode::Attribute);
    let mut out = String::with_capacity(input.len());
    c.bench_function("bench_decode_reused", |b| {
        b.iter(|| {
            out.clear();
            decoder.decode_into(black_box(&input), &mut out);
            black_box(out.len());
        });
    });
}

fn bench_decode_plain_text(c: &mut Criterion) {
    let input = "no references here ".repeat(16 * 1024);
    c.bench_function("bench_decode_plain_text", |b| {
        b.iter(|| black_box(decode_html(black_box(&input), DecodingMode::Legacy)));
    });
}

criterion_group!(
    benches,
    bench_parse_small,
    bench_parse_large,
    bench_parse_large_rich_text,
    bench_parse_lt_adversarial,
    bench_decode_entities,
    bench_decode_reused,
    bench_decode_plain_text
);
criterion_main!(benches);
