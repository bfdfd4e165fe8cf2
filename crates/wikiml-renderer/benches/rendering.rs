//! Benchmarks for the render pipeline.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use wikiml_renderer::{InterwikiEntry, Settings, TargetServer, WikiParser};

/// Generate markup with headings, links, lists and a table per section.
fn generate_markup(sections: usize, items_per_list: usize) -> String {
    let mut text = String::with_capacity(sections * (300 + items_per_list * 60));
    text.push_str("=Document Title=\n");

    for i in 0..sections {
        text.push_str(&format!("==Section {i}==\n"));
        text.push_str(&format!(
            "See [[page {i}]], [[s:source {i}|the source]] and [http://example.com/{i}].\n"
        ));
        for j in 0..items_per_list {
            text.push_str(&format!("#item {j} with '''bold''' text\n##nested {j}\n"));
        }
        text.push_str("{| class=\"data\"\n! Key !! Value\n|-\n| a || ''b''\n|}\n");
        text.push_str(" preformatted [[line]]\n----\n");
    }
    text
}

fn parser() -> WikiParser {
    let settings = Settings::new(TargetServer::new("http", "en", "wikipedia", "org", "wiki"))
        .with_interwiki(InterwikiEntry::new(
            TargetServer::new("http", "www", "wikisource", "org", "wiki"),
            ["s", "wikisource"],
        ));
    WikiParser::new(settings).unwrap()
}

fn bench_render_simple(c: &mut Criterion) {
    let parser = parser();

    c.bench_function("render_simple_markup", |b| {
        b.iter(|| parser.parse("=Hello=\nSimple [[content]]."));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let parser = parser();
    let mut group = c.benchmark_group("render_by_size");

    for (sections, items) in [(5, 2), (20, 5), (50, 10)] {
        let markup = generate_markup(sections, items);
        group.throughput(Throughput::Bytes(markup.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("markup", format!("{sections}s_{items}i")),
            &markup,
            |b, markup| b.iter(|| parser.parse(markup)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_render_simple, bench_render_varying_sizes);
criterion_main!(benches);
