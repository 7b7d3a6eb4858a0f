use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use urlinker_lib::{UrlLinker, extract::markup::scan, tld};

const PLAIN_TEXT: &str = include_str!("../../fixtures/escaping/example.txt");
const TRUSTED_HTML: &str = include_str!("../../fixtures/trusted/example.html");

fn benchmark_linking(c: &mut Criterion) {
    let linker = UrlLinker::default();
    let plain_text = PLAIN_TEXT.repeat(100);
    let trusted_html = TRUSTED_HTML.repeat(100);

    c.bench_function("link_urls_and_escape_html", |b| {
        b.iter(|| linker.link_urls_and_escape_html(black_box(&plain_text)))
    });

    c.bench_function("link_urls_in_trusted_html", |b| {
        b.iter(|| linker.link_urls_in_trusted_html(black_box(&trusted_html)))
    });

    // Text without any dot never reaches the pattern
    let no_links = "Hello World! ".repeat(1000);
    c.bench_function("link_urls_and_escape_html without links", |b| {
        b.iter(|| linker.link_urls_and_escape_html(black_box(&no_links)))
    });
}

fn benchmark_scanning(c: &mut Criterion) {
    let trusted_html = TRUSTED_HTML.repeat(100);
    c.bench_function("markup::scan", |b| b.iter(|| scan(black_box(&trusted_html))));
}

fn benchmark_tld_lookup(c: &mut Criterion) {
    let tlds = tld::load();
    c.bench_function("TldSet::contains", |b| {
        b.iter(|| {
            black_box(tlds.contains(black_box(".COM")));
            black_box(tlds.contains(black_box(".domain")));
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_linking, benchmark_scanning, benchmark_tld_lookup
);
criterion_main!(benches);
