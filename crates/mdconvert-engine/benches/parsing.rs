use criterion::{Criterion, criterion_group, criterion_main};
use mdconvert_engine::{Limits, convert, parse_document};
use pulldown_cmark::{Parser, html};
mod common;

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("mdconvert", |b| {
        b.iter(|| convert(std::hint::black_box(&content)).unwrap());
    });
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let mut out = String::new();
            html::push_html(&mut out, Parser::new(std::hint::black_box(&content)));
            out
        });
    });

    group.finish();
}

fn bench_parse_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.sample_size(10);

    let complex = common::generate_complex_markdown(50, 4);
    group.bench_function("complex_document", |b| {
        b.iter(|| parse_document(std::hint::black_box(&complex), &Limits::default()).unwrap());
    });

    let soup = common::generate_pathological_inline(10_000);
    group.bench_function("delimiter_soup", |b| {
        b.iter(|| parse_document(std::hint::black_box(&soup), &Limits::default()).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_convert, bench_parse_only);
criterion_main!(benches);
