// benches/encoding_bench.rs
//! Benchmarks for query encoding and Link header parsing.

use canvas_api::{encode_query, parse_next_link, ParamSet};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn sample_params(list_len: usize) -> ParamSet {
    ParamSet::new()
        .with("search_term", "smith")
        .with_group(
            "course",
            [("name", "Intro"), ("course_code", "I101"), ("term_id", "6")],
        )
        .with_list("include", (0..list_len).map(|i| format!("field_{}", i)))
        .with("per_page", 100)
}

fn sample_link_header(entries: usize) -> String {
    let mut parts: Vec<String> = (1..=entries)
        .map(|i| format!(r#"<https://h/api/v1/courses?page={}&per_page=100>; rel="page{}""#, i, i))
        .collect();
    parts.push(r#"<https://h/api/v1/courses?page=2&per_page=100>; rel="next""#.to_string());
    parts.join(",")
}

fn bench_query_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_encoding");

    for (name, len) in [("small", 2), ("medium", 50), ("large", 500)] {
        let params = sample_params(len);
        group.bench_with_input(BenchmarkId::new("encode_query", name), &params, |b, params| {
            b.iter(|| encode_query(black_box(params)))
        });
    }

    group.finish();
}

fn bench_link_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("link_parsing");

    for (name, entries) in [("canvas_typical", 3), ("long", 40)] {
        let header = sample_link_header(entries);
        group.bench_with_input(
            BenchmarkId::new("parse_next_link", name),
            &header,
            |b, header| b.iter(|| parse_next_link(black_box(header))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_query_encoding, bench_link_parsing);
criterion_main!(benches);
