use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use vesper_core::text::{String8, StringView};

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("String Append");

    group.bench_function("inline only (16 units)", |b| {
        b.iter(|| {
            let mut s = String8::new();
            for _ in 0..16 {
                s.push(black_box(b'x'));
            }
            black_box(s.len())
        });
    });

    group.bench_function("promoted (1024 units)", |b| {
        b.iter(|| {
            let mut s = String8::new();
            for _ in 0..1024 {
                s.push(black_box(b'x'));
            }
            black_box(s.len())
        });
    });

    group.bench_function("self append doubling to 4096", |b| {
        b.iter(|| {
            let mut s = String8::from("seed data...");
            while s.len() < 4096 {
                s.append_from_within(0..s.len()).unwrap();
            }
            black_box(s.len())
        });
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let haystack: String8 = std::iter::repeat(b"abcdefgh".iter().copied())
        .take(128)
        .flatten()
        .collect();
    let mut haystack = haystack;
    haystack.append(StringView::new(b"needle"));

    let mut group = c.benchmark_group("String Search");

    group.bench_function("find at end of 1KB", |b| {
        b.iter(|| black_box(haystack.find(StringView::new(b"needle"))));
    });

    group.bench_function("content hash of 1KB", |b| {
        b.iter(|| black_box(haystack.content_hash()));
    });

    group.finish();
}

criterion_group!(benches, bench_append, bench_search);
criterion_main!(benches);
