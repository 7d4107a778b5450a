//! Conversion benchmarks
//!
//! Run with: cargo bench --bench conversion_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rutags_core::{convert, tokenize, SchemaVersion};
use std::hint::black_box;

const TAGS: &[(&str, &str)] = &[
    ("noun", "S,муж,неод=им,ед"),
    ("verb", "V,сов,пе=непрош,ед,изъяв,3-л"),
    ("participle", "V,сов,пе=прош,ед,кр,муж,страд,прич,PRTS"),
    ("proper", "S,гео,жен,неод=им,ед"),
    ("garbage", ",,, ==||( )"),
];

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for version in SchemaVersion::ALL {
        // table construction is not part of the measured loop
        convert("", version);

        for (name, tag) in TAGS {
            group.bench_with_input(BenchmarkId::new(version.code(), name), tag, |b, tag| {
                b.iter(|| convert(black_box(tag), version))
            });
        }
    }

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box("V,сов,пе=прош,ед,кр,муж,страд,прич,PRTS")))
    });
}

criterion_group!(benches, bench_convert, bench_tokenize);
criterion_main!(benches);
