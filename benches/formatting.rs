// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for template substitution.
//!
//! Measures the performance of:
//! - Scanning a message with no placeholders (the common case)
//! - Named and positional substitution
//! - Recursive expansion through nested replacement values

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use widh_site::i18n::{format, FormatDict};

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let named = FormatDict::map([("name", "widh"), ("city", "Seoul")]);

    group.bench_function("no_placeholders", |b| {
        b.iter(|| {
            black_box(format(
                "A plain sentence with nothing to substitute at all.",
                &named,
            ));
        });
    });

    group.bench_function("named", |b| {
        b.iter(|| {
            black_box(format("Hello, [[name]] from [[city]]!", &named));
        });
    });

    let positional = FormatDict::seq(["1", "1", "2"]);
    group.bench_function("positional", |b| {
        b.iter(|| {
            black_box(format("[[]] plus [[]] is [[]]", &positional));
        });
    });

    let recursive = FormatDict::map([
        ("outer", "a [[middle]] value"),
        ("middle", "deeply [[inner]]"),
        ("inner", "nested"),
    ]);
    group.bench_function("recursive", |b| {
        b.iter(|| {
            black_box(format("Resolving [[outer]] here", &recursive));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
