#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Matching benchmarks for tagmatch.
//!
//! Measures tag dispatch through handler tables and first-match search
//! across pattern tables of increasing size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tagmatch::{patternmatch, HandlerTable, Pattern, PatternTable, Record, ResultMapping};

/// Generate N tags `V0..VN`.
fn generate_n_tags(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("V{i}")).collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for n in [2, 16, 128] {
        let tags = generate_n_tags(n);
        let records: Vec<Record> = tags.iter().map(Record::new).collect();
        let mut table = HandlerTable::new();
        for (i, tag) in tags.iter().enumerate() {
            table = table.on(tag.as_str(), move |_: &Record| i);
        }
        let table = table.seal_for(&tags).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| {
                for record in records {
                    black_box(table.apply(black_box(record)).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_first_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_match");
    for n in [2_usize, 16, 128] {
        let mut patterns = PatternTable::new();
        let mut results = ResultMapping::new();
        for i in 0..n {
            let name = format!("p{i}");
            let modulus = i64::try_from(i + 2).unwrap();
            patterns = patterns.with(name.clone(), Pattern::predicate(move |x: &i64| x % modulus == 1));
            results = results.on(name, move |_: i64| i);
        }
        let matcher = patternmatch(patterns).results(results).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(n), &matcher, |b, matcher| {
            b.iter(|| {
                for x in 0..64_i64 {
                    black_box(matcher.run(black_box(&x)));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_first_match);
criterion_main!(benches);
