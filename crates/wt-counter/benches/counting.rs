//! Word counting benchmarks.
//!
//! Compares the lane scan in `count_words` with plain tokenizing, and
//! measures building a `WordIndex` over text with a realistic vocabulary.

use std::fmt::Write;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use wt_core::CountConfig;
use wt_counter::{Tokens, WordCounter, count_words};

const VOCABULARY: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "and", "a", "river",
    "runs", "through", "valley", "under", "bright", "sky", "while", "birds", "sing",
];

/// Builds `lines` lines of pseudo-random prose from a fixed vocabulary.
fn corpus(lines: usize) -> String {
    let mut text = String::new();
    let mut seed: usize = 17;
    for _ in 0..lines {
        for _ in 0..12 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let word = VOCABULARY[(seed >> 8) % VOCABULARY.len()];
            let _ = write!(text, "{word} ");
        }
        text.push('\n');
    }
    text
}

fn bench_count_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_words");
    for lines in [100, 10_000] {
        let text = corpus(lines);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("lanes", lines), &text, |b, text| {
            b.iter(|| count_words(black_box(text)));
        });
        group.bench_with_input(BenchmarkId::new("tokens", lines), &text, |b, text| {
            b.iter(|| Tokens::new(black_box(text)).count());
        });
    }
    group.finish();
}

fn bench_word_index(c: &mut Criterion) {
    let counter = WordCounter::new(CountConfig::default());
    let mut group = c.benchmark_group("word_index");
    for lines in [100, 10_000] {
        let text = corpus(lines);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("count_text", lines), &text, |b, text| {
            b.iter(|| counter.count_text(black_box(text)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_count_words, bench_word_index);
criterion_main!(benches);
