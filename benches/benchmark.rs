use std::hash::BuildHasher;
use std::hash::Hasher;

use ahash::RandomState;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nthash_roll::{nthash, NtHash};
use xxhash_rust::xxh3::xxh3_64;

/// Generate a pseudo‐random DNA sequence of length `len` by
/// repeating "ACGT" and inserting occasional "N"s.
fn generate_dna(len: usize) -> String {
    const PATTERN: &str = "ACGTN";
    let mut s = String::with_capacity(len);
    let mut i = 0;
    while s.len() < len {
        s.push(PATTERN.as_bytes()[i % PATTERN.len()] as char);
        i += 1;
    }
    s.truncate(len);
    s
}

const K: usize = 31;

fn bench_rolling(c: &mut Criterion) {
    let seq = generate_dna(1_000_000);

    let mut group = c.benchmark_group("nthash_vs_others");
    group.throughput(Throughput::Bytes(seq.len() as u64));

    for canonical in [false, true] {
        let name = if canonical { "NtHash/canonical" } else { "NtHash/forward" };
        group.bench_with_input(BenchmarkId::new(name, seq.len()), &seq, |b, seq| {
            b.iter(|| {
                let mut hasher = NtHash::new(seq.as_bytes(), K).unwrap();
                while let Some(_h) = hasher.next_hash(canonical) {
                    // no-op
                }
            })
        });
    }

    group.bench_with_input(
        BenchmarkId::new("NtHash/multi4", seq.len()),
        &seq,
        |b, seq| {
            b.iter(|| {
                let mut hasher = NtHash::new(seq.as_bytes(), K).unwrap();
                let mut buf = [0u64; 4];
                while hasher.next_multi_hash_into(true, &mut buf) {
                    // no-op
                }
            })
        },
    );

    group.finish();
}

fn bench_scratch(c: &mut Criterion) {
    // the O(n·k) reference is slow; keep the input small
    let seq = generate_dna(100_000);

    let mut group = c.benchmark_group("nthash_vs_others");
    group.throughput(Throughput::Bytes(seq.len() as u64));

    group.bench_with_input(BenchmarkId::new("nthash_scratch", seq.len()), &seq, |b, seq| {
        b.iter(|| nthash(seq.as_bytes(), K))
    });

    group.finish();
}

fn bench_xxh3(c: &mut Criterion) {
    let seq = generate_dna(1_000_000);

    let mut group = c.benchmark_group("nthash_vs_others");
    group.throughput(Throughput::Bytes(seq.len() as u64));

    group.bench_with_input(
        BenchmarkId::new("xxh3_64", seq.len()),
        &seq,
        |b, seq| {
            b.iter(|| {
                let bytes = seq.as_bytes();
                // slide a k‑mer window and hash each one with xxh3_64
                for window in bytes.windows(K) {
                    let _h = xxh3_64(window);
                }
            })
        },
    );

    group.finish();
}

fn bench_ahash(c: &mut Criterion) {
    let seq = generate_dna(1_000_000);

    let mut group = c.benchmark_group("nthash_vs_others");
    group.throughput(Throughput::Bytes(seq.len() as u64));

    group.bench_with_input(
        BenchmarkId::new("ahash", seq.len()),
        &seq,
        |b, seq| {
            let state = RandomState::new();
            b.iter(|| {
                for window in seq.as_bytes().windows(K) {
                    let mut hasher = state.build_hasher();
                    hasher.write(window);
                    let _h = hasher.finish();
                }
            })
        },
    );

    group.finish();
}

criterion_group!(benches, bench_rolling, bench_scratch, bench_xxh3, bench_ahash);
criterion_main!(benches);
