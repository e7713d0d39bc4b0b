//! Benchmarks for MD4 digest computation.
//!
//! Run with: `cargo bench -p md4`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;

use md4::{Md4, reverse, unreverse};

/// Generate random data of the specified size.
fn generate_random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0u8; size];
    rng.fill(&mut data[..]);
    data
}

/// Benchmark one-shot digest computation for different input sizes.
fn bench_oneshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("md4_oneshot");

    for size in [64, 512, 4096, 32768, 131072, 1048576] {
        let data = generate_random_data(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("digest", size), &data, |b, data| {
            b.iter(|| black_box(Md4::digest(black_box(data))));
        });
    }

    group.finish();
}

/// Benchmark streaming updates in protocol-sized chunks.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("md4_streaming");

    let size = 1048576;
    let data = generate_random_data(size);

    for chunk_size in [512, 4096, 32768] {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("update", chunk_size),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut hasher = Md4::new();
                    for chunk in data.chunks(chunk_size) {
                        hasher.update(black_box(chunk));
                    }
                    black_box(hasher.finalize())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the finalization-reversal transforms.
fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("md4_reverse");

    let words = Md4::digest(b"candidate digest").words();

    group.bench_function("reverse", |b| {
        b.iter(|| black_box(reverse(black_box(words))));
    });

    group.bench_function("unreverse", |b| {
        b.iter(|| black_box(unreverse(black_box(words))));
    });

    group.finish();
}

criterion_group!(benches, bench_oneshot, bench_streaming, bench_reverse);
criterion_main!(benches);
