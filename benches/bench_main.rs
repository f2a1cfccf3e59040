use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lzhuf::{compress_slice, decompress_slice};

/// Deterministic pseudo-random bytes from a linear congruential generator,
/// representing the worst case for the match finder.
fn generate_random(size: usize) -> Vec<u8> {
    let mut vec = Vec::with_capacity(size);
    let mut seed: u64 = 0xDEAD_BEEF;
    for _ in 0..size {
        seed = (seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223)) & 0xFFFF_FFFF;
        vec.push((seed >> 24) as u8);
    }
    vec
}

/// Repeated standard text, representing typical compressible data.
fn generate_text(size: usize) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. ";
    let mut vec = Vec::with_capacity(size);
    while vec.len() < size {
        vec.extend_from_slice(text);
    }
    vec.truncate(size);
    vec
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    for (name, data) in [
        ("text_64k", generate_text(64 * 1024)),
        ("random_64k", generate_random(64 * 1024)),
    ] {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| compress_slice(black_box(&data)).unwrap())
        });
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");
    for (name, raw) in [
        ("text_64k", generate_text(64 * 1024)),
        ("random_64k", generate_random(64 * 1024)),
    ] {
        let compressed = compress_slice(&raw).unwrap();
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| decompress_slice(black_box(&compressed)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
