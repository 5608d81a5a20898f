use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use telex::{decode, encode};

fn bench_codec(c: &mut Criterion) {
    let text: Vec<u8> = b"THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG\n"
        .iter()
        .copied()
        .cycle()
        .take(1 << 16)
        .collect();
    let mut packed = Vec::new();
    encode::encode_all(&text[..], &mut packed).unwrap();

    let mut group = c.benchmark_group("codec");

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(packed.len());
            encode::encode_all(black_box(&text[..]), &mut out).unwrap();
            black_box(&out);
        })
    });

    group.throughput(Throughput::Bytes(packed.len() as u64));
    group.bench_function("decode", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(text.len());
            decode::decode_all(black_box(&packed[..]), &mut out).unwrap();
            black_box(&out);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
