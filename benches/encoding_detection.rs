//! Benchmarks the encoding-detection read path across representative inputs:
//! BOM-prefixed UTF-8, plain UTF-8, and a GBK-encoded byte stream.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use subtrack_cli::core::encoding::detect_and_decode;

fn sample_utf8_bom(size: usize) -> Vec<u8> {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend(
        "1\n00:00:01,000 --> 00:00:02,000\nHello there, world!\n\n"
            .repeat(size)
            .into_bytes(),
    );
    bytes
}

fn sample_plain_utf8(size: usize) -> Vec<u8> {
    "1\n00:00:01,000 --> 00:00:02,000\n你好，世界！\n\n"
        .repeat(size)
        .into_bytes()
}

fn sample_gbk(size: usize) -> Vec<u8> {
    let (bytes, _, _) = encoding_rs::GBK.encode(
        &"1\n00:00:01,000 --> 00:00:02,000\n你好，世界！\n\n".repeat(size),
    );
    bytes.into_owned()
}

fn bench_encoding_detection(c: &mut Criterion) {
    let utf8_bom = sample_utf8_bom(200);
    let plain_utf8 = sample_plain_utf8(200);
    let gbk = sample_gbk(200);

    let mut group = c.benchmark_group("encoding_detection");
    group.bench_function("utf8_bom", |b| {
        b.iter(|| detect_and_decode(black_box(&utf8_bom)).unwrap())
    });
    group.bench_function("plain_utf8", |b| {
        b.iter(|| detect_and_decode(black_box(&plain_utf8)).unwrap())
    });
    group.bench_function("gbk_statistical", |b| {
        b.iter(|| detect_and_decode(black_box(&gbk)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_encoding_detection);
criterion_main!(benches);
