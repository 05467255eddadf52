//! Benchmarks [`subtrack_cli::core::merge::merge`]'s boundary-sweep
//! algorithm across increasing event counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use subtrack_cli::core::formats::{Event, SubtitleFile, SubtitleFormatKind};
use subtrack_cli::core::merge::{merge, MergeOptions};

fn track_with(count: usize, offset_ms: i64) -> SubtitleFile {
    let mut file = SubtitleFile::new(SubtitleFormatKind::Srt);
    for i in 0..count {
        let start = offset_ms + (i as i64) * 2_000;
        file.events.push(Event::new(start, start + 1_800, format!("line {i}")));
    }
    file
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_boundary_sweep");
    for count in [50usize, 500, 5_000] {
        let primary = track_with(count, 0);
        let secondary = track_with(count, 120);
        let options = MergeOptions::default();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                merge(
                    black_box(Some(&primary)),
                    black_box(Some(&secondary)),
                    SubtitleFormatKind::Srt,
                    &options,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
