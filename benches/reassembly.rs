use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use logcat_body_pretty::parsers::{ReassemblyOptions, reassemble_fragments};
use logcat_body_pretty::pipeline::{PipelineConfig, prepare_entries};

/// Generate a synthetic logcat dump: every fourth log is split over three
/// interleaved pages, the rest are single lines
fn generate_dump(num_logs: usize) -> String {
    let mut lines = Vec::with_capacity(num_logs * 2);

    for i in 0..num_logs {
        let ts = format!("2024-05-01 12:{:02}:{:02}.{:03}", (i / 60) % 60, i % 60, i % 1000);
        let prefix = format!("{} 30249-30321 AirbridgeNetwork com.example.shop D", ts);
        if i % 4 == 0 {
            for page in [3, 1, 2] {
                lines.push(format!(
                    "{} log{{page={}/3, id={}}} chunk-{}-{}",
                    prefix, page, i, i, page
                ));
            }
        } else {
            lines.push(format!("{} Activity event {}", prefix, i));
        }
    }

    lines.join("\n")
}

fn bench_reassemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("reassemble_fragments");

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let dump = generate_dump(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| reassemble_fragments(black_box(&dump), &ReassemblyOptions::default()));
        });
    }

    group.finish();
}

fn bench_prepare_entries(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare_entries");

    for size in [1_000, 10_000].iter() {
        let dump = generate_dump(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| prepare_entries(black_box(&dump), &PipelineConfig::default()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reassemble, bench_prepare_entries);
criterion_main!(benches);
