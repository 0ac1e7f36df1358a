use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use specpod::sp::codes::MemberCode;
use specpod::sp::encode::{history_blob, ContainerBuilder, MembersBuilder};
use specpod::sp::SpReader;
use specpod::writer::JcampWriter;

/// Binary block file with `num_points` samples and a full history record
fn generate_sp(num_points: usize) -> Vec<u8> {
    let y: Vec<f64> = (0..num_points)
        .map(|i| (i as f64 * 0.01).sin().abs())
        .collect();
    let mut history: Vec<String> = (0..39).map(|i| format!("field {}", i)).collect();
    history[12] = "UV/VIS".to_string();

    ContainerBuilder::new("benchmark spectrum")
        .main_block(
            MembersBuilder::new()
                .data_type(1)
                .abscissa_range(190.0, 190.0 + (num_points - 1) as f64 * 0.5)
                .interval(0.5)
                .num_points(num_points as i32)
                .string(MemberCode::XAxisLabel, "nm")
                .string(MemberCode::YAxisLabel, "A")
                .y_data(&y)
                .string(MemberCode::Name, "bench")
                .history(&history_blob(&history)),
        )
        .finish()
}

/// Benchmark decoding of binary block files
fn bench_sp_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("sp_parse");

    for num_points in [1_000, 10_000, 100_000] {
        let bytes = generate_sp(num_points);
        group.throughput(Throughput::Elements(num_points as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}points", num_points)),
            &bytes,
            |b, bytes| {
                let reader = SpReader::new();
                b.iter(|| reader.read_bytes(bytes).expect("parse failed"));
            },
        );
    }

    group.finish();
}

/// Benchmark JCAMP-DX rendering
fn bench_jcamp_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("jcamp_render");

    for num_points in [1_000, 10_000, 100_000] {
        let spectrum = SpReader::new()
            .read_bytes(&generate_sp(num_points))
            .expect("parse failed")
            .value;
        group.throughput(Throughput::Elements(num_points as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}points", num_points)),
            &spectrum,
            |b, spectrum| {
                let writer = JcampWriter::new();
                b.iter(|| writer.render(spectrum).expect("render failed"));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sp_parse, bench_jcamp_render);
criterion_main!(benches);
