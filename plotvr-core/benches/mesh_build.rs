use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use plotvr_core::{Dataset, MeshBuilder, Sample};

const SAMPLE_COUNTS: [usize; 4] = [100, 1_000, 10_000, 100_000];

fn spiral(count: usize) -> Dataset {
    (0..count)
        .map(|i| {
            let t = i as f32 * 0.05;
            Sample::new(t.cos() * 5.0, t * 0.01, t.sin() * 5.0, (i % 8) as f32)
        })
        .collect()
}

fn mesh_build(c: &mut Criterion) {
    let builder = MeshBuilder::default();

    let mut g = c.benchmark_group("cube batch");
    g.sample_size(10);

    for count in SAMPLE_COUNTS {
        let dataset = spiral(count);
        g.bench_with_input(BenchmarkId::from_parameter(count), &(&builder, &dataset), |b, &(builder, dataset)| {
            b.iter(|| std::hint::black_box(builder).build(std::hint::black_box(dataset)));
        });
    }

    g.finish();
}

criterion_group!(benches, mesh_build);
criterion_main!(benches);
