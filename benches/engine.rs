use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rowca::{GenerationEngine, RuleTable, Seed};

fn make_row(len: usize) -> Vec<u8> {
    (0..len).map(|i| u8::from(i % 3 == 0)).collect()
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for size in [80, 1024, 65536] {
        let row = make_row(size);

        group.bench_with_input(BenchmarkId::new("rule30", size), &row, |b, row| {
            b.iter_batched(
                || GenerationEngine::new(row.len(), row, RuleTable::from(30)).unwrap(),
                |mut game| game.advance(),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("rule110_x100", size), &size, |b, &size| {
            let seeded = Seed::Single.create_row(size);
            let mut game = GenerationEngine::new(size, &seeded, RuleTable::from(110)).unwrap();
            b.iter(|| game.advance_by(100));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
