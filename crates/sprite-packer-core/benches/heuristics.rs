use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sprite_packer_core::prelude::*;

fn generate_items(count: usize, min_size: u32, max_size: u32) -> Vec<Item> {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|i| {
            let w = rng.gen_range(min_size..=max_size);
            let h = rng.gen_range(min_size..=max_size);
            Item::new(format!("tex_{}", i), w, h)
        })
        .collect()
}

fn bench_single_heuristic(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_heuristic");
    let cfg = PackerConfig::default();

    for count in [100, 500, 2000] {
        let items = generate_items(count, 8, 96);
        group.throughput(Throughput::Elements(count as u64));
        for h in Heuristic::ALL {
            group.bench_with_input(BenchmarkId::new(h.as_str(), count), &items, |b, items| {
                b.iter(|| black_box(pack_with(items.clone(), h, &cfg)))
            });
        }
    }

    group.finish();
}

fn bench_best_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_fit");

    for count in [100, 500, 2000] {
        let items = generate_items(count, 8, 96);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("sequential", count), &items, |b, items| {
            let cfg = PackerConfig::builder().parallel(false).build();
            b.iter(|| black_box(pack_layout(items.clone(), cfg.clone())))
        });

        group.bench_with_input(BenchmarkId::new("parallel", count), &items, |b, items| {
            let cfg = PackerConfig::builder().parallel(true).build();
            b.iter(|| black_box(pack_layout(items.clone(), cfg.clone())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_heuristic, bench_best_fit);
criterion_main!(benches);
