use criterion::{black_box, criterion_group, criterion_main, Criterion, SamplingMode};
use flow_builder::prelude::*;
use rand::prelude::*;

mod common;

use common::*;

fn random_network(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_flow_network");
    group.sampling_mode(SamplingMode::Flat);

    for input in [SMALL, MEDIUM, LARGE] {
        group.bench_function(input.name, |b| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                black_box(random_flow_network::<usize, _>(input.config, &mut rng).unwrap())
            })
        });
    }

    group.finish();
}

fn dense_network(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_flow_network");
    group.sampling_mode(SamplingMode::Flat);

    // every ordered pair of the 98 intermediate nodes is used
    let config = RandomNetworkConfig::new(100, 9_526, 100, 10, 10);
    group.bench_function("complete", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(random_flow_network::<usize, _>(config, &mut rng).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, random_network, dense_network);
criterion_main!(benches);
