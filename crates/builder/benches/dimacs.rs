use criterion::{black_box, criterion_group, criterion_main, Criterion, SamplingMode};
use flow_builder::prelude::*;

mod common;

use common::*;

fn read_dimacs(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_dimacs");
    group.sampling_mode(SamplingMode::Flat);

    for input in [SMALL, MEDIUM, LARGE] {
        let bytes = dimacs_bytes(input);
        group.bench_function(input.name, |b| {
            b.iter(|| black_box(Dimacs::<usize>::try_from(bytes.as_slice()).unwrap()))
        });
    }

    group.finish();
}

fn write_dimacs(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_dimacs");
    group.sampling_mode(SamplingMode::Flat);

    for input in [SMALL, MEDIUM, LARGE] {
        let network = network(input);
        group.bench_function(input.name, |b| {
            b.iter_batched(
                || Vec::with_capacity(network.edges().len() * 24),
                |mut out| {
                    network.write_dimacs(0, &mut out).unwrap();
                    black_box(out)
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, read_dimacs, write_dimacs);
criterion_main!(benches);
