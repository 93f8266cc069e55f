use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, SamplingMode};
use flow::prelude::*;
use rand::prelude::*;

fn maxflow(c: &mut Criterion) {
    let seed = 42;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut group = c.benchmark_group("maxflow");
    group
        .sample_size(10)
        .measurement_time(Duration::from_secs(30))
        .sampling_mode(SamplingMode::Flat);

    let inputs = [
        ("sparse", RandomNetworkConfig::new(100_000, 500_000, 1_000_000, 5_000, 5_000)),
        ("dense", RandomNetworkConfig::new(1_000, 200_000, 1_000, 200, 200)),
        ("bottleneck", RandomNetworkConfig::new(100_000, 500_000, 1_000_000, 10, 10)),
    ];

    for (name, config) in inputs {
        let network: FlowNetwork<usize> = random_flow_network(config, &mut rng).unwrap();

        group.bench_function(format!("{name}/dinic"), |b| {
            b.iter(|| black_box(Dinic.max_flow(&network)))
        });
        group.bench_function(format!("{name}/edmonds_karp"), |b| {
            b.iter(|| black_box(EdmondsKarp.max_flow(&network)))
        });
    }

    group.finish();
}

criterion_group!(benches, maxflow);
criterion_main!(benches);
