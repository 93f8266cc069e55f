#![allow(dead_code)]

use flow_builder::prelude::*;
use rand::prelude::*;

#[derive(Clone, Copy)]
pub struct Input {
    pub name: &'static str,
    pub config: RandomNetworkConfig,
}

pub const SMALL: Input = Input {
    name: "small",
    config: RandomNetworkConfig {
        node_count: 1_000,
        edge_count: 10_000,
        max_capacity: 1_000,
        source_connections: 50,
        sink_connections: 50,
    },
};

pub const MEDIUM: Input = Input {
    name: "medium",
    config: RandomNetworkConfig {
        node_count: 10_000,
        edge_count: 100_000,
        max_capacity: 100_000,
        source_connections: 500,
        sink_connections: 500,
    },
};

pub const LARGE: Input = Input {
    name: "large",
    config: RandomNetworkConfig {
        node_count: 100_000,
        edge_count: 1_000_000,
        max_capacity: 10_000_000,
        source_connections: 5_000,
        sink_connections: 5_000,
    },
};

pub fn network(input: Input) -> FlowNetwork<usize> {
    let mut rng = StdRng::seed_from_u64(42);
    random_flow_network(input.config, &mut rng).unwrap()
}

pub fn dimacs_bytes(input: Input) -> Vec<u8> {
    let mut bytes = Vec::new();
    network(input).write_dimacs(0, &mut bytes).unwrap();
    bytes
}
