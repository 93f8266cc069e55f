use std::time::Instant;

use log::info;
use num_format::{Locale, ToFormattedString};

use flow_builder::prelude::*;

mod dinic;
mod edmonds_karp;
mod residual;

use residual::Residual;

/// Computes the value of a maximum flow from the source to the sink.
pub trait MaxFlow {
    fn max_flow<NI: Idx>(&self, network: &FlowNetwork<NI>) -> u64;
}

/// Dinic's algorithm: blocking flows on BFS level graphs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dinic;

/// Edmonds-Karp: augmentation along shortest paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdmondsKarp;

impl MaxFlow for Dinic {
    fn max_flow<NI: Idx>(&self, network: &FlowNetwork<NI>) -> u64 {
        dinic::dinic(&mut Residual::new(network))
    }
}

impl MaxFlow for EdmondsKarp {
    fn max_flow<NI: Idx>(&self, network: &FlowNetwork<NI>) -> u64 {
        edmonds_karp::edmonds_karp(&mut Residual::new(network))
    }
}

/// Selects a [`MaxFlow`] implementation by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum MaxFlowAlgorithm {
    #[default]
    Dinic,
    EdmondsKarp,
}

impl MaxFlow for MaxFlowAlgorithm {
    fn max_flow<NI: Idx>(&self, network: &FlowNetwork<NI>) -> u64 {
        match self {
            MaxFlowAlgorithm::Dinic => Dinic.max_flow(network),
            MaxFlowAlgorithm::EdmondsKarp => EdmondsKarp.max_flow(network),
        }
    }
}

impl std::fmt::Display for MaxFlowAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaxFlowAlgorithm::Dinic => f.write_str("dinic"),
            MaxFlowAlgorithm::EdmondsKarp => f.write_str("edmonds-karp"),
        }
    }
}

/// Computes the maximum flow value of `network` with the given algorithm and
/// logs how long it took.
pub fn max_flow<NI, A>(network: &FlowNetwork<NI>, algorithm: A) -> u64
where
    NI: Idx,
    A: MaxFlow + std::fmt::Debug,
{
    let start = Instant::now();
    let value = algorithm.max_flow(network);
    info!(
        "Computed maximum flow {} on {} nodes and {} edges using {:?} in {:?}",
        value.to_formatted_string(&Locale::en),
        network.node_count().index().to_formatted_string(&Locale::en),
        network.edge_count().index().to_formatted_string(&Locale::en),
        algorithm,
        start.elapsed()
    );
    value
}
