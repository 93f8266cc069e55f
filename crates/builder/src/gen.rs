//! Random flow network generation.
//!
//! Networks are generated in two phases. First, the source is connected to a
//! random subset of intermediate nodes and a (possibly overlapping) random
//! subset of intermediate nodes is connected to the sink. Second, the
//! remaining edge budget is spent on random edges between distinct
//! intermediate nodes. Parallel edges are never created.
//!
//! Internally, the source is node `0`, the sink is node `n - 1` and the
//! intermediate nodes are `1..n - 1`. Before the network is returned, nodes
//! are relabeled to the DIMACS ids used by downstream tools: the source
//! becomes `1`, the sink becomes `2` and intermediate node `i` becomes `i + 2`.

use fxhash::FxHashSet;
use log::{debug, info};
use num_format::{Locale, ToFormattedString};
use rand::{seq::index::sample, Rng};

use crate::{
    index::Idx,
    network::{Edge, FlowNetwork},
    Error,
};

/// Parameters of a random flow network.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct RandomNetworkConfig {
    /// Total number of nodes, including source and sink.
    #[cfg_attr(feature = "clap", arg(long))]
    pub node_count: usize,
    /// Total number of edges.
    #[cfg_attr(feature = "clap", arg(long))]
    pub edge_count: usize,
    /// Capacities are drawn uniformly from `[1, max_capacity]`.
    #[cfg_attr(feature = "clap", arg(long))]
    pub max_capacity: u64,
    /// Number of intermediate nodes the source is connected to.
    #[cfg_attr(feature = "clap", arg(long))]
    pub source_connections: usize,
    /// Number of intermediate nodes that are connected to the sink.
    #[cfg_attr(feature = "clap", arg(long))]
    pub sink_connections: usize,
}

impl RandomNetworkConfig {
    pub fn new(
        node_count: usize,
        edge_count: usize,
        max_capacity: u64,
        source_connections: usize,
        sink_connections: usize,
    ) -> Self {
        Self {
            node_count,
            edge_count,
            max_capacity,
            source_connections,
            sink_connections,
        }
    }

    /// Checks that a network with these parameters can be generated.
    pub fn validate(&self) -> Result<(), Error> {
        let Self {
            node_count,
            edge_count,
            max_capacity,
            source_connections,
            sink_connections,
        } = *self;

        if node_count < 2 {
            return Err(Error::invalid_parameters(
                "a flow network requires at least two nodes",
            ));
        }

        if source_connections < 1 || sink_connections < 1 {
            return Err(Error::invalid_parameters(
                "the source and sink must be connected to at least one node",
            ));
        }

        let intermediate = node_count - 2;
        if source_connections + sink_connections > intermediate {
            return Err(Error::invalid_parameters(format!(
                "too many source or sink connections ({source_connections} + {sink_connections}) \
                 for {intermediate} intermediate nodes"
            )));
        }

        let min_edges = source_connections + sink_connections;
        if edge_count < min_edges {
            return Err(Error::invalid_parameters(format!(
                "number of edges ({edge_count}) is too small, it must be at least {min_edges}"
            )));
        }

        if max_capacity < 1 {
            return Err(Error::invalid_parameters(
                "the maximum capacity must be at least 1",
            ));
        }

        let filler = edge_count - min_edges;
        let pairs = intermediate_pairs(intermediate);
        if filler > pairs {
            return Err(Error::invalid_parameters(format!(
                "number of edges ({edge_count}) is too large, at most {} edges fit between \
                 {intermediate} intermediate nodes",
                min_edges.saturating_add(pairs)
            )));
        }

        Ok(())
    }
}

/// Number of ordered pairs `(u, v)` with `u != v` among `k` nodes.
fn intermediate_pairs(k: usize) -> usize {
    k.saturating_mul(k.saturating_sub(1))
}

/// Generates a random flow network.
///
/// The returned network has exactly `config.node_count` nodes and
/// `config.edge_count` edges, source `1` and sink `2`. Every capacity lies in
/// `[1, config.max_capacity]` and no ordered node pair is connected twice.
///
/// # Example
///
/// ```
/// use flow_builder::prelude::*;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let config = RandomNetworkConfig::new(10, 20, 100, 3, 3);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let network: FlowNetwork<u32> = random_flow_network(config, &mut rng).unwrap();
///
/// assert_eq!(network.node_count(), 10);
/// assert_eq!(network.edge_count(), 20);
/// assert_eq!(network.source(), 1);
/// assert_eq!(network.sink(), 2);
/// ```
pub fn random_flow_network<NI, R>(
    config: RandomNetworkConfig,
    rng: &mut R,
) -> Result<FlowNetwork<NI>, Error>
where
    NI: Idx,
    R: Rng + ?Sized,
{
    config.validate()?;

    let node_count = NI::try_new(config.node_count)
        .ok_or_else(|| Error::invalid_parameters("node count exceeds index type"))?;

    let start = std::time::Instant::now();

    let RandomNetworkConfig {
        node_count: n,
        edge_count,
        max_capacity,
        source_connections,
        sink_connections,
    } = config;

    let source = 0;
    let sink = n - 1;
    let intermediate = n - 2;

    let mut edges: Vec<(usize, usize, u64)> = Vec::with_capacity(edge_count);

    for target in sample(rng, intermediate, source_connections).into_iter() {
        edges.push((source, target + 1, rng.gen_range(1..=max_capacity)));
    }

    for origin in sample(rng, intermediate, sink_connections).into_iter() {
        edges.push((origin + 1, sink, rng.gen_range(1..=max_capacity)));
    }

    let remaining = edge_count - edges.len();
    let free_pairs = intermediate_pairs(intermediate);

    // Above half density, draw from the explicit pair set.
    let filler = if remaining > free_pairs / 2 {
        debug!("drawing {remaining} of {free_pairs} intermediate pairs from the explicit pair set");
        dense_filler(rng, intermediate, remaining)
    } else {
        sparse_filler(rng, intermediate, remaining)
    };

    for (u, v) in filler {
        edges.push((u, v, rng.gen_range(1..=max_capacity)));
    }

    let edges = edges
        .into_iter()
        .map(|(u, v, c)| Edge::new(relabel::<NI>(u, n), relabel::<NI>(v, n), c))
        .collect::<Vec<_>>();

    let network = FlowNetwork::new(node_count, NI::new(1), NI::new(2), edges)?;

    info!(
        "Generated network with {} nodes and {} edges in {:?}",
        n.to_formatted_string(&Locale::en),
        edge_count.to_formatted_string(&Locale::en),
        start.elapsed()
    );

    Ok(network)
}

/// Maps an internal node id to its DIMACS id.
///
/// The source `0` becomes `1`, the sink `n - 1` becomes `2` and every
/// intermediate node `i` becomes `i + 2`, which keeps their relative order.
fn relabel<NI: Idx>(node: usize, node_count: usize) -> NI {
    if node == 0 {
        NI::new(1)
    } else if node == node_count - 1 {
        NI::new(2)
    } else {
        NI::new(node + 2)
    }
}

/// Draws `count` distinct ordered pairs of distinct intermediate nodes by
/// rejection sampling.
fn sparse_filler<R>(rng: &mut R, intermediate: usize, count: usize) -> Vec<(usize, usize)>
where
    R: Rng + ?Sized,
{
    let mut seen = FxHashSet::default();
    seen.reserve(count);
    let mut pairs = Vec::with_capacity(count);

    while pairs.len() < count {
        let picked = sample(rng, intermediate, 2);
        let pair = (picked.index(0) + 1, picked.index(1) + 1);
        if seen.insert(pair) {
            pairs.push(pair);
        }
    }

    pairs
}

/// Draws `count` distinct ordered pairs of distinct intermediate nodes from the
/// enumeration of all such pairs.
fn dense_filler<R>(rng: &mut R, intermediate: usize, count: usize) -> Vec<(usize, usize)>
where
    R: Rng + ?Sized,
{
    let k = intermediate;
    // Pair index `i` addresses row `u = i / (k - 1)` and the `i % (k - 1)`-th
    // node different from `u` in that row.
    sample(rng, intermediate_pairs(k), count)
        .into_iter()
        .map(|i| {
            let u = i / (k - 1);
            let mut v = i % (k - 1);
            if v >= u {
                v += 1;
            }
            (u + 1, v + 1)
        })
        .collect()
}
