use std::fmt;

use crate::{index::Idx, Error, FlowGraph, Graph};

/// A capacitated, directed edge `source -> target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge<NI> {
    pub source: NI,
    pub target: NI,
    pub capacity: u64,
}

impl<NI> Edge<NI> {
    pub fn new(source: NI, target: NI, capacity: u64) -> Self {
        Self {
            source,
            target,
            capacity,
        }
    }
}

impl<NI: Idx> From<(NI, NI, u64)> for Edge<NI> {
    fn from((source, target, capacity): (NI, NI, u64)) -> Self {
        Edge::new(source, target, capacity)
    }
}

/// A directed flow network with a distinguished source and sink.
///
/// Node ids follow the DIMACS convention and range from `1` to `node_count`
/// (inclusive). A network is validated on construction:
///
/// * `source` and `sink` are different nodes,
/// * every edge has a capacity of at least `1`,
/// * every referenced node id lies within `[1, node_count]`.
///
/// # Example
///
/// ```
/// use flow_builder::prelude::*;
///
/// let network: FlowNetwork<u32> = FlowNetwork::new(4, 1, 2, vec![
///     (1, 3, 5).into(),
///     (3, 4, 2).into(),
///     (4, 2, 7).into(),
/// ]).unwrap();
///
/// assert_eq!(network.node_count(), 4);
/// assert_eq!(network.edge_count(), 3);
/// assert_eq!(network.source(), 1);
/// assert_eq!(network.sink(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FlowNetwork<NI: Idx> {
    node_count: NI,
    source: NI,
    sink: NI,
    edges: Box<[Edge<NI>]>,
}

impl<NI: Idx> FlowNetwork<NI> {
    pub fn new(node_count: NI, source: NI, sink: NI, edges: Vec<Edge<NI>>) -> Result<Self, Error> {
        let n = node_count.index();
        let in_range = |node: NI| (1..=n).contains(&node.index());

        if source == sink {
            return Err(Error::InvalidNetwork {
                reason: format!("source and sink must differ, both are {source}"),
            });
        }

        if !in_range(source) || !in_range(sink) {
            return Err(Error::InvalidNetwork {
                reason: format!("source {source} or sink {sink} outside of [1, {n}]"),
            });
        }

        if let Some(edge) = edges
            .iter()
            .find(|edge| !in_range(edge.source) || !in_range(edge.target))
        {
            return Err(Error::InvalidNetwork {
                reason: format!(
                    "edge ({}, {}) references a node outside of [1, {n}]",
                    edge.source, edge.target
                ),
            });
        }

        if let Some(edge) = edges.iter().find(|edge| edge.capacity == 0) {
            return Err(Error::InvalidNetwork {
                reason: format!("edge ({}, {}) has capacity 0", edge.source, edge.target),
            });
        }

        Ok(Self {
            node_count,
            source,
            sink,
            edges: edges.into_boxed_slice(),
        })
    }

    /// Returns all edges in insertion order.
    pub fn edges(&self) -> &[Edge<NI>] {
        &self.edges
    }

    /// Returns the largest capacity of any edge, or `0` for an edge-less network.
    pub fn max_capacity(&self) -> u64 {
        self.edges
            .iter()
            .map(|edge| edge.capacity)
            .max()
            .unwrap_or_default()
    }
}

impl<NI: Idx> Graph<NI> for FlowNetwork<NI> {
    fn node_count(&self) -> NI {
        self.node_count
    }

    fn edge_count(&self) -> NI {
        NI::new(self.edges.len())
    }
}

impl<NI: Idx> FlowGraph<NI> for FlowNetwork<NI> {
    fn source(&self) -> NI {
        self.source
    }

    fn sink(&self) -> NI {
        self.sink
    }
}

impl<NI: Idx> fmt::Debug for FlowNetwork<NI> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowNetwork")
            .field("node_count", &self.node_count)
            .field("edge_count", &self.edges.len())
            .field("source", &self.source)
            .field("sink", &self.sink)
            .finish()
    }
}
