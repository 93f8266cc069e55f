//! A library that provides the building blocks for max-flow benchmarking.
//!
//! The crate models directed flow networks, reads and writes them in the
//! DIMACS max-flow format and generates random networks that satisfy a set of
//! connectivity constraints between the source, the sink and the
//! intermediate nodes.
//!
//! # What is a flow network?
//!
//! A flow network is a directed graph where each edge carries a positive
//! integer capacity. Two nodes are distinguished: the source `s` and the
//! sink `t`. Following the DIMACS convention, node ids start at `1`.
//!
//! # How to build a flow network
//!
//! The library provides a builder that can be used to construct a network
//! from a given list of edges:
//!
//! ```
//! use flow_builder::prelude::*;
//!
//! let network: FlowNetwork<u32> = GraphBuilder::new()
//!     .edges(vec![(1, 3, 4), (1, 4, 2), (3, 4, 1), (3, 2, 3), (4, 2, 5)])
//!     .node_count(4)
//!     .source(1)
//!     .sink(2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(network.node_count(), 4);
//! assert_eq!(network.edge_count(), 5);
//! assert_eq!(network.source(), 1);
//! ```
//!
//! It is also possible to load a network from a DIMACS `.max` file:
//!
//! ```
//! use std::path::PathBuf;
//!
//! use flow_builder::prelude::*;
//!
//! let path = [env!("CARGO_MANIFEST_DIR"), "resources", "example.max"]
//!     .iter()
//!     .collect::<PathBuf>();
//!
//! let network: FlowNetwork<u32> = GraphBuilder::new()
//!     .file_format(DimacsInput::default())
//!     .path(path)
//!     .build()
//!     .expect("loading failed");
//!
//! assert_eq!(network.node_count(), 6);
//! assert_eq!(network.edge_count(), 9);
//! ```
//!
//! Random networks are created with [`gen::random_flow_network`] and can be
//! written back to disk with [`output::WriteDimacsOp`].

pub mod builder;
pub mod gen;
pub mod index;
pub mod input;
pub mod network;
pub mod output;
pub mod prelude;

pub use crate::builder::GraphBuilder;
pub use crate::network::Edge;
pub use crate::network::FlowNetwork;

use crate::index::Idx;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error while reading or writing a flow network")]
    IoError {
        #[from]
        source: std::io::Error,
    },
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },
    #[error("invalid DIMACS input in line {line}: {reason}")]
    InvalidDimacs { line: usize, reason: String },
    #[error("invalid flow network: {reason}")]
    InvalidNetwork { reason: String },
}

impl Error {
    pub(crate) fn invalid_parameters(reason: impl Into<String>) -> Self {
        Error::InvalidParameters {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_dimacs(line: usize, reason: impl Into<String>) -> Self {
        Error::InvalidDimacs {
            line,
            reason: reason.into(),
        }
    }
}

/// A graph is a tuple `(N, E)`, where `N` is a set of nodes and `E` a set of
/// edges. Each edge connects exactly two nodes.
pub trait Graph<NI: Idx> {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> NI;

    /// Returns the number of edges in the graph.
    fn edge_count(&self) -> NI;
}

/// A graph with a designated source and sink node.
pub trait FlowGraph<NI: Idx>: Graph<NI> {
    /// The node where all flow originates.
    fn source(&self) -> NI;

    /// The node where all flow is absorbed.
    fn sink(&self) -> NI;
}
