//! Maximum flow algorithms and the tooling around a max-flow solver
//! benchmark.
//!
//! The crate builds on [`flow_builder`] and adds three things:
//!
//! * [`maxflow`] computes the value of a maximum flow on a [`FlowNetwork`]
//!   using either Dinic's algorithm or Edmonds-Karp.
//! * [`generate`] creates batches of random networks and writes each one to a
//!   DIMACS file annotated with its maximum flow value.
//! * [`verify`] runs external solver executables against a directory of
//!   annotated files and compares their output with the recorded values.
//!
//! ```
//! use flow::prelude::*;
//!
//! let network: FlowNetwork<u32> = GraphBuilder::new()
//!     .edges(vec![(1, 3, 4), (1, 4, 2), (3, 4, 1), (3, 2, 3), (4, 2, 5)])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(max_flow(&network, MaxFlowAlgorithm::Dinic), 6);
//! assert_eq!(max_flow(&network, MaxFlowAlgorithm::EdmondsKarp), 6);
//! ```
//!
//! [`FlowNetwork`]: flow_builder::FlowNetwork

pub mod generate;
pub mod maxflow;
pub mod prelude;
pub mod verify;
