pub use crate::builder::GraphBuilder;

pub use crate::gen::random_flow_network;
pub use crate::gen::RandomNetworkConfig;

pub use crate::network::Edge;
pub use crate::network::FlowNetwork;

pub use crate::output::write_dimacs_file;
pub use crate::output::WriteDimacsOp;

pub use crate::index::Idx;

pub use crate::input::*;

pub use crate::FlowGraph;
pub use crate::Graph;

pub use crate::Error;
