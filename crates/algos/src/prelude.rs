pub use flow_builder::prelude::*;

pub use crate::generate::*;
pub use crate::maxflow::*;
pub use crate::verify::*;
