use std::{path::Path, time::Instant};

use flow::prelude::*;

use log::info;

/// Reads a DIMACS file and computes its maximum flow.
pub(crate) fn solve(
    path: &Path,
    algorithm: MaxFlowAlgorithm,
    use_32_bit: bool,
) -> Result<SolverOutput, Error> {
    info!(
        "Reading network ({} bit) from: {}",
        if use_32_bit { "32" } else { "64" },
        path.display()
    );

    if use_32_bit {
        run::<u32>(path, algorithm)
    } else {
        run::<usize>(path, algorithm)
    }
}

fn run<NI: Idx>(path: &Path, algorithm: MaxFlowAlgorithm) -> Result<SolverOutput, Error> {
    let network: FlowNetwork<NI> = GraphBuilder::new()
        .file_format(DimacsInput::default())
        .path(path)
        .build()?;

    let start = Instant::now();
    let value = max_flow(&network, algorithm);

    Ok(SolverOutput::new(value, start.elapsed()))
}
