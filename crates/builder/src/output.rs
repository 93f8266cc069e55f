use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{
    index::Idx, input::dimacs::MAX_FLOW_COMMENT, network::FlowNetwork, Error, FlowGraph,
    Graph,
};

/// The free-text comment that opens every written file.
pub const DESCRIPTION: &str = "c DIMACS file for a max flow problem";

/// Writes a network in the DIMACS max-flow format, annotated with its
/// maximum flow value.
///
/// # Example
///
/// ```
/// use flow_builder::prelude::*;
///
/// let network: FlowNetwork<u32> = GraphBuilder::new()
///     .edges(vec![(1, 3, 4), (3, 2, 3)])
///     .build()
///     .unwrap();
///
/// let mut out = Vec::new();
/// network.write_dimacs(3, &mut out).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "c DIMACS file for a max flow problem\n\
///      c Maximum flow: 3\n\
///      p max 3 2\n\
///      n 1 s\n\
///      n 2 t\n\
///      a 1 3 4\n\
///      a 3 2 3\n"
/// );
/// ```
pub trait WriteDimacsOp<W> {
    fn write_dimacs(&self, max_flow: u64, output: W) -> Result<(), Error>;
}

impl<NI: Idx, W: Write> WriteDimacsOp<W> for FlowNetwork<NI> {
    fn write_dimacs(&self, max_flow: u64, mut output: W) -> Result<(), Error> {
        writeln!(output, "{DESCRIPTION}")?;
        writeln!(output, "{MAX_FLOW_COMMENT} {max_flow}")?;
        writeln!(output, "p max {} {}", self.node_count(), self.edges().len())?;
        writeln!(output, "n {} s", self.source())?;
        writeln!(output, "n {} t", self.sink())?;

        for edge in self.edges() {
            writeln!(output, "a {} {} {}", edge.source, edge.target, edge.capacity)?;
        }

        output.flush()?;
        Ok(())
    }
}

/// Creates (or truncates) the file at `path` and writes the network to it.
pub fn write_dimacs_file<NI, P>(
    network: &FlowNetwork<NI>,
    max_flow: u64,
    path: P,
) -> Result<(), Error>
where
    NI: Idx,
    P: AsRef<Path>,
{
    let start = std::time::Instant::now();
    let file = File::create(path.as_ref())?;
    network.write_dimacs(max_flow, BufWriter::new(file))?;
    info!(
        "Wrote {} edges to {} in {:?}",
        network.edges().len(),
        path.as_ref().display(),
        start.elapsed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{input::Dimacs, prelude::GraphBuilder};

    #[test]
    fn written_file_reads_back() {
        let network: FlowNetwork<u64> = GraphBuilder::new()
            .edges(vec![(1, 3, 4), (1, 4, 2), (3, 4, 1), (3, 2, 3), (4, 2, 5)])
            .build()
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("network_1.max");
        write_dimacs_file(&network, 5, &path).unwrap();

        let dimacs = Dimacs::<u64>::try_from(crate::input::InputPath(&path)).unwrap();

        assert_eq!(dimacs.max_flow, Some(5));
        assert_eq!(dimacs.network, network);
        assert_eq!(dimacs.network.node_count(), 4);
    }
}
