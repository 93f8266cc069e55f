use std::{convert::TryFrom, marker::PhantomData, path::Path as StdPath};

use crate::{
    index::Idx,
    input::{InputCapabilities, InputPath},
    network::{Edge, FlowNetwork},
    Error,
};

/// Source id used when none is configured.
pub const DEFAULT_SOURCE: usize = 1;
/// Sink id used when none is configured.
pub const DEFAULT_SINK: usize = 2;

pub struct Uninitialized;

pub struct FromEdges<NI, Edges>
where
    NI: Idx,
    Edges: IntoIterator<Item = (NI, NI, u64)>,
{
    edges: Edges,
    node_count: Option<NI>,
    source: Option<NI>,
    sink: Option<NI>,
}

pub struct FromInput<NI, Format>
where
    NI: Idx,
    Format: InputCapabilities<NI>,
{
    _idx: PhantomData<NI>,
    _format: PhantomData<Format>,
}

pub struct FromPath<NI, P, Format>
where
    P: AsRef<StdPath>,
    NI: Idx,
    Format: InputCapabilities<NI>,
    Format::GraphInput: TryFrom<InputPath<P>>,
{
    path: P,
    _idx: PhantomData<NI>,
    _format: PhantomData<Format>,
}

/// A builder to create flow networks in a type-safe way.
///
/// The builder implementation uses different states to allow staged building
/// of networks. Each individual state enables stage-specific methods on the
/// builder.
///
/// # Examples
///
/// Create a network from a vec of `(source, target, capacity)` tuples. The
/// node count defaults to the largest referenced node id, the source to `1`
/// and the sink to `2`:
///
/// ```
/// use flow_builder::prelude::*;
///
/// let network: FlowNetwork<usize> = GraphBuilder::new()
///     .edges(vec![(1, 3, 10), (3, 2, 4)])
///     .build()
///     .unwrap();
///
/// assert_eq!(network.node_count(), 3);
/// assert_eq!(network.source(), 1);
/// assert_eq!(network.sink(), 2);
/// ```
pub struct GraphBuilder<State> {
    state: State,
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        GraphBuilder::new()
    }
}

impl GraphBuilder<Uninitialized> {
    /// Creates a new builder
    pub fn new() -> Self {
        Self {
            state: Uninitialized,
        }
    }

    /// Create a network from the given edge tuples.
    pub fn edges<NI, Edges>(self, edges: Edges) -> GraphBuilder<FromEdges<NI, Edges>>
    where
        NI: Idx,
        Edges: IntoIterator<Item = (NI, NI, u64)>,
    {
        GraphBuilder {
            state: FromEdges {
                edges,
                node_count: None,
                source: None,
                sink: None,
            },
        }
    }

    /// Creates a network by reading it from the given file format.
    ///
    /// # Examples
    ///
    /// Read a network from a DIMACS max-flow file:
    ///
    /// ```
    /// use std::path::PathBuf;
    ///
    /// use flow_builder::prelude::*;
    ///
    /// let path = [env!("CARGO_MANIFEST_DIR"), "resources", "example.max"]
    ///     .iter()
    ///     .collect::<PathBuf>();
    ///
    /// let network: FlowNetwork<u32> = GraphBuilder::new()
    ///     .file_format(DimacsInput::default())
    ///     .path(path)
    ///     .build()
    ///     .expect("loading failed");
    ///
    /// assert_eq!(network.source(), 1);
    /// assert_eq!(network.sink(), 2);
    /// ```
    pub fn file_format<Format, NI>(self, _format: Format) -> GraphBuilder<FromInput<NI, Format>>
    where
        NI: Idx,
        Format: InputCapabilities<NI>,
    {
        GraphBuilder {
            state: FromInput {
                _idx: PhantomData,
                _format: PhantomData,
            },
        }
    }
}

impl<NI, Edges> GraphBuilder<FromEdges<NI, Edges>>
where
    NI: Idx,
    Edges: IntoIterator<Item = (NI, NI, u64)>,
{
    /// Sets the number of nodes. Defaults to the largest node id in the edges.
    pub fn node_count(mut self, node_count: NI) -> Self {
        self.state.node_count = Some(node_count);
        self
    }

    /// Sets the source node. Defaults to `1`.
    pub fn source(mut self, source: NI) -> Self {
        self.state.source = Some(source);
        self
    }

    /// Sets the sink node. Defaults to `2`.
    pub fn sink(mut self, sink: NI) -> Self {
        self.state.sink = Some(sink);
        self
    }

    /// Builds the network from the given edges.
    pub fn build(self) -> Result<FlowNetwork<NI>, Error> {
        let FromEdges {
            edges,
            node_count,
            source,
            sink,
        } = self.state;

        let edges = edges.into_iter().map(Edge::from).collect::<Vec<_>>();
        let source = source.unwrap_or_else(|| NI::new(DEFAULT_SOURCE));
        let sink = sink.unwrap_or_else(|| NI::new(DEFAULT_SINK));
        let node_count = node_count.unwrap_or_else(|| {
            edges
                .iter()
                .map(|e| NI::max(e.source, e.target))
                .fold(NI::max(source, sink), NI::max)
        });

        FlowNetwork::new(node_count, source, sink, edges)
    }
}

impl<NI, Format> GraphBuilder<FromInput<NI, Format>>
where
    NI: Idx,
    Format: InputCapabilities<NI>,
{
    /// Set the location where the network should be loaded from.
    pub fn path<P>(self, path: P) -> GraphBuilder<FromPath<NI, P, Format>>
    where
        P: AsRef<StdPath>,
        Format::GraphInput: TryFrom<InputPath<P>>,
    {
        GraphBuilder {
            state: FromPath {
                path,
                _idx: PhantomData,
                _format: PhantomData,
            },
        }
    }
}

impl<NI, P, Format> GraphBuilder<FromPath<NI, P, Format>>
where
    P: AsRef<StdPath>,
    NI: Idx,
    Format: InputCapabilities<NI>,
    Format::GraphInput: TryFrom<InputPath<P>>,
    FlowNetwork<NI>: From<Format::GraphInput>,
    Error: From<<Format::GraphInput as TryFrom<InputPath<P>>>::Error>,
{
    /// Build the network from the given input format and path.
    pub fn build(self) -> Result<FlowNetwork<NI>, Error> {
        let input =
            <Format::GraphInput as TryFrom<InputPath<P>>>::try_from(InputPath(self.state.path))?;
        Ok(FlowNetwork::from(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlowGraph, Graph};

    #[test]
    fn defaults_from_edges() {
        let network: FlowNetwork<u32> = GraphBuilder::new()
            .edges([(1, 5, 3), (5, 2, 3)])
            .build()
            .unwrap();

        assert_eq!(network.node_count(), 5);
        assert_eq!(network.source(), 1);
        assert_eq!(network.sink(), 2);
    }

    #[test]
    fn node_count_covers_source_and_sink() {
        let network: FlowNetwork<u32> = GraphBuilder::new()
            .edges(Vec::new())
            .source(3)
            .sink(4)
            .build()
            .unwrap();

        assert_eq!(network.node_count(), 4);
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn invalid_edges_fail() {
        let res: Result<FlowNetwork<u32>, _> = GraphBuilder::new()
            .edges([(1, 3, 0)])
            .build();

        assert!(res.is_err());
    }
}
