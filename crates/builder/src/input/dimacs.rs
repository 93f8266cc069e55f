use std::{convert::TryFrom, fs::File, marker::PhantomData, path::Path};

use linereader::LineReader;
use log::{info, warn};
use num_format::{Locale, ToFormattedString};

use crate::{
    index::Idx,
    network::{Edge, FlowNetwork},
    Error, Graph,
};

use super::{parse_number, InputCapabilities, InputPath};

/// Prefix of the comment line that carries the ground-truth maximum flow.
pub const MAX_FLOW_COMMENT: &str = "c Maximum flow:";

/// Reads a flow network from a DIMACS max-flow file.
///
/// The format is line oriented, each line starts with a record kind:
///
/// * `c <text>` is a comment. The comment `c Maximum flow: <int>` carries the
///   expected maximum flow value of the network.
/// * `p max <n> <m>` declares the number of nodes and edges.
/// * `n <id> s` and `n <id> t` declare the source and the sink.
/// * `a <u> <v> <capacity>` declares an edge from `u` to `v`.
///
/// Node ids start at `1`.
///
/// # Example
///
/// ```ignore
/// > cat network.max
/// c Maximum flow: 5
/// p max 4 5
/// n 1 s
/// n 2 t
/// a 1 3 4
/// a 1 4 2
/// a 3 4 1
/// a 3 2 3
/// a 4 2 5
/// ```
pub struct DimacsInput<NI: Idx> {
    _idx: PhantomData<NI>,
}

impl<NI: Idx> Default for DimacsInput<NI> {
    fn default() -> Self {
        Self { _idx: PhantomData }
    }
}

impl<NI: Idx> InputCapabilities<NI> for DimacsInput<NI> {
    type GraphInput = Dimacs<NI>;
}

/// The content of a DIMACS max-flow file.
#[derive(Debug)]
pub struct Dimacs<NI: Idx> {
    pub network: FlowNetwork<NI>,
    /// Comment texts without the leading `c `, in file order.
    pub comments: Vec<String>,
    /// The value of the first `c Maximum flow:` comment, `None` if there is no
    /// such comment or its value is not an unsigned integer.
    pub max_flow: Option<u64>,
}

impl<NI: Idx> From<Dimacs<NI>> for FlowNetwork<NI> {
    fn from(dimacs: Dimacs<NI>) -> Self {
        dimacs.network
    }
}

impl<NI, P> TryFrom<InputPath<P>> for Dimacs<NI>
where
    P: AsRef<Path>,
    NI: Idx,
{
    type Error = Error;

    fn try_from(path: InputPath<P>) -> Result<Self, Self::Error> {
        let file = File::open(path.0.as_ref())?;
        let mmap = unsafe { memmap2::MmapOptions::new().populate().map(&file)? };
        Dimacs::try_from(mmap.as_ref())
    }
}

impl<NI> TryFrom<&[u8]> for Dimacs<NI>
where
    NI: Idx,
{
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let start = std::time::Instant::now();

        let mut problem: Option<(usize, usize)> = None;
        let mut source = None;
        let mut sink = None;
        let mut edges = Vec::new();
        let mut comments = Vec::new();
        let mut max_flow_comment: Option<Option<u64>> = None;
        let mut last_line = 0;

        for (idx, line) in bytes.split(|b| *b == b'\n').enumerate() {
            let line_no = idx + 1;
            last_line = line_no;
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            let mut fields = line
                .split(|b| b.is_ascii_whitespace())
                .filter(|field| !field.is_empty());

            let kind = match fields.next() {
                Some(kind) => kind,
                None => continue,
            };

            match kind {
                b"c" => {
                    if max_flow_comment.is_none() {
                        max_flow_comment = parse_max_flow_comment(line).map(|value| {
                            value
                                .map_err(|reason| warn!("Ignoring line {line_no}: {reason}"))
                                .ok()
                        });
                    }
                    let text = line.strip_prefix(b"c").unwrap_or(line);
                    let text = text.strip_prefix(b" ").unwrap_or(text);
                    comments.push(String::from_utf8_lossy(text).into_owned());
                }
                b"p" => {
                    if problem.is_some() {
                        return Err(Error::invalid_dimacs(line_no, "duplicate problem line"));
                    }
                    if fields.next() != Some(&b"max"[..]) {
                        return Err(Error::invalid_dimacs(
                            line_no,
                            "expected problem line 'p max <nodes> <edges>'",
                        ));
                    }
                    let node_count = next_number::<usize, _>(&mut fields, line_no, "node count")?;
                    let edge_count = next_number::<usize, _>(&mut fields, line_no, "edge count")?;
                    expect_end(&mut fields, line_no)?;

                    edges.reserve(usize::min(edge_count, bytes.len() / 8));
                    problem = Some((node_count, edge_count));
                }
                b"n" => {
                    let node_count = declared_nodes(problem, line_no)?;
                    let id = next_node::<NI, _>(&mut fields, line_no, node_count)?;
                    let role = fields.next();
                    expect_end(&mut fields, line_no)?;

                    let slot = match role {
                        Some(b"s") => &mut source,
                        Some(b"t") => &mut sink,
                        _ => {
                            return Err(Error::invalid_dimacs(
                                line_no,
                                "expected node role 's' or 't'",
                            ))
                        }
                    };
                    if slot.replace(id).is_some() {
                        return Err(Error::invalid_dimacs(line_no, "duplicate node role"));
                    }
                }
                b"a" => {
                    let node_count = declared_nodes(problem, line_no)?;
                    let u = next_node::<NI, _>(&mut fields, line_no, node_count)?;
                    let v = next_node::<NI, _>(&mut fields, line_no, node_count)?;
                    let capacity = next_number::<u64, _>(&mut fields, line_no, "capacity")?;
                    expect_end(&mut fields, line_no)?;

                    edges.push(Edge::new(u, v, capacity));
                }
                _ => {
                    return Err(Error::invalid_dimacs(
                        line_no,
                        format!("unknown record '{}'", String::from_utf8_lossy(kind)),
                    ))
                }
            }
        }

        let (node_count, edge_count) = problem.ok_or_else(|| {
            Error::invalid_dimacs(last_line, "missing problem line 'p max <nodes> <edges>'")
        })?;
        let source = source.ok_or_else(|| Error::invalid_dimacs(last_line, "missing source line"))?;
        let sink = sink.ok_or_else(|| Error::invalid_dimacs(last_line, "missing sink line"))?;

        if edges.len() != edge_count {
            return Err(Error::invalid_dimacs(
                last_line,
                format!(
                    "problem line declares {edge_count} edges, found {}",
                    edges.len()
                ),
            ));
        }

        let node_count = NI::try_new(node_count)
            .ok_or_else(|| Error::invalid_dimacs(last_line, "node count exceeds index type"))?;
        let network = FlowNetwork::new(node_count, source, sink, edges)?;

        let elapsed = start.elapsed().as_millis() as f64 / 1000_f64;

        info!(
            "Read {} nodes and {} edges in {:.2}s ({:.2} MB/s)",
            network.node_count().index().to_formatted_string(&Locale::en),
            network.edge_count().index().to_formatted_string(&Locale::en),
            elapsed,
            ((bytes.len() as f64) / elapsed) / (1024.0 * 1024.0)
        );

        Ok(Self {
            network,
            comments,
            max_flow: max_flow_comment.flatten(),
        })
    }
}

/// Returns the ground-truth maximum flow of a DIMACS file.
///
/// The file is scanned line by line and the value of the first line that
/// starts with `c Maximum flow:` is returned. Returns `Ok(None)` if no such
/// line exists and an error if the value of the first such line is not an
/// unsigned integer.
pub fn ground_truth<P: AsRef<Path>>(path: P) -> Result<Option<u64>, Error> {
    let file = File::open(path.as_ref())?;
    let mut lines = LineReader::new(file);
    let mut line_no = 0;

    while let Some(line) = lines.next_line() {
        line_no += 1;
        if let Some(value) = parse_max_flow_comment(line?) {
            return value
                .map(Some)
                .map_err(|reason| Error::invalid_dimacs(line_no, reason));
        }
    }

    Ok(None)
}

/// Parses a `c Maximum flow: <int>` line.
///
/// Returns `None` if the line is not a maximum flow comment.
pub(crate) fn parse_max_flow_comment(line: &[u8]) -> Option<Result<u64, String>> {
    let value = line.strip_prefix(MAX_FLOW_COMMENT.as_bytes())?;
    let value = trim(value);
    Some(
        parse_number::<u64>(value)
            .ok_or_else(|| format!("invalid maximum flow '{}'", String::from_utf8_lossy(value))),
    )
}

fn trim(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if !first.is_ascii_whitespace() {
            break;
        }
        bytes = rest;
    }
    while let [rest @ .., last] = bytes {
        if !last.is_ascii_whitespace() {
            break;
        }
        bytes = rest;
    }
    bytes
}

fn declared_nodes(problem: Option<(usize, usize)>, line_no: usize) -> Result<usize, Error> {
    problem
        .map(|(node_count, _)| node_count)
        .ok_or_else(|| Error::invalid_dimacs(line_no, "record before problem line"))
}

fn next_number<'a, T, I>(fields: &mut I, line_no: usize, what: &str) -> Result<T, Error>
where
    T: atoi::FromRadix10Checked,
    I: Iterator<Item = &'a [u8]>,
{
    fields
        .next()
        .and_then(parse_number::<T>)
        .ok_or_else(|| Error::invalid_dimacs(line_no, format!("missing or invalid {what}")))
}

fn next_node<'a, NI, I>(fields: &mut I, line_no: usize, node_count: usize) -> Result<NI, Error>
where
    NI: Idx,
    I: Iterator<Item = &'a [u8]>,
{
    let id = next_number::<usize, _>(fields, line_no, "node id")?;
    if id == 0 || id > node_count {
        return Err(Error::invalid_dimacs(
            line_no,
            format!("node id {id} outside of [1, {node_count}]"),
        ));
    }
    NI::try_new(id).ok_or_else(|| Error::invalid_dimacs(line_no, "node id exceeds index type"))
}

fn expect_end<'a, I>(fields: &mut I, line_no: usize) -> Result<(), Error>
where
    I: Iterator<Item = &'a [u8]>,
{
    match fields.next() {
        None => Ok(()),
        Some(_) => Err(Error::invalid_dimacs(line_no, "unexpected trailing fields")),
    }
}
