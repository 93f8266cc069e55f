use super::residual::Residual;

/// Runs Dinic's algorithm on the residual network and returns the value of
/// the maximum flow.
///
/// Each phase builds a level graph with a breadth-first search and saturates
/// it with blocking flows found by an iterative depth-first search. The
/// per-node `next_arc` cursor ensures that every arc is discarded at most
/// once per phase.
pub(crate) fn dinic(residual: &mut Residual) -> u64 {
    let node_count = residual.node_count();
    let (source, sink) = (residual.source(), residual.sink());

    let mut level = vec![usize::MAX; node_count];
    let mut next_arc = vec![0_usize; node_count];
    let mut path = Vec::new();
    let mut total = 0;

    while residual.bfs(&mut level, None) {
        for (node, cursor) in next_arc.iter_mut().enumerate() {
            *cursor = residual.arcs(node).start;
        }

        loop {
            let pushed = augment(residual, source, sink, &mut level, &mut next_arc, &mut path);
            if pushed == 0 {
                break;
            }
            total += pushed;
        }
    }

    total
}

// Finds a single source-sink path in the level graph and pushes its
// bottleneck capacity. Returns 0 once the level graph is blocked.
fn augment(
    residual: &mut Residual,
    source: usize,
    sink: usize,
    level: &mut [usize],
    next_arc: &mut [usize],
    path: &mut Vec<usize>,
) -> u64 {
    path.clear();
    let mut u = source;

    loop {
        if u == sink {
            let bottleneck = path
                .iter()
                .map(|&arc| residual.residual(arc))
                .min()
                .unwrap_or_default();
            for &arc in path.iter() {
                residual.push(arc, bottleneck);
            }
            return bottleneck;
        }

        let end = residual.arcs(u).end;
        while next_arc[u] < end {
            let arc = next_arc[u];
            let v = residual.target(arc);
            if residual.residual(arc) > 0 && level[v] == level[u] + 1 {
                break;
            }
            next_arc[u] += 1;
        }

        if next_arc[u] < end {
            let arc = next_arc[u];
            path.push(arc);
            u = residual.target(arc);
            continue;
        }

        // Dead end, remove `u` from the level graph and retreat.
        level[u] = usize::MAX;
        match path.pop() {
            Some(arc) => {
                u = residual.tail(arc);
                next_arc[u] += 1;
            }
            None => return 0,
        }
    }
}
