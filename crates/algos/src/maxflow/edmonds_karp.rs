use super::residual::Residual;

/// Runs the Edmonds-Karp algorithm on the residual network and returns the
/// value of the maximum flow.
///
/// Repeatedly augments along a shortest source-sink path in the residual
/// network until the sink becomes unreachable.
pub(crate) fn edmonds_karp(residual: &mut Residual) -> u64 {
    let node_count = residual.node_count();
    let (source, sink) = (residual.source(), residual.sink());

    let mut level = vec![usize::MAX; node_count];
    let mut parent = vec![usize::MAX; node_count];
    let mut total = 0;

    while residual.bfs(&mut level, Some(&mut parent)) {
        let mut bottleneck = u64::MAX;
        let mut v = sink;
        while v != source {
            let arc = parent[v];
            bottleneck = bottleneck.min(residual.residual(arc));
            v = residual.tail(arc);
        }

        let mut v = sink;
        while v != source {
            let arc = parent[v];
            residual.push(arc, bottleneck);
            v = residual.tail(arc);
        }

        total += bottleneck;
    }

    total
}
