use std::ops::Range;

use flow_builder::prelude::*;

/// A residual network in compressed sparse row layout.
///
/// Every network edge `(u, v, c)` contributes a forward arc `u -> v` with
/// residual capacity `c` and a backward arc `v -> u` with residual capacity
/// `0`. Nodes are addressed by their DIMACS id minus one.
pub(crate) struct Residual {
    offsets: Box<[usize]>,
    targets: Box<[usize]>,
    // Position of the paired arc.
    reverse: Box<[usize]>,
    residual: Box<[u64]>,
    source: usize,
    sink: usize,
}

impl Residual {
    pub(crate) fn new<NI: Idx>(network: &FlowNetwork<NI>) -> Self {
        let node_count = network.node_count().index();

        let mut offsets = vec![0_usize; node_count + 1];
        for edge in network.edges() {
            offsets[edge.source.index()] += 1;
            offsets[edge.target.index()] += 1;
        }
        for node in 1..=node_count {
            offsets[node] += offsets[node - 1];
        }

        let arc_count = offsets[node_count];
        let mut targets = vec![0_usize; arc_count];
        let mut reverse = vec![0_usize; arc_count];
        let mut residual = vec![0_u64; arc_count];
        let mut next = offsets[..node_count].to_vec();

        for edge in network.edges() {
            let u = edge.source.index() - 1;
            let v = edge.target.index() - 1;

            let forward = next[u];
            next[u] += 1;
            let backward = next[v];
            next[v] += 1;

            targets[forward] = v;
            residual[forward] = edge.capacity;
            reverse[forward] = backward;

            targets[backward] = u;
            reverse[backward] = forward;
        }

        Self {
            offsets: offsets.into_boxed_slice(),
            targets: targets.into_boxed_slice(),
            reverse: reverse.into_boxed_slice(),
            residual: residual.into_boxed_slice(),
            source: network.source().index() - 1,
            sink: network.sink().index() - 1,
        }
    }

    #[inline]
    pub(crate) fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub(crate) fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub(crate) fn sink(&self) -> usize {
        self.sink
    }

    /// Positions of all arcs leaving `node`.
    #[inline]
    pub(crate) fn arcs(&self, node: usize) -> Range<usize> {
        self.offsets[node]..self.offsets[node + 1]
    }

    #[inline]
    pub(crate) fn target(&self, arc: usize) -> usize {
        self.targets[arc]
    }

    /// The node an arc starts at.
    #[inline]
    pub(crate) fn tail(&self, arc: usize) -> usize {
        self.targets[self.reverse[arc]]
    }

    #[inline]
    pub(crate) fn residual(&self, arc: usize) -> u64 {
        self.residual[arc]
    }

    /// Sends `amount` units of flow along `arc`.
    #[inline]
    pub(crate) fn push(&mut self, arc: usize, amount: u64) {
        self.residual[arc] -= amount;
        self.residual[self.reverse[arc]] += amount;
    }

    /// Breadth-first search over arcs with positive residual capacity.
    ///
    /// Fills `level` with the distance of each node to the source and
    /// `usize::MAX` for unreachable nodes. When `parent` is given, it receives
    /// the arc each node was discovered through. Returns whether the sink is
    /// reachable.
    pub(crate) fn bfs(&self, level: &mut [usize], mut parent: Option<&mut [usize]>) -> bool {
        level.fill(usize::MAX);
        level[self.source] = 0;

        let mut queue = std::collections::VecDeque::with_capacity(self.node_count());
        queue.push_back(self.source);

        while let Some(u) = queue.pop_front() {
            for arc in self.arcs(u) {
                let v = self.target(arc);
                if self.residual(arc) == 0 || level[v] != usize::MAX {
                    continue;
                }

                level[v] = level[u] + 1;
                if let Some(parent) = parent.as_deref_mut() {
                    parent[v] = arc;
                }
                if v == self.sink {
                    return true;
                }
                queue.push_back(v);
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arcs_are_paired() {
        let network: FlowNetwork<u32> = GraphBuilder::new()
            .edges(vec![(1, 3, 4), (3, 2, 3), (3, 3, 1)])
            .build()
            .unwrap();

        let residual = Residual::new(&network);

        assert_eq!(residual.node_count(), 3);
        assert_eq!(residual.source(), 0);
        assert_eq!(residual.sink(), 1);

        for node in 0..residual.node_count() {
            for arc in residual.arcs(node) {
                assert_eq!(residual.tail(arc), node);
            }
        }

        let forward = residual.arcs(0).start;
        assert_eq!(residual.target(forward), 2);
        assert_eq!(residual.residual(forward), 4);
        assert_eq!(residual.arcs(2).len(), 4);
    }

    #[test]
    fn push_moves_capacity_to_the_paired_arc() {
        let network: FlowNetwork<u32> = GraphBuilder::new()
            .edges(vec![(1, 2, 5)])
            .build()
            .unwrap();

        let mut residual = Residual::new(&network);
        let forward = residual.arcs(0).start;
        let backward = residual.arcs(1).start;

        residual.push(forward, 3);

        assert_eq!(residual.residual(forward), 2);
        assert_eq!(residual.residual(backward), 3);
    }

    #[test]
    fn bfs_stops_at_unreachable_sink() {
        let network: FlowNetwork<u32> = GraphBuilder::new()
            .edges(vec![(1, 3, 1), (2, 3, 1)])
            .build()
            .unwrap();

        let residual = Residual::new(&network);
        let mut level = vec![0; residual.node_count()];

        assert!(!residual.bfs(&mut level, None));
        assert_eq!(level, vec![0, usize::MAX, 1]);
    }
}
