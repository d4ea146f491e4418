//! Stable indexing for LP formulation.
//!
//! Flattens a graph into contiguous node and edge indices, with per-node
//! incidence lists, so row/column construction never looks nodes up by label.

use mf_core::Real;

use crate::graph::FlowGraph;

/// A flattened edge: endpoint indices into the node enumeration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub origin: usize,
    pub destination: usize,
    pub capacity: Real,
}

impl Arc {
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }
}

/// Index of a graph's edges in enumeration order.
///
/// Edge `i` here is edge `i` of [`FlowGraph::edges`].
#[derive(Debug, Clone)]
pub struct SolverIndex {
    node_count: usize,
    arcs: Vec<Arc>,

    /// For each node, indices of arcs ending there.
    incoming: Vec<Vec<usize>>,

    /// For each node, indices of arcs starting there.
    outgoing: Vec<Vec<usize>>,
}

impl SolverIndex {
    /// Build the index from a graph.
    pub fn from_graph(graph: &FlowGraph) -> Self {
        let node_count = graph.node_count();
        let arcs: Vec<Arc> = graph
            .arcs()
            .map(|(origin, destination, cap)| Arc {
                origin,
                destination,
                capacity: cap.value(),
            })
            .collect();

        let mut incoming = vec![Vec::new(); node_count];
        let mut outgoing = vec![Vec::new(); node_count];
        for (i, arc) in arcs.iter().enumerate() {
            outgoing[arc.origin].push(i);
            incoming[arc.destination].push(i);
        }

        Self {
            node_count,
            arcs,
            incoming,
            outgoing,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Get the arc for a contiguous index (panics if out of bounds).
    pub fn arc(&self, i: usize) -> Arc {
        self.arcs[i]
    }

    /// Arcs ending at `node`, in edge order.
    pub fn incoming(&self, node: usize) -> &[usize] {
        self.incoming.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Arcs starting at `node`, in edge order.
    pub fn outgoing(&self, node: usize) -> &[usize] {
        self.outgoing.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Capacities in edge order.
    pub fn capacities(&self) -> impl Iterator<Item = Real> + '_ {
        self.arcs.iter().map(|a| a.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_basic() {
        let graph = FlowGraph::from_adjacency([
            ("A", vec![("B", 4), ("C", 5)]),
            ("B", vec![("D", 5)]),
            ("C", vec![("B", 2), ("D", 4)]),
            ("D", vec![]),
        ]);
        let idx = SolverIndex::from_graph(&graph);

        assert_eq!(idx.node_count(), 4);
        assert_eq!(idx.edge_count(), 5);
        assert_eq!(
            idx.arc(3),
            Arc {
                origin: 2,
                destination: 1,
                capacity: 2.0
            }
        );
        assert_eq!(idx.outgoing(0), &[0, 1]);
        assert_eq!(idx.incoming(1), &[0, 3]);
        assert_eq!(idx.incoming(3), &[2, 4]);
        assert!(idx.outgoing(3).is_empty());
        assert_eq!(
            idx.capacities().collect::<Vec<_>>(),
            vec![4.0, 5.0, 5.0, 2.0, 4.0]
        );
    }

    #[test]
    fn self_loop_is_both_incoming_and_outgoing() {
        let graph = FlowGraph::from_adjacency([("A", vec![("A", 1)])]);
        let idx = SolverIndex::from_graph(&graph);
        assert!(idx.arc(0).is_self_loop());
        assert_eq!(idx.incoming(0), &[0]);
        assert_eq!(idx.outgoing(0), &[0]);
    }

    #[test]
    fn out_of_range_node_has_no_arcs() {
        let graph = FlowGraph::from_adjacency([("A", vec![("B", 1)])]);
        let idx = SolverIndex::from_graph(&graph);
        assert!(idx.incoming(99).is_empty());
    }
}
