//! Conversion to petgraph for layout and drawing tools.

use mf_core::Real;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::graph::FlowGraph;

impl FlowGraph {
    /// Convert to a petgraph `DiGraph` labelled by node name, weighted by capacity.
    ///
    /// Node `i` of the result is node `i` of [`FlowGraph::nodes`], and edges
    /// are added in edge enumeration order, so petgraph indices line up with
    /// the LP columns.
    pub fn to_petgraph(&self) -> DiGraph<String, Real> {
        self.to_petgraph_with(|_, cap| cap)
    }

    /// Same layout as [`FlowGraph::to_petgraph`], with edge weights computed
    /// from (edge position, capacity).
    pub fn to_petgraph_with<W, F>(&self, mut weight: F) -> DiGraph<String, W>
    where
        F: FnMut(usize, Real) -> W,
    {
        let mut out = DiGraph::with_capacity(self.node_count(), self.edge_count());
        let ids: Vec<NodeIndex> = self
            .nodes
            .iter()
            .map(|name| out.add_node(name.clone()))
            .collect();
        for (i, (o, d, cap)) in self.arcs().enumerate() {
            out.add_edge(ids[o], ids[d], weight(i, cap.value()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::visit::EdgeRef;

    #[test]
    fn petgraph_keeps_order() {
        let graph = FlowGraph::from_adjacency([
            ("A", vec![("B", 4), ("C", 5)]),
            ("B", vec![("D", 5)]),
            ("C", vec![("B", 2), ("D", 4)]),
            ("D", vec![]),
        ]);
        let pg = graph.to_petgraph();

        assert_eq!(pg.node_count(), 4);
        assert_eq!(pg.edge_count(), 5);
        let names: Vec<&str> = pg.node_weights().map(String::as_str).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);

        let edges: Vec<(&str, &str, Real)> = pg
            .edge_references()
            .map(|e| {
                (
                    pg[e.source()].as_str(),
                    pg[e.target()].as_str(),
                    *e.weight(),
                )
            })
            .collect();
        assert_eq!(
            edges,
            vec![
                ("A", "B", 4.0),
                ("A", "C", 5.0),
                ("B", "D", 5.0),
                ("C", "B", 2.0),
                ("C", "D", 4.0),
            ]
        );
    }

    #[test]
    fn isolated_nodes_are_kept() {
        let graph =
            FlowGraph::from_nodes_edges(["A", "B", "Z"], [("A", "B", 1)]).unwrap();
        let pg = graph.to_petgraph();
        assert_eq!(pg.node_count(), 3);
        assert_eq!(pg.edge_count(), 1);
    }
}
