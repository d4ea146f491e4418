//! Core graph data structures.

use std::collections::HashMap;
use std::fmt;

use mf_core::Real;
use nalgebra::DMatrix;

use crate::builder::GraphBuilder;
use crate::capacity::Capacity;
use crate::error::{GraphError, GraphResult};
use crate::validate;

/// A directed edge with its capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub origin: String,
    pub destination: String,
    pub capacity: Capacity,
}

impl Edge {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        capacity: impl Into<Capacity>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            capacity: capacity.into(),
        }
    }
}

/// Immutable directed graph with capacities.
///
/// Nodes are string labels. Every node maps to its outgoing adjacency
/// (destination -> capacity). Nodes and the destinations inside each
/// adjacency keep their insertion order; the LP row and column layout is
/// derived from that order, so it never depends on hashing.
#[derive(Clone)]
pub struct FlowGraph {
    /// Node labels in insertion order.
    pub(crate) nodes: Vec<String>,

    /// Reverse lookup: label -> position in `nodes`.
    pub(crate) node_index: HashMap<String, usize>,

    /// For node i, its outgoing arcs as (destination index, capacity) in insertion order.
    pub(crate) adjacency: Vec<Vec<(usize, Capacity)>>,
}

impl FlowGraph {
    /// Build from an adjacency mapping, node -> (destination -> capacity).
    ///
    /// Entries are kept in the order given. A repeated key behaves like a
    /// mapping update: the value is replaced, the original position stays.
    /// Destinations that never appear as keys are appended as nodes without
    /// outgoing edges. Capacities are not validated here; see [`FlowGraph::validate`].
    pub fn from_adjacency<I, J, N, M, C>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, J)>,
        J: IntoIterator<Item = (M, C)>,
        N: Into<String>,
        M: Into<String>,
        C: Into<Capacity>,
    {
        let mut builder = GraphBuilder::new();
        let mut pending: Vec<(usize, Vec<(String, Capacity)>)> = Vec::new();
        for (origin, neighbors) in adjacency {
            let origin = builder.add_node(origin);
            let neighbors = neighbors
                .into_iter()
                .map(|(dest, cap)| (dest.into(), cap.into()))
                .collect();
            match pending.iter_mut().find(|(o, _)| *o == origin) {
                Some(slot) => slot.1 = neighbors,
                None => pending.push((origin, neighbors)),
            }
        }
        // Keys first, so a destination listed before its own key keeps the key's position.
        for (origin, neighbors) in pending {
            for (dest, cap) in neighbors {
                let dest = builder.add_node(dest);
                builder.set_edge(origin, dest, cap);
            }
        }
        builder.build()
    }

    /// Build from a node list and (origin, destination, capacity) triples.
    ///
    /// Listed nodes come first, in list order; edge endpoints that are not
    /// listed follow in order of first appearance.
    ///
    /// # Errors
    /// [`GraphError::DuplicateEdge`] if an ordered pair appears twice.
    pub fn from_nodes_edges<N, I, O, D, C>(nodes: N, edges: I) -> GraphResult<Self>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        I: IntoIterator<Item = (O, D, C)>,
        O: Into<String>,
        D: Into<String>,
        C: Into<Capacity>,
    {
        let mut builder = GraphBuilder::new();
        for node in nodes {
            builder.add_node(node);
        }
        for (origin, dest, cap) in edges {
            builder.add_edge(origin, dest, cap)?;
        }
        Ok(builder.build())
    }

    /// Node labels in insertion order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.node_index.contains_key(node)
    }

    /// Position of a node in the enumeration order.
    pub fn node_idx(&self, node: &str) -> GraphResult<usize> {
        self.node_index
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::MissingNode {
                node: node.to_string(),
            })
    }

    /// Edges grouped by origin in node order, then by destination insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.arcs().map(|(o, d, capacity)| Edge {
            origin: self.nodes[o].clone(),
            destination: self.nodes[d].clone(),
            capacity,
        })
    }

    /// Edges as (origin index, destination index, capacity), same order as [`FlowGraph::edges`].
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize, Capacity)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(o, out)| out.iter().map(move |&(d, cap)| (o, d, cap)))
    }

    /// Outgoing adjacency of a node.
    ///
    /// # Errors
    /// [`GraphError::MissingNode`] if the node is absent.
    pub fn neighbors(&self, node: &str) -> GraphResult<Vec<(&str, Capacity)>> {
        let idx = self.node_idx(node)?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|&(d, cap)| (self.nodes[d].as_str(), cap))
            .collect())
    }

    /// Capacity of `origin -> destination`, if that edge exists.
    pub fn capacity(&self, origin: &str, destination: &str) -> Option<Capacity> {
        let o = *self.node_index.get(origin)?;
        let d = *self.node_index.get(destination)?;
        self.adjacency[o]
            .iter()
            .find(|&&(dest, _)| dest == d)
            .map(|&(_, cap)| cap)
    }

    /// First node in enumeration order.
    pub fn source(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    /// Last node in enumeration order.
    pub fn sink(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    /// Dense adjacency matrix in node order.
    ///
    /// Cell (i, j) holds the capacity of i -> j, or 0 when there is no
    /// such edge. An explicit zero-capacity edge is indistinguishable from
    /// a missing one here.
    pub fn adjacency_matrix(&self) -> DMatrix<Real> {
        let n = self.node_count();
        let mut m = DMatrix::zeros(n, n);
        for (o, d, cap) in self.arcs() {
            m[(o, d)] = cap.value();
        }
        m
    }

    /// True iff the adjacency matrix differs from its transpose.
    ///
    /// This is a symmetry heuristic, not a proof of directedness: a graph
    /// with A -> B and B -> A of different capacities counts as ordered.
    pub fn is_ordered(&self) -> bool {
        let m = self.adjacency_matrix();
        m != m.transpose()
    }

    /// Check that every capacity is finite and non-negative.
    pub fn validate(&self) -> GraphResult<()> {
        validate::validate_capacities(self)
    }
}

/// Structural equality of the adjacency mapping: same nodes, same edges,
/// same capacities. Insertion order does not participate.
impl PartialEq for FlowGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.node_count() != other.node_count() || self.edge_count() != other.edge_count() {
            return false;
        }
        self.nodes.iter().all(|node| {
            let (Ok(mine), Ok(theirs)) = (self.neighbors(node), other.neighbors(node)) else {
                return false;
            };
            mine.len() == theirs.len()
                && mine
                    .iter()
                    .all(|&(dest, cap)| other.capacity(node, dest) == Some(cap))
        })
    }
}

impl fmt::Debug for FlowGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Adjacency<'a>(&'a FlowGraph, usize);
        struct Plain(Capacity);

        impl fmt::Debug for Plain {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl fmt::Debug for Adjacency<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let Adjacency(graph, idx) = *self;
                f.debug_map()
                    .entries(
                        graph.adjacency[idx]
                            .iter()
                            .map(|&(d, cap)| (&graph.nodes[d], Plain(cap))),
                    )
                    .finish()
            }
        }

        f.write_str("FlowGraph(")?;
        f.debug_map()
            .entries(
                self.nodes
                    .iter()
                    .enumerate()
                    .map(|(i, node)| (node, Adjacency(self, i))),
            )
            .finish()?;
        f.write_str(")")
    }
}

/// Problem summary: source is the first node, sink the last.
impl fmt::Display for FlowGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maximum flow problem")?;
        match (self.source(), self.sink()) {
            (Some(source), Some(sink)) => {
                writeln!(f, "Source: {source}")?;
                write!(f, "Sink: {sink}")
            }
            _ => write!(f, "(empty graph)"),
        }
    }
}
