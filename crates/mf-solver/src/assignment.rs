//! Per-edge flow values produced by a solve.

use mf_core::{Real, Tolerances, at_most, nearly_equal};
use mf_graph::FlowGraph;
use petgraph::graph::DiGraph;

use crate::error::{SolverError, SolverResult};

/// Flow on one edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeFlow {
    pub origin: String,
    pub destination: String,
    pub capacity: Real,
    pub flow: Real,
}

/// One [`EdgeFlow`] per graph edge, in edge enumeration order, plus the
/// flow value the LP maximized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowAssignment {
    pub value: Real,
    pub edges: Vec<EdgeFlow>,
}

impl FlowAssignment {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EdgeFlow> {
        self.edges.iter()
    }

    /// Total flow leaving the source, as maximized by the LP.
    pub fn value(&self) -> Real {
        self.value
    }

    /// (origin, destination, flow) triples in edge order.
    pub fn triples(&self) -> Vec<(&str, &str, Real)> {
        self.edges
            .iter()
            .map(|e| (e.origin.as_str(), e.destination.as_str(), e.flow))
            .collect()
    }

    /// Flow on `origin -> destination`, if that edge exists.
    pub fn flow(&self, origin: &str, destination: &str) -> Option<Real> {
        self.edges
            .iter()
            .find(|e| e.origin == origin && e.destination == destination)
            .map(|e| e.flow)
    }

    /// Sum of flows on edges leaving `node`.
    pub fn outflow(&self, node: &str) -> Real {
        self.edges
            .iter()
            .filter(|e| e.origin == node)
            .map(|e| e.flow)
            .sum()
    }

    /// Sum of flows on edges entering `node`.
    pub fn inflow(&self, node: &str) -> Real {
        self.edges
            .iter()
            .filter(|e| e.destination == node)
            .map(|e| e.flow)
            .sum()
    }

    /// Net balance of `node` as its conservation row counts it: flow on
    /// edges ending at `node` minus flow on edges starting there. A
    /// self-loop ends at its node, so it counts as inflow only and
    /// `net` differs from `inflow - outflow` by the loop flow.
    pub fn net(&self, node: &str) -> Real {
        self.edges
            .iter()
            .map(|e| {
                if e.destination == node {
                    e.flow
                } else if e.origin == node {
                    -e.flow
                } else {
                    0.0
                }
            })
            .sum()
    }

    /// Every flow lies in `[0, capacity]` within tolerance.
    pub fn check_capacities(&self, tol: Tolerances) -> SolverResult<()> {
        for e in &self.edges {
            if !at_most(0.0, e.flow, tol) || !at_most(e.flow, e.capacity, tol) {
                return Err(SolverError::NumericalFailure {
                    what: format!(
                        "flow {} on {} -> {} outside [0, {}]",
                        e.flow, e.origin, e.destination, e.capacity
                    ),
                });
            }
        }
        Ok(())
    }

    /// [`FlowAssignment::net`] is zero at every node of `graph` except its
    /// source and sink, and the source's net outflow equals the flow value.
    pub fn check_conservation(&self, graph: &FlowGraph, tol: Tolerances) -> SolverResult<()> {
        let nodes = graph.nodes();
        let Some((source, rest)) = nodes.split_first() else {
            return Ok(());
        };
        let interior = rest.split_last().map_or(&[][..], |(_, mid)| mid);
        for node in interior {
            let balance = self.net(node);
            if !nearly_equal(balance, 0.0, tol) {
                return Err(SolverError::NumericalFailure {
                    what: format!("node {node} is out of balance by {balance}"),
                });
            }
        }
        let sent = -self.net(source);
        if !nearly_equal(sent, self.value, tol) {
            return Err(SolverError::NumericalFailure {
                what: format!(
                    "source {source} sends {sent} but the flow value is {}",
                    self.value
                ),
            });
        }
        Ok(())
    }

    /// Flow graph as a petgraph `DiGraph`, laid out like [`FlowGraph::to_petgraph`].
    pub fn to_petgraph(&self, graph: &FlowGraph) -> DiGraph<String, Real> {
        graph.to_petgraph_with(|i, _| self.edges.get(i).map_or(0.0, |e| e.flow))
    }
}

impl<'a> IntoIterator for &'a FlowAssignment {
    type Item = &'a EdgeFlow;
    type IntoIter = std::slice::Iter<'a, EdgeFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
