//! Max-flow LP formulation.
//!
//! Variable layout, with E the number of edges:
//!
//! | slot      | meaning                                              |
//! |-----------|------------------------------------------------------|
//! | 0         | flow value leaving the source (maximized)            |
//! | 1 ..= E   | flow on edge `slot - 1`, in edge enumeration order   |
//! | E + 1     | trailing slot, balanced against inflow at the sink   |
//!
//! The trailing slot is not a separate quantity of interest: it only
//! appears in the sink's conservation row and in its own non-negativity
//! row, and is dropped when the solution is mapped back onto edges.
//! Rows and columns follow the graph's enumeration order, so reordering
//! nodes or edges changes which row means what.

use mf_core::Real;
use mf_graph::{FlowGraph, SolverIndex};
use nalgebra::{DMatrix, DVector};

use crate::problem::LpProblem;

/// Slot of the flow-value variable.
pub const FLOW_VALUE_SLOT: usize = 0;

/// LP builder for one graph.
#[derive(Debug, Clone)]
pub struct Formulation<'g> {
    graph: &'g FlowGraph,
    index: SolverIndex,
}

impl<'g> Formulation<'g> {
    pub fn new(graph: &'g FlowGraph) -> Self {
        Self {
            graph,
            index: SolverIndex::from_graph(graph),
        }
    }

    pub fn graph(&self) -> &'g FlowGraph {
        self.graph
    }

    pub fn index(&self) -> &SolverIndex {
        &self.index
    }

    pub fn edge_count(&self) -> usize {
        self.index.edge_count()
    }

    /// E + 2 slots.
    pub fn num_vars(&self) -> usize {
        self.edge_count() + 2
    }

    /// Slot of edge `i`.
    pub fn edge_slot(&self, i: usize) -> usize {
        i + 1
    }

    /// Slot balanced against the sink's inflow.
    pub fn trailing_slot(&self) -> usize {
        self.edge_count() + 1
    }

    /// `-1` on the flow value, zero elsewhere: minimizing it maximizes the flow.
    pub fn objective(&self) -> DVector<Real> {
        let mut c = DVector::zeros(self.num_vars());
        c[FLOW_VALUE_SLOT] = -1.0;
        c
    }

    /// `-x_k <= 0` for every slot, then `x_{i+1} <= capacity_i` for every edge.
    pub fn inequality_matrix(&self) -> DMatrix<Real> {
        let n = self.num_vars();
        let e = self.edge_count();
        let mut a = DMatrix::zeros(n + e, n);
        for k in 0..n {
            a[(k, k)] = -1.0;
        }
        for i in 0..e {
            a[(n + i, self.edge_slot(i))] = 1.0;
        }
        a
    }

    /// Zeros for the non-negativity rows, then capacities in edge order.
    pub fn inequality_bounds(&self) -> DVector<Real> {
        let zeros = std::iter::repeat_n(0.0, self.num_vars());
        DVector::from_iterator(
            self.num_vars() + self.edge_count(),
            zeros.chain(self.index.capacities()),
        )
    }

    /// One conservation row per node, in node order.
    ///
    /// An edge column holds +1 where the edge ends and -1 where it starts;
    /// ending wins, so a self-loop contributes +1. The first node (source)
    /// also gets +1 on the flow value, and the last node (sink), when it is
    /// not the source, gets -1 on the trailing slot.
    pub fn equality_matrix(&self) -> DMatrix<Real> {
        let rows = self.index.node_count();
        let mut a = DMatrix::zeros(rows, self.num_vars());
        for node in 0..rows {
            for &i in self.index.outgoing(node) {
                a[(node, self.edge_slot(i))] = -1.0;
            }
            for &i in self.index.incoming(node) {
                a[(node, self.edge_slot(i))] = 1.0;
            }
            if node == 0 {
                a[(node, FLOW_VALUE_SLOT)] = 1.0;
            } else if node == rows - 1 {
                a[(node, self.trailing_slot())] = -1.0;
            }
        }
        a
    }

    /// Zero vector, one entry per node.
    pub fn equality_bounds(&self) -> DVector<Real> {
        DVector::zeros(self.index.node_count())
    }

    /// Assemble all arrays.
    pub fn build(&self) -> LpProblem {
        let lp = LpProblem {
            c: self.objective(),
            a_ub: self.inequality_matrix(),
            b_ub: self.inequality_bounds(),
            a_eq: self.equality_matrix(),
            b_eq: self.equality_bounds(),
        };
        tracing::debug!(
            vars = lp.num_vars(),
            inequalities = lp.num_inequalities(),
            equalities = lp.num_equalities(),
            "built max-flow LP"
        );
        lp
    }
}
