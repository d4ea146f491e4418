//! Maximum flow through linear programming.
//!
//! This crate turns a [`mf_graph::FlowGraph`] into a standard-form LP
//! (minimize c.x subject to A_ub.x <= b_ub and A_eq.x = b_eq), hands it to an
//! [`LpSolver`] and maps the optimal vector back onto the graph's edges.
//! Source and sink are the first and last node of the graph.

pub mod adapter;
pub mod assignment;
pub mod config;
pub mod error;
pub mod formulation;
pub mod mapping;
pub mod problem;
pub mod solve;

pub use adapter::{LpSolution, LpSolver, MinilpSolver};
pub use assignment::{EdgeFlow, FlowAssignment};
pub use config::SolveConfig;
pub use error::{SolverError, SolverResult};
pub use formulation::Formulation;
pub use mapping::map_solution;
pub use problem::LpProblem;
pub use solve::{solve, solve_with};
