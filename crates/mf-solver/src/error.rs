//! Error types for solver operations.

use mf_core::error::MfError;
use mf_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while formulating or solving a max-flow LP.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    #[error("LP is infeasible")]
    Infeasible,

    #[error("LP is unbounded")]
    Unbounded,

    #[error("Numerical failure: {what}")]
    NumericalFailure { what: String },

    /// A formulation defect, never a user error.
    #[error("Invariant violated: {what}")]
    Invariant { what: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for MfError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::Graph(g) => g.into(),
            SolverError::Invariant { what } => MfError::Invariant { what },
            other => MfError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
