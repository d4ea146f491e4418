//! Error type for the command-line driver.

use std::path::PathBuf;

use mf_graph::GraphError;
use mf_solver::SolverError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Failed to render output: {0}")]
    Output(String),
}

pub type CliResult<T> = Result<T, CliError>;
