//! Loading graphs and solve configs from disk.

use std::path::Path;

use mf_graph::FlowGraph;
use mf_solver::SolveConfig;

use crate::error::{CliError, CliResult};

fn read(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|e| CliError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read an edge list, one `origin destination capacity` line per edge.
pub fn load_graph(path: &Path) -> CliResult<FlowGraph> {
    let text = read(path)?;
    let graph = FlowGraph::parse_text(&text)?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

/// Solve options from a YAML file, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> CliResult<SolveConfig> {
    match path {
        Some(path) => parse_config(&read(path)?),
        None => Ok(SolveConfig::default()),
    }
}

pub fn parse_config(text: &str) -> CliResult<SolveConfig> {
    serde_yaml::from_str(text).map_err(|e| CliError::Config(e.to_string()))
}
