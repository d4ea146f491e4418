//! Graph-specific error types.

use mf_core::{MfError, Real};

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction, lookup and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A text line does not match `<origin> <destination> <capacity>`.
    Parse { line_no: usize, line: String },

    /// The same ordered pair was supplied twice.
    DuplicateEdge { origin: String, destination: String },

    /// Lookup of a node that is not in the graph.
    MissingNode { node: String },

    /// A capacity below zero.
    NegativeCapacity {
        origin: String,
        destination: String,
        capacity: Real,
    },

    /// A NaN or infinite capacity.
    NonFiniteCapacity { origin: String, destination: String },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::Parse { line_no, line } => {
                write!(f, "Malformed line {}: {:?}", line_no, line)
            }
            GraphError::DuplicateEdge {
                origin,
                destination,
            } => {
                write!(f, "Edge {} -> {} is present twice", origin, destination)
            }
            GraphError::MissingNode { node } => {
                write!(f, "Node {} not found in graph", node)
            }
            GraphError::NegativeCapacity {
                origin,
                destination,
                capacity,
            } => {
                write!(
                    f,
                    "Edge {} -> {} has negative capacity {}",
                    origin, destination, capacity
                )
            }
            GraphError::NonFiniteCapacity {
                origin,
                destination,
            } => {
                write!(
                    f,
                    "Edge {} -> {} has a non-finite capacity",
                    origin, destination
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for MfError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::MissingNode { node } => MfError::NotFound {
                what: format!("node {node}"),
            },
            other => MfError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_line() {
        let err = GraphError::Parse {
            line_no: 3,
            line: "A B".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("\"A B\""));
    }

    #[test]
    fn missing_node_maps_to_not_found() {
        let err: MfError = GraphError::MissingNode { node: "Z".into() }.into();
        assert!(matches!(err, MfError::NotFound { .. }));
    }
}
