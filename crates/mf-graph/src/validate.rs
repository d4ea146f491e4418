//! Graph validation logic.

use crate::error::{GraphError, GraphResult};
use crate::graph::FlowGraph;

/// Capacities must be finite and non-negative. Construction does not
/// check this, so callers that accept untrusted input run it explicitly.
pub(crate) fn validate_capacities(graph: &FlowGraph) -> GraphResult<()> {
    for edge in graph.edges() {
        let value = edge.capacity.value();
        if !value.is_finite() {
            return Err(GraphError::NonFiniteCapacity {
                origin: edge.origin,
                destination: edge.destination,
            });
        }
        if value < 0.0 {
            return Err(GraphError::NegativeCapacity {
                origin: edge.origin,
                destination: edge.destination,
                capacity: value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_empty_graph() {
        let graph = FlowGraph::from_adjacency(Vec::<(&str, Vec<(&str, i32)>)>::new());
        assert!(validate_capacities(&graph).is_ok());
    }

    #[test]
    fn zero_capacity_and_self_loop_pass() {
        let graph = FlowGraph::from_adjacency([("A", vec![("A", 0), ("B", 2)])]);
        assert!(validate_capacities(&graph).is_ok());
    }

    #[test]
    fn negative_capacity_rejected() {
        let graph = FlowGraph::from_adjacency([("A", vec![("B", -2)])]);
        assert_eq!(
            validate_capacities(&graph).unwrap_err(),
            GraphError::NegativeCapacity {
                origin: "A".into(),
                destination: "B".into(),
                capacity: -2.0
            }
        );
    }

    #[test]
    fn non_finite_capacity_rejected() {
        let graph = FlowGraph::from_adjacency([("A", vec![("B", f64::NAN)])]);
        assert!(matches!(
            validate_capacities(&graph),
            Err(GraphError::NonFiniteCapacity { .. })
        ));
    }
}
