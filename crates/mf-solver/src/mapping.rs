//! Result mapping: solver vector back onto graph edges.

use mf_core::{Real, ensure_finite};
use mf_graph::Edge;
use nalgebra::DVector;

use crate::assignment::{EdgeFlow, FlowAssignment};
use crate::error::{SolverError, SolverResult};
use crate::formulation::FLOW_VALUE_SLOT;

/// Zip slots `1..=E` of `x` against `edges`.
///
/// `x` must have exactly `edges.len() + 2` entries. Anything else means the
/// formulation and the edge list disagree, which is reported as
/// [`SolverError::Invariant`] instead of a truncated assignment.
pub fn map_solution(edges: &[Edge], x: &DVector<Real>) -> SolverResult<FlowAssignment> {
    if x.len() != edges.len() + 2 {
        return Err(SolverError::Invariant {
            what: format!(
                "solution has {} entries for {} edges (expected {})",
                x.len(),
                edges.len(),
                edges.len() + 2
            ),
        });
    }
    let value = ensure_finite(x[FLOW_VALUE_SLOT], "flow value").map_err(|e| {
        SolverError::NumericalFailure {
            what: e.to_string(),
        }
    })?;
    let flows = x.rows(1, edges.len());
    Ok(FlowAssignment {
        value,
        edges: edges
            .iter()
            .zip(flows.iter())
            .map(|(edge, &flow)| EdgeFlow {
                origin: edge.origin.clone(),
                destination: edge.destination.clone(),
                capacity: edge.capacity.value(),
                flow,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges() -> Vec<Edge> {
        vec![Edge::new("A", "B", 3), Edge::new("B", "C", 2.5)]
    }

    #[test]
    fn drops_first_and_last_slot() {
        let x = DVector::from_vec(vec![2.0, 2.0, 1.5, 7.0]);
        let a = map_solution(&edges(), &x).unwrap();
        assert_eq!(a.value, 2.0);
        assert_eq!(a.triples(), vec![("A", "B", 2.0), ("B", "C", 1.5)]);
        assert_eq!(a.edges[1].capacity, 2.5);
    }

    #[test]
    fn length_mismatch_is_invariant_violation() {
        let short = DVector::from_vec(vec![2.0, 2.0, 1.5]);
        assert!(matches!(
            map_solution(&edges(), &short),
            Err(SolverError::Invariant { .. })
        ));
        let long = DVector::from_vec(vec![0.0; 5]);
        assert!(map_solution(&edges(), &long).is_err());
    }

    #[test]
    fn nan_flow_value_rejected() {
        let x = DVector::from_vec(vec![f64::NAN, 2.0, 1.5, 0.0]);
        assert!(matches!(
            map_solution(&edges(), &x),
            Err(SolverError::NumericalFailure { .. })
        ));
    }

    #[test]
    fn no_edges() {
        let a = map_solution(&[], &DVector::from_vec(vec![0.0, 0.0])).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.value, 0.0);
    }
}
