//! High-level solver interface.

use mf_graph::{Edge, FlowGraph};

use crate::adapter::{LpSolver, MinilpSolver};
use crate::assignment::FlowAssignment;
use crate::config::SolveConfig;
use crate::error::{SolverError, SolverResult};
use crate::formulation::Formulation;
use crate::mapping::map_solution;

/// Maximum flow from the first node to the last, with the default solver
/// and configuration.
pub fn solve(graph: &FlowGraph) -> SolverResult<FlowAssignment> {
    solve_with(graph, &MinilpSolver, &SolveConfig::default())
}

/// Maximum flow from the first node to the last.
///
/// This function:
/// 1. Optionally validates capacities
/// 2. Builds the LP arrays (see [`Formulation`])
/// 3. Hands them to `solver`
/// 4. Maps slots `1..=E` of the optimum back onto the edges
/// 5. Optionally checks capacities and conservation on the result
///
/// Solver failures are returned as-is; nothing is retried and no zero flow
/// is substituted.
pub fn solve_with<S>(
    graph: &FlowGraph,
    solver: &S,
    config: &SolveConfig,
) -> SolverResult<FlowAssignment>
where
    S: LpSolver + ?Sized,
{
    if graph.is_empty() {
        return Err(SolverError::ProblemSetup {
            what: "graph has no nodes, so no source or sink".into(),
        });
    }
    if config.validate_graph {
        graph.validate()?;
    }

    let formulation = Formulation::new(graph);
    let lp = formulation.build();
    let solution = solver.solve(&lp).inspect_err(|e| {
        tracing::info!(error = %e, "max-flow LP has no optimum");
    })?;

    let edges: Vec<Edge> = graph.edges().collect();
    let assignment = map_solution(&edges, &solution.x)?;

    if config.verify_solution {
        let tol = config.tolerances;
        if let Err(e) = assignment
            .check_capacities(tol)
            .and_then(|()| assignment.check_conservation(graph, tol))
        {
            tracing::warn!(error = %e, "solver answer failed verification");
            return Err(e);
        }
    }

    tracing::info!(
        source = graph.source().unwrap_or_default(),
        sink = graph.sink().unwrap_or_default(),
        value = assignment.value,
        objective = solution.objective,
        "max flow solved"
    );
    Ok(assignment)
}
