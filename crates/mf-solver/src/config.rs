//! Solve configuration.

use mf_core::Tolerances;

/// Options for [`crate::solve_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveConfig {
    /// Tolerances used when checking the returned assignment.
    pub tolerances: Tolerances,
    /// Reject negative or non-finite capacities before formulating.
    pub validate_graph: bool,
    /// Check capacity bounds and conservation on the solver's answer.
    pub verify_solution: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            tolerances: Tolerances {
                abs: 1e-7,
                rel: 1e-9,
            },
            validate_graph: true,
            verify_solution: true,
        }
    }
}
