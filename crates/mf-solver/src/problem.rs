//! Standard-form LP arrays.

use mf_core::Real;
use nalgebra::{DMatrix, DVector};

use crate::error::{SolverError, SolverResult};

/// A linear program in the form handed to the solver:
///
/// minimize `c . x` subject to `a_ub x <= b_ub` and `a_eq x = b_eq`.
///
/// Variables carry no implicit bounds; non-negativity, when wanted, is
/// written as rows of `a_ub`.
#[derive(Debug, Clone, PartialEq)]
pub struct LpProblem {
    /// Objective coefficients, one per variable.
    pub c: DVector<Real>,
    /// Inequality rows.
    pub a_ub: DMatrix<Real>,
    /// Inequality right-hand side.
    pub b_ub: DVector<Real>,
    /// Equality rows.
    pub a_eq: DMatrix<Real>,
    /// Equality right-hand side.
    pub b_eq: DVector<Real>,
}

impl LpProblem {
    /// Number of variables (columns).
    pub fn num_vars(&self) -> usize {
        self.c.len()
    }

    pub fn num_inequalities(&self) -> usize {
        self.a_ub.nrows()
    }

    pub fn num_equalities(&self) -> usize {
        self.a_eq.nrows()
    }

    /// Check that all arrays agree on their shapes.
    pub fn validate(&self) -> SolverResult<()> {
        let n = self.num_vars();
        if self.a_ub.ncols() != n || self.a_eq.ncols() != n {
            return Err(SolverError::ProblemSetup {
                what: format!(
                    "column count mismatch: c has {}, a_ub has {}, a_eq has {}",
                    n,
                    self.a_ub.ncols(),
                    self.a_eq.ncols()
                ),
            });
        }
        if self.b_ub.len() != self.a_ub.nrows() {
            return Err(SolverError::ProblemSetup {
                what: format!(
                    "b_ub length mismatch: {} != {}",
                    self.b_ub.len(),
                    self.a_ub.nrows()
                ),
            });
        }
        if self.b_eq.len() != self.a_eq.nrows() {
            return Err(SolverError::ProblemSetup {
                what: format!(
                    "b_eq length mismatch: {} != {}",
                    self.b_eq.len(),
                    self.a_eq.nrows()
                ),
            });
        }
        Ok(())
    }

    /// Objective value at `x`.
    ///
    /// # Errors
    /// [`SolverError::Invariant`] if `x` does not have one entry per variable.
    pub fn objective_at(&self, x: &DVector<Real>) -> SolverResult<Real> {
        if x.len() != self.num_vars() {
            return Err(SolverError::Invariant {
                what: format!(
                    "point has {} entries for {} variables",
                    x.len(),
                    self.num_vars()
                ),
            });
        }
        Ok(self.c.dot(x))
    }
}
