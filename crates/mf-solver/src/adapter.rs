//! Solver adapter: the seam between the formulation and an LP engine.

use mf_core::Real;
use minilp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem, Variable};
use nalgebra::{DMatrix, DVector};

use crate::error::{SolverError, SolverResult};
use crate::problem::LpProblem;

/// Optimal point returned by a solver.
#[derive(Debug, Clone, PartialEq)]
pub struct LpSolution {
    /// Value of every variable, in column order.
    pub x: DVector<Real>,
    /// Objective value at `x`.
    pub objective: Real,
}

/// Anything that can minimize a standard-form [`LpProblem`].
///
/// Implementations report [`SolverError::Infeasible`],
/// [`SolverError::Unbounded`] or [`SolverError::NumericalFailure`] instead of
/// a solution; they never substitute a default point.
pub trait LpSolver {
    fn solve(&self, problem: &LpProblem) -> SolverResult<LpSolution>;
}

impl<S: LpSolver + ?Sized> LpSolver for &S {
    fn solve(&self, problem: &LpProblem) -> SolverResult<LpSolution> {
        (**self).solve(problem)
    }
}

/// Dense simplex backend built on `minilp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinilpSolver;

impl MinilpSolver {
    pub fn new() -> Self {
        Self
    }

    /// Add one row per matrix row. All-zero rows are decided here rather
    /// than passed on: they either hold trivially or make the LP infeasible.
    fn add_rows(
        lp: &mut Problem,
        vars: &[Variable],
        a: &DMatrix<Real>,
        b: &DVector<Real>,
        op: ComparisonOp,
    ) -> SolverResult<()> {
        for (row, &rhs) in a.row_iter().zip(b.iter()) {
            let mut expr = LinearExpr::empty();
            let mut terms = 0;
            for (&var, &coeff) in vars.iter().zip(row.iter()) {
                if coeff != 0.0 {
                    expr.add(var, coeff);
                    terms += 1;
                }
            }
            if terms == 0 {
                let holds = match op {
                    ComparisonOp::Eq => rhs == 0.0,
                    ComparisonOp::Le => 0.0 <= rhs,
                    ComparisonOp::Ge => 0.0 >= rhs,
                };
                if !holds {
                    return Err(SolverError::Infeasible);
                }
                continue;
            }
            lp.add_constraint(expr, op, rhs);
        }
        Ok(())
    }

    /// minilp reports a free variable that can grow without limit as an
    /// `Ok` point at infinity rather than as `Error::Unbounded`. Sort such
    /// points into `Unbounded`; NaN and infinities that do not improve the
    /// objective are numerical failures.
    fn classify_point(c: &DVector<Real>, x: &DVector<Real>, objective: Real) -> SolverResult<()> {
        if objective.is_nan() || x.iter().any(|v| v.is_nan()) {
            return Err(SolverError::NumericalFailure {
                what: "solver returned NaN".into(),
            });
        }
        let improving = c.iter().zip(x.iter()).any(|(&ci, &xi)| ci * xi == Real::NEG_INFINITY);
        if objective == Real::NEG_INFINITY || improving {
            return Err(SolverError::Unbounded);
        }
        if !objective.is_finite() || x.iter().any(|v| v.is_infinite()) {
            return Err(SolverError::NumericalFailure {
                what: "solver returned a non-finite value".into(),
            });
        }
        Ok(())
    }
}

impl LpSolver for MinilpSolver {
    fn solve(&self, problem: &LpProblem) -> SolverResult<LpSolution> {
        problem.validate()?;
        for (what, v) in [("c", &problem.c), ("b_ub", &problem.b_ub), ("b_eq", &problem.b_eq)] {
            if v.iter().any(|x| !x.is_finite()) {
                return Err(SolverError::NumericalFailure {
                    what: format!("non-finite entry in {what}"),
                });
            }
        }

        let mut lp = Problem::new(OptimizationDirection::Minimize);
        let vars: Vec<Variable> = problem
            .c
            .iter()
            .map(|&c| lp.add_var(c, (Real::NEG_INFINITY, Real::INFINITY)))
            .collect();
        Self::add_rows(&mut lp, &vars, &problem.a_ub, &problem.b_ub, ComparisonOp::Le)?;
        Self::add_rows(&mut lp, &vars, &problem.a_eq, &problem.b_eq, ComparisonOp::Eq)?;

        let solution = lp.solve().map_err(|e| match e {
            minilp::Error::Infeasible => SolverError::Infeasible,
            minilp::Error::Unbounded => SolverError::Unbounded,
        })?;

        let x = DVector::from_iterator(vars.len(), vars.iter().map(|&v| solution[v]));
        let objective = solution.objective();
        Self::classify_point(&problem.c, &x, objective)?;
        Ok(LpSolution { x, objective })
    }
}
