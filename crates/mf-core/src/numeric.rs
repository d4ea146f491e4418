use crate::MfError;

/// Floating point type used throughout the system.
pub type Real = f64;

/// Absolute and relative tolerance pair.
///
/// Solver output is compared with these rather than with `==`; the
/// defaults are loose enough for simplex round-off on small graphs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

/// `|a - b|` within `tol.abs`, or within `tol.rel` of the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= tol.abs.max(tol.rel * scale)
}

/// `a <= b`, allowing `a` to exceed `b` by the tolerance.
pub fn at_most(a: Real, b: Real, tol: Tolerances) -> bool {
    a <= b || nearly_equal(a, b, tol)
}

/// Pass `v` through unless it is NaN or infinite.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, MfError> {
    v.is_finite()
        .then_some(v)
        .ok_or(MfError::NonFinite { what, value: v })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn at_most_is_reflexive(a in -1e6_f64..1e6) {
            prop_assert!(at_most(a, a, Tolerances::default()));
        }
    }
}
