//! Edge capacities.

use core::fmt;
use core::str::FromStr;
use std::num::ParseFloatError;

use mf_core::Real;

/// Capacity of an edge: an integer or a decimal number.
///
/// The variant only matters for display. Comparison and arithmetic go
/// through [`Capacity::value`], so `Integer(4) == Decimal(4.0)`.
#[derive(Clone, Copy, Debug)]
pub enum Capacity {
    Integer(i64),
    Decimal(Real),
}

impl Capacity {
    /// Numeric value used by the LP formulation.
    pub fn value(self) -> Real {
        match self {
            Capacity::Integer(v) => v as Real,
            Capacity::Decimal(v) => v,
        }
    }

    pub fn is_zero(self) -> bool {
        self.value() == 0.0
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity::Integer(0)
    }
}

impl PartialEq for Capacity {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Integer(v) => write!(f, "{v}"),
            Capacity::Decimal(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Capacity::Decimal(v) => write!(f, "{v}"),
        }
    }
}

/// Integer first, falling back to floating point.
impl FromStr for Capacity {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Capacity::Integer(v));
        }
        s.parse::<Real>().map(Capacity::Decimal)
    }
}

impl From<i32> for Capacity {
    fn from(v: i32) -> Self {
        Capacity::Integer(v.into())
    }
}

impl From<i64> for Capacity {
    fn from(v: i64) -> Self {
        Capacity::Integer(v)
    }
}

impl From<u32> for Capacity {
    fn from(v: u32) -> Self {
        Capacity::Integer(v.into())
    }
}

impl From<Real> for Capacity {
    fn from(v: Real) -> Self {
        Capacity::Decimal(v)
    }
}
