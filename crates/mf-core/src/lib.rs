//! mf-core: shared foundation for maxflow-lp.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

pub use error::{MfError, MfResult};
pub use numeric::*;
