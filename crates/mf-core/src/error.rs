use thiserror::Error;

pub type MfResult<T> = Result<T, MfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Lookup failed: {what}")]
    NotFound { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
