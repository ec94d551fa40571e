use thiserror::Error;

/// Faults that stop a time-to-goal calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("power per tick must be positive (got {0})")]
    NonPositiveRate(f64),
    #[error("time to goal is too large to display")]
    OutOfRange,
}
