use thiserror::Error;

/// Errors originating from complex-number operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ComplexError {
    #[error("division by zero: divisor is 0 + 0i")]
    DivisionByZero,

    #[error("invalid modulus: {0} (must be >= 0.0)")]
    InvalidModulus(f64),

    #[error("non-finite component in {re} + {im}i")]
    NonFiniteComponent { re: f64, im: f64 },

    #[error("invalid tolerance: abs = {abs}, rel = {rel} (both must be finite and >= 0.0)")]
    InvalidTolerance { abs: f64, rel: f64 },
}
