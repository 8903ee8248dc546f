pub mod complex;
pub mod error;
pub mod polar;
pub mod tolerance;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::ComplexError;
pub use polar::{normalize_angle, PolarForm};
pub use tolerance::Tolerance;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, ComplexError>;
