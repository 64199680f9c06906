//! Error types for lattice-rs.
//!
//! Every fallible operation in the workspace returns [`Result`]. Pricing
//! either succeeds completely or fails during validation, before any lattice
//! is built; no error is retryable. The `ensure!` and `fail!` macros keep the
//! validation code short.

use thiserror::Error;

/// The top-level error type used throughout lattice-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A contract or model parameter is out of its admissible range
    /// (non-positive spot, zero steps, `u <= d`, risk-neutral probability
    /// outside `[0, 1]`, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An option, barrier, strike or mean type code is not recognised.
    #[error("unsupported type: {0}")]
    Unsupported(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout lattice-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidParameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lt_core::{ensure, errors::Error};
/// fn positive(x: f64) -> lt_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidParameter(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// Used for internal invariants that callers cannot violate through the
/// public constructors.
///
/// # Example
/// ```
/// use lt_core::{require, errors::Error};
/// fn non_empty(v: &[f64]) -> lt_core::errors::Result<f64> {
///     require!(!v.is_empty(), "empty value lattice");
///     Ok(v[0])
/// }
/// assert!(non_empty(&[1.0]).is_ok());
/// assert!(matches!(non_empty(&[]), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! require {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use lt_core::{fail, errors::Error};
/// fn always_err() -> lt_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
