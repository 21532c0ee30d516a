use std::error::Error as StdError;

use thiserror::Error;

use crate::newton::LinalgError;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the solver and by function evaluations.
#[derive(Debug, Error)]
pub enum Error {
    /// The solver parameters were rejected.
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] ParamsError),

    /// A point or residual does not have the expected length.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Length required by the receiver
        expected: usize,
        /// Length actually supplied
        found: usize,
    },

    /// The Jacobian is not a square matrix.
    #[error("jacobian must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The linear system of a Newton step could not be solved.
    #[error("jacobian is singular")]
    SingularJacobian(#[source] LinalgError),

    /// An iterate left the ball of radius `max_radius` around the initial guess.
    #[error("root estimate left permitted radius after {steps} steps ({distance} > {max_radius})")]
    DivergedOutOfRadius {
        /// Distance of the offending iterate from the initial guess
        distance: f64,
        /// Permitted radius
        max_radius: f64,
        /// Number of steps taken, including the offending one
        steps: usize,
    },

    /// The step budget was exhausted (only with strict convergence).
    #[error("failed to converge within {max_steps} steps (residual norm {residual:e})")]
    FailedToConverge {
        /// Step budget
        max_steps: usize,
        /// Residual norm evaluated before the last step
        residual: f64,
    },

    /// Any other failure of a user-supplied function.
    #[error("function evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}

/// Reasons for rejecting a set of [`Params`](crate::newton::Params).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamsError {
    /// Tolerance not finite and positive
    #[error("tol must be finite and positive, got {0}")]
    Tolerance(f64),

    /// Zero step budget
    #[error("max_steps must be at least 1")]
    MaxSteps,

    /// Perturbation zero or not finite
    #[error("dx must be finite and nonzero, got {0}")]
    StepSize(f64),

    /// Radius not positive
    #[error("max_radius must be positive, got {0}")]
    MaxRadius(f64),
}

impl Error {
    /// Wraps an arbitrary error raised by a user-supplied function.
    pub fn function<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Error::Function(Box::new(err))
    }

    pub(crate) fn check_len(expected: usize, found: usize) -> Result<()> {
        if expected != found {
            return Err(Error::DimensionMismatch { expected, found });
        }
        Ok(())
    }
}
