use ndarray::Array1;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Possible outcomes of a root search
pub enum StatusCode {
    /// Search not started
    Initialized,
    /// Residual norm dropped below the tolerance
    Converged,
    /// Maximum number of steps reached
    MaxSteps,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A struct containing the final iterate and some information about the search
pub struct Status {
    /// Current iterate
    pub x: Array1<f64>,
    /// Norm of the last evaluated residual
    pub residual: f64,
    /// Number of conducted Newton steps
    pub steps: usize,
    /// Current status
    pub code: StatusCode,
}

impl Status {
    /// Create a [`Status`] struct starting at `x0`
    pub fn new(x0: Array1<f64>) -> Status {
        Status {
            x: x0,
            residual: f64::INFINITY,
            steps: 0,
            code: StatusCode::Initialized,
        }
    }

    /// Whether the residual norm dropped below the tolerance
    pub fn converged(&self) -> bool {
        self.code == StatusCode::Converged
    }
}
