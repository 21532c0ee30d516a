use serde::{Deserialize, Serialize};

use crate::error::ParamsError;
use crate::jacobian::Difference;

/// Parameters of Newton's method
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Termination tolerance on the residual norm
    pub tol: f64,
    /// Maximum number of steps
    pub max_steps: usize,
    /// Perturbation used for finite-difference Jacobians
    pub dx: f64,
    /// Maximum distance of an iterate from the initial guess (`None` for no limit)
    pub max_radius: Option<f64>,
    /// Whether running out of steps is an error
    pub strict: bool,
    /// Finite-difference scheme
    pub difference: Difference,
}

impl Params {
    const DEFAULT_TOL: f64 = 1e-6;
    const DEFAULT_MAX_STEPS: usize = 20;
    const DEFAULT_DX: f64 = 1e-6;

    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            tol: Self::DEFAULT_TOL,
            max_steps: Self::DEFAULT_MAX_STEPS,
            dx: Self::DEFAULT_DX,
            max_radius: None,
            strict: false,
            difference: Difference::Forward,
        }
    }

    /// Sets the termination tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the maximum number of steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets the finite-difference perturbation.
    pub fn with_dx(mut self, dx: f64) -> Self {
        self.dx = dx;
        self
    }

    /// Limits the distance of iterates from the initial guess.
    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        self.max_radius = Some(max_radius);
        self
    }

    /// Makes running out of steps an error.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Selects the finite-difference scheme.
    pub fn with_difference(mut self, difference: Difference) -> Self {
        self.difference = difference;
        self
    }

    /// Checks the parameters for consistency.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(ParamsError::Tolerance(self.tol));
        }
        if self.max_steps == 0 {
            return Err(ParamsError::MaxSteps);
        }
        if !self.dx.is_finite() || self.dx == 0.0 {
            return Err(ParamsError::StepSize(self.dx));
        }
        if let Some(max_radius) = self.max_radius {
            // NaN fails the comparison
            if !(max_radius > 0.0) {
                return Err(ParamsError::MaxRadius(max_radius));
            }
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
