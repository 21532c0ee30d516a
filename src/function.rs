//! Functions whose roots can be searched.
mod exponential;
mod polynomial;
mod polynomial_2d;
mod scalar;
mod sine_cosine;

use ndarray::prelude::*;

use crate::error::Result;
pub use exponential::Exponential;
pub use polynomial::Polynomial;
pub use polynomial_2d::Polynomial2D;
pub(crate) use scalar::scalar_point;
pub use scalar::Scalar;
pub use sine_cosine::SineCosine;

/// A (possibly vector-valued) function `f(x) -> y`.
///
/// Implementations should return [`Error::DimensionMismatch`](crate::Error::DimensionMismatch)
/// when `x` does not have the length they expect.
pub trait Function {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: &Array1<f64>) -> Result<Array1<f64>>;
}

/// A [`Function`] that also knows its Jacobian.
pub trait Differentiable: Function {
    /// Evaluates the Jacobian at `x`, with entry `[row, col]` holding the
    /// derivative of output `row` with respect to input `col`.
    fn jacobian(&self, x: &Array1<f64>) -> Result<Array2<f64>>;
}

impl<F> Function for F
where
    F: Fn(&Array1<f64>) -> Array1<f64>,
{
    fn evaluate(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        Ok(self(x))
    }
}
