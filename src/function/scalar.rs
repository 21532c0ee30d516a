use ndarray::prelude::*;

use super::Function;
use crate::error::{Error, Result};

/// Adapter turning a plain `f64 -> f64` closure into a one-dimensional [`Function`].
pub struct Scalar<F>(pub F);

impl<F> Function for Scalar<F>
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        Ok(array![(self.0)(scalar_point(x)?)])
    }
}

/// Extracts the single coordinate of a one-dimensional point.
pub(crate) fn scalar_point(x: &Array1<f64>) -> Result<f64> {
    Error::check_len(1, x.len())?;
    Ok(x[0])
}
