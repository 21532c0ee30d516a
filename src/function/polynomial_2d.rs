use std::fmt;

use ndarray::prelude::*;

use super::{Differentiable, Function};
use crate::error::{Error, Result};

/// Two-dimensional polynomial system
///
/// ```text
/// y1 = (x1 + 10) (x2 - 10)
/// y2 = (x1 + 1) (x2 - 100)
/// ```
///
/// with roots `(-1, 10)` and `(-10, 100)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Polynomial2D;

impl Polynomial2D {
    const DIM: usize = 2;

    /// Creates the system.
    pub fn new() -> Self {
        Self
    }
}

impl fmt::Display for Polynomial2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[(x1 + 10)(x2 - 10), (x1 + 1)(x2 - 100)]")
    }
}

impl Function for Polynomial2D {
    fn evaluate(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        Error::check_len(Self::DIM, x.len())?;
        Ok(array![
            (x[0] + 10.0) * (x[1] - 10.0),
            (x[0] + 1.0) * (x[1] - 100.0)
        ])
    }
}

impl Differentiable for Polynomial2D {
    fn jacobian(&self, x: &Array1<f64>) -> Result<Array2<f64>> {
        Error::check_len(Self::DIM, x.len())?;
        Ok(array![
            [x[1] - 10.0, x[0] + 10.0],
            [x[1] - 100.0, x[0] + 1.0]
        ])
    }
}
