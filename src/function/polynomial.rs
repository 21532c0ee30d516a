use std::fmt;

use ndarray::prelude::*;

use super::scalar::scalar_point;
use super::{Differentiable, Function};
use crate::error::Result;

/// Scalar polynomial `c[0] + c[1] x + c[2] x^2 + ...`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients in ascending degree.
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    /// Coefficients in ascending degree.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluates the polynomial at `x` (Horner's scheme).
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Evaluates the first derivative at `x`.
    pub fn eval_derivative(&self, x: f64) -> f64 {
        self.coeffs
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (k, &c)| acc * x + k as f64 * c)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coeffs: Vec<String> = self.coeffs.iter().map(|c| c.to_string()).collect();
        write!(f, "Polynomial({})", coeffs.join(", "))
    }
}

impl Function for Polynomial {
    fn evaluate(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        Ok(array![self.eval(scalar_point(x)?)])
    }
}

impl Differentiable for Polynomial {
    fn jacobian(&self, x: &Array1<f64>) -> Result<Array2<f64>> {
        Ok(array![[self.eval_derivative(scalar_point(x)?)]])
    }
}
