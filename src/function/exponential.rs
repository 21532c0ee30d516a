use std::fmt;

use ndarray::prelude::*;

use super::scalar::scalar_point;
use super::{Differentiable, Function};
use crate::error::Result;

/// Scalar exponential `a * exp(b * x) + c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exponential {
    /// Amplitude
    pub a: f64,
    /// Rate
    pub b: f64,
    /// Offset
    pub c: f64,
}

impl Exponential {
    const DEFAULT_A: f64 = 1.0;
    const DEFAULT_B: f64 = 1.0;
    const DEFAULT_C: f64 = -1.0;

    /// Creates `a * exp(b * x) + c`.
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

impl Default for Exponential {
    fn default() -> Self {
        Self::new(Self::DEFAULT_A, Self::DEFAULT_B, Self::DEFAULT_C)
    }
}

impl fmt::Display for Exponential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * exp({} * x) + {}", self.a, self.b, self.c)
    }
}

impl Function for Exponential {
    fn evaluate(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        let x = scalar_point(x)?;
        Ok(array![self.a * (self.b * x).exp() + self.c])
    }
}

impl Differentiable for Exponential {
    fn jacobian(&self, x: &Array1<f64>) -> Result<Array2<f64>> {
        let x = scalar_point(x)?;
        Ok(array![[self.a * self.b * (self.b * x).exp()]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jacobian::approximate_jacobian;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn evaluates() {
        let f = Exponential::new(1.0, 2.0, 3.0);
        for i in 0..=10 {
            let x = -2.0 + 0.4 * i as f64;
            let y = f.evaluate(&array![x]).unwrap();
            assert_relative_eq!(y[0], (2.0 * x).exp() + 3.0);
        }
    }

    #[test]
    fn default_has_root_at_zero() {
        let y = Exponential::default().evaluate(&array![0.0]).unwrap();
        assert_eq!(y[0], 0.0);
    }

    #[test]
    fn analytic_jacobian_matches_estimate() {
        let f = Exponential::new(1.0, 2.0, 3.0);
        let x0 = array![2.0];
        let analytic = f.jacobian(&x0).unwrap();
        let approx = approximate_jacobian(&f, &x0, 1e-6).unwrap();
        assert_abs_diff_eq!(approx[[0, 0]], analytic[[0, 0]], epsilon = 1e-3);
    }
}
