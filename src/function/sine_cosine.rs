use std::fmt;

use ndarray::prelude::*;

use super::scalar::scalar_point;
use super::{Differentiable, Function};
use crate::error::Result;

/// Scalar trigonometric combination `a * sin(b * x) + c * cos(d * x)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SineCosine {
    /// Sine amplitude
    pub a: f64,
    /// Sine frequency
    pub b: f64,
    /// Cosine amplitude
    pub c: f64,
    /// Cosine frequency
    pub d: f64,
}

impl SineCosine {
    /// Creates `a * sin(b * x) + c * cos(d * x)`.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }
}

impl fmt::Display for SineCosine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} * sin({} * x) + {} * cos({} * x)",
            self.a, self.b, self.c, self.d
        )
    }
}

impl Function for SineCosine {
    fn evaluate(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        let x = scalar_point(x)?;
        Ok(array![
            self.a * (self.b * x).sin() + self.c * (self.d * x).cos()
        ])
    }
}

impl Differentiable for SineCosine {
    fn jacobian(&self, x: &Array1<f64>) -> Result<Array2<f64>> {
        let x = scalar_point(x)?;
        Ok(array![[
            self.a * self.b * (self.b * x).cos() - self.c * self.d * (self.d * x).sin()
        ]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jacobian::approximate_jacobian;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn evaluates() {
        let f = SineCosine::new(1.0, 2.0, 3.0, 4.0);
        for i in 0..=10 {
            let x = -2.0 + 0.4 * i as f64;
            let y = f.evaluate(&array![x]).unwrap();
            assert_relative_eq!(y[0], (2.0 * x).sin() + 3.0 * (4.0 * x).cos());
        }
    }

    #[test]
    fn analytic_jacobian_matches_estimate() {
        let f = SineCosine::new(1.0, 2.0, 3.0, 4.0);
        let x0 = array![2.0];
        let analytic = f.jacobian(&x0).unwrap();
        let approx = approximate_jacobian(&f, &x0, 1e-6).unwrap();
        assert_abs_diff_eq!(approx[[0, 0]], analytic[[0, 0]], epsilon = 1e-4);
    }
}
