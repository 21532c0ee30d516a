//! Jacobians from finite differences or from user-supplied derivatives.
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::function::Function;

/// Finite-difference scheme used to estimate a Jacobian.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difference {
    /// `(f(x + dx e_i) - f(x)) / dx`, error O(dx)
    #[default]
    Forward,
    /// `(f(x + dx e_i) - f(x - dx e_i)) / (2 dx)`, error O(dx^2)
    Central,
}

/// Estimates the Jacobian of `f` at `x` with forward differences.
///
/// Column `i` is `(f(x + dx e_i) - f(x)) / dx`. The result is exact for affine
/// functions up to rounding. Too large a `dx` increases the truncation error,
/// too small a `dx` amplifies cancellation.
pub fn approximate_jacobian(f: &dyn Function, x: &Array1<f64>, dx: f64) -> Result<Array2<f64>> {
    let n = x.len();
    let fx = f.evaluate(x)?;
    let mut jac = Array2::zeros((fx.len(), n));
    let mut xp = x.clone();
    for i in 0..n {
        xp[i] = x[i] + dx;
        let fp = f.evaluate(&xp)?;
        Error::check_len(fx.len(), fp.len())?;
        jac.column_mut(i).assign(&((fp - &fx) / dx));
        xp[i] = x[i];
    }
    Ok(jac)
}

/// Estimates the Jacobian of `f` at `x` with central differences.
pub fn approximate_jacobian_central(
    f: &dyn Function,
    x: &Array1<f64>,
    dx: f64,
) -> Result<Array2<f64>> {
    let n = x.len();
    let mut jac = Array2::zeros((0, n));
    let mut xp = x.clone();
    let mut xm = x.clone();
    for i in 0..n {
        xp[i] = x[i] + dx;
        xm[i] = x[i] - dx;
        let fp = f.evaluate(&xp)?;
        let fm = f.evaluate(&xm)?;
        Error::check_len(fp.len(), fm.len())?;
        if i == 0 {
            jac = Array2::zeros((fp.len(), n));
        } else {
            Error::check_len(jac.nrows(), fp.len())?;
        }
        jac.column_mut(i).assign(&((fp - fm) / (2.0 * dx)));
        xp[i] = x[i];
        xm[i] = x[i];
    }
    Ok(jac)
}

/// Source of Jacobians for the Newton step, fixed when a solver is built.
pub trait JacobianSource {
    /// Returns the Jacobian of `f` at `x`.
    fn jacobian(&self, f: &dyn Function, x: &Array1<f64>) -> Result<Array2<f64>>;
}

/// Jacobians estimated by finite differences.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiniteDifference {
    /// Perturbation of each coordinate
    pub dx: f64,
    /// Difference scheme
    pub difference: Difference,
}

impl FiniteDifference {
    /// Creates a finite-difference source.
    pub fn new(dx: f64, difference: Difference) -> Self {
        Self { dx, difference }
    }
}

impl JacobianSource for FiniteDifference {
    fn jacobian(&self, f: &dyn Function, x: &Array1<f64>) -> Result<Array2<f64>> {
        log::trace!("estimating {:?} jacobian with dx = {:e}", self.difference, self.dx);
        match self.difference {
            Difference::Forward => approximate_jacobian(f, x, self.dx),
            Difference::Central => approximate_jacobian_central(f, x, self.dx),
        }
    }
}

/// Jacobians computed by a user-supplied derivative.
pub struct Analytic<D> {
    df: D,
}

impl<D> Analytic<D>
where
    D: Fn(&Array1<f64>) -> Result<Array2<f64>>,
{
    /// Wraps the derivative `df`.
    pub fn new(df: D) -> Self {
        Self { df }
    }
}

impl<D> JacobianSource for Analytic<D>
where
    D: Fn(&Array1<f64>) -> Result<Array2<f64>>,
{
    fn jacobian(&self, _f: &dyn Function, x: &Array1<f64>) -> Result<Array2<f64>> {
        log::trace!("evaluating analytic jacobian");
        (self.df)(x)
    }
}
