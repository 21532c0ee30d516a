use ndarray::prelude::*;

use crate::error::{Error, Result};

#[cfg(feature = "lapack")]
use ndarray_linalg::{FactorizeInto, Solve};

#[cfg(not(feature = "lapack"))]
mod nolapack;
#[cfg(not(feature = "lapack"))]
use nolapack::solve_lu;
#[cfg(not(feature = "lapack"))]
pub use nolapack::LinalgError;

/// Error reported by the linear algebra backend.
#[cfg(feature = "lapack")]
pub type LinalgError = ndarray_linalg::error::LinalgError;

/// Computes the Newton direction `h` solving `jac * h = fx`.
pub fn newton_direction(jac: Array2<f64>, fx: &Array1<f64>) -> Result<Array1<f64>> {
    let (rows, cols) = jac.dim();
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    Error::check_len(rows, fx.len())?;
    solve_lu(jac, fx)
}

#[cfg(feature = "lapack")]
fn solve_lu(jac: Array2<f64>, fx: &Array1<f64>) -> Result<Array1<f64>> {
    let jac_fact = jac.factorize_into().map_err(Error::SingularJacobian)?;
    jac_fact
        .solve_into(fx.clone())
        .map_err(Error::SingularJacobian)
}
