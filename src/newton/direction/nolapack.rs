use ndarray::prelude::*;
use rulinalg::error::ErrorKind;
use rulinalg::matrix::decomposition::PartialPivLu;
use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

use crate::error::{Error, Result};

/// Error reported by the linear algebra backend.
pub use rulinalg::error::Error as LinalgError;

/// Solves the square system `jac * h = fx` by LU decomposition with partial pivoting.
pub(super) fn solve_lu(jac: Array2<f64>, fx: &Array1<f64>) -> Result<Array1<f64>> {
    let n = jac.nrows();
    let mat = Matrix::new(n, n, jac.iter().cloned().collect::<Vec<f64>>());
    let rhs = Vector::new(fx.to_vec());

    let mat_fact = PartialPivLu::decompose(mat).map_err(Error::SingularJacobian)?;
    let mat_inv_rhs = mat_fact.solve(rhs).map_err(Error::SingularJacobian)?;
    let h = mat_inv_rhs.into_vec();
    // a finite right-hand side only yields a non-finite solution through a zero pivot
    if fx.iter().all(|fi| fi.is_finite()) && h.iter().any(|hi| !hi.is_finite()) {
        return Err(Error::SingularJacobian(LinalgError::new(
            ErrorKind::DivByZero,
            "matrix is singular to working precision",
        )));
    }
    Ok(Array1::from(h))
}
