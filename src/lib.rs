//! Find roots of nonlinear systems with Newton's method.
//!
//! ```
//! use ndarray::array;
//! use rusnewton::newton::{Params, Solver};
//!
//! let f = |x: &ndarray::Array1<f64>| array![x[0] + x[1] - 7.0, x[0] + 2.0 * x[1] - 11.0];
//! let solver = Solver::new(&f, Params::new()).unwrap();
//! let root = solver.solve(&array![1.0, 1.0]).unwrap();
//! assert!((root[0] - 3.0).abs() < 1e-6 && (root[1] - 4.0).abs() < 1e-6);
//! ```
#![warn(missing_docs)]

mod error;
pub mod function;
pub mod jacobian;
pub mod newton;

mod status;
pub use crate::error::{Error, ParamsError, Result};
pub use crate::status::{Status, StatusCode};
