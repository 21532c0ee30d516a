//! Newton's method for square systems of nonlinear equations.
mod direction;
mod params;
mod solve;

pub use direction::{newton_direction, LinalgError};
pub use params::Params;
pub use solve::Solver;
