use ndarray::prelude::*;

use super::direction::newton_direction;
use super::params::Params;
use crate::error::{Error, Result};
use crate::function::{scalar_point, Differentiable, Function};
use crate::jacobian::{Analytic, FiniteDifference, JacobianSource};
use crate::status::{Status, StatusCode};

fn norm(v: &Array1<f64>) -> f64 {
    v.dot(v).sqrt()
}

/// Newton-Raphson root finder for a fixed function, Jacobian source and [`Params`].
///
/// The solver never changes after construction. Every call to [`Solver::solve`]
/// keeps its own iterate, so one solver can be reused for many initial guesses.
pub struct Solver<'a> {
    f: &'a dyn Function,
    jacobian: Box<dyn JacobianSource + 'a>,
    params: Params,
}

impl<'a> Solver<'a> {
    /// Creates a solver that estimates Jacobians by finite differences.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidParams`] if `params` do not validate.
    pub fn new(f: &'a dyn Function, params: Params) -> Result<Self> {
        let source = FiniteDifference::new(params.dx, params.difference);
        Self::with_source(f, source, params)
    }

    /// Creates a solver using the analytic Jacobian `df`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidParams`] if `params` do not validate.
    pub fn with_jacobian<D>(f: &'a dyn Function, df: D, params: Params) -> Result<Self>
    where
        D: Fn(&Array1<f64>) -> Array2<f64> + 'a,
    {
        let source = Analytic::new(move |x: &Array1<f64>| Ok(df(x)));
        Self::with_source(f, source, params)
    }

    /// Creates a solver using the Jacobian that `f` provides itself.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidParams`] if `params` do not validate.
    pub fn analytic<F>(f: &'a F, params: Params) -> Result<Self>
    where
        F: Differentiable,
    {
        let source = Analytic::new(move |x: &Array1<f64>| f.jacobian(x));
        Self::with_source(f, source, params)
    }

    /// Creates a solver with an arbitrary [`JacobianSource`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidParams`] if `params` do not validate.
    pub fn with_source<S>(f: &'a dyn Function, source: S, params: Params) -> Result<Self>
    where
        S: JacobianSource + 'a,
    {
        params.validate()?;
        Ok(Self {
            f,
            jacobian: Box::new(source),
            params,
        })
    }

    /// Parameters this solver was built with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Takes a single Newton step starting from `x`.
    ///
    /// If `fx` is given it is assumed to equal `f(x)`.
    ///
    /// # Errors
    ///
    /// Propagates failures of the function or the Jacobian source, and fails with
    /// [`Error::NotSquare`] or [`Error::SingularJacobian`] if the linear system
    /// cannot be solved.
    pub fn step(&self, x: &Array1<f64>, fx: Option<&Array1<f64>>) -> Result<Array1<f64>> {
        let fx_owned;
        let fx = match fx {
            Some(fx) => fx,
            None => {
                fx_owned = self.f.evaluate(x)?;
                &fx_owned
            }
        };
        let jac = self.jacobian.jacobian(self.f, x)?;
        let h = newton_direction(jac, fx)?;
        Error::check_len(x.len(), h.len())?;
        Ok(x - &h)
    }

    /// Searches a root starting from the initial guess `x0`.
    ///
    /// # Errors
    ///
    /// See [`Solver::solve_with_status`].
    pub fn solve(&self, x0: &Array1<f64>) -> Result<Array1<f64>> {
        self.solve_with_status(x0).map(|status| status.x)
    }

    /// Searches a root starting from `x0` and reports how the search ended.
    ///
    /// The residual is tested before each step, so an initial guess within
    /// tolerance is returned without stepping. After each step the distance
    /// to `x0` is checked against `max_radius`. When the step budget runs out
    /// the last iterate is returned with [`StatusCode::MaxSteps`], unless
    /// `strict` is set.
    ///
    /// # Errors
    ///
    /// - [`Error::DivergedOutOfRadius`] if an iterate leaves the permitted radius
    /// - [`Error::FailedToConverge`] if `strict` is set and the budget is exhausted
    /// - any error of [`Solver::step`]
    pub fn solve_with_status(&self, x0: &Array1<f64>) -> Result<Status> {
        let params = &self.params;
        let mut status = Status::new(x0.clone());
        for step in 0..params.max_steps {
            status.steps = step;
            let fx = self.f.evaluate(&status.x)?;
            status.residual = norm(&fx);
            log::debug!("{:10} {:10.03e}", step, status.residual);

            if status.residual < params.tol {
                log::debug!("converged after {step} steps");
                status.code = StatusCode::Converged;
                return Ok(status);
            }

            status.x = self.step(&status.x, Some(&fx))?;

            if let Some(max_radius) = params.max_radius {
                let distance = norm(&(&status.x - x0));
                if distance > max_radius {
                    log::debug!("left radius {max_radius} at distance {distance}");
                    return Err(Error::DivergedOutOfRadius {
                        distance,
                        max_radius,
                        steps: step + 1,
                    });
                }
            }
        }
        status.steps = params.max_steps;
        status.code = StatusCode::MaxSteps;

        // residual belongs to the iterate before the last step
        if params.strict && status.residual > params.tol {
            return Err(Error::FailedToConverge {
                max_steps: params.max_steps,
                residual: status.residual,
            });
        }
        log::debug!(
            "no convergence within {} steps, residual {:e}",
            params.max_steps,
            status.residual
        );
        Ok(status)
    }

    /// Searches a root of a one-dimensional problem.
    ///
    /// # Errors
    ///
    /// See [`Solver::solve_with_status`].
    pub fn solve_scalar(&self, x0: f64) -> Result<f64> {
        scalar_point(&self.solve(&array![x0])?)
    }

    /// Takes a single Newton step of a one-dimensional problem.
    ///
    /// # Errors
    ///
    /// See [`Solver::step`].
    pub fn step_scalar(&self, x: f64) -> Result<f64> {
        scalar_point(&self.step(&array![x], None)?)
    }
}
