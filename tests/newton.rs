use approx::{assert_abs_diff_eq, assert_relative_eq};
use ndarray::prelude::*;

use rusnewton::function::{Differentiable, Exponential, Function, Polynomial2D, Scalar};
use rusnewton::jacobian::{approximate_jacobian, Difference};
use rusnewton::newton::{Params, Solver};
use rusnewton::{Error, Result, StatusCode};

/// Polynomial2D with a deliberately perturbed Jacobian.
struct Polynomial2DWrongJacobian;

impl Function for Polynomial2DWrongJacobian {
    fn evaluate(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        Polynomial2D.evaluate(x)
    }
}

impl Differentiable for Polynomial2DWrongJacobian {
    fn jacobian(&self, x: &Array1<f64>) -> Result<Array2<f64>> {
        Ok(array![
            [(x[1] - 10.0) * 1.1, x[0] + 10.0],
            [x[1] - 100.0, x[0] + 1.0 - 0.4]
        ])
    }
}

fn linear_2d(x: &Array1<f64>) -> Array1<f64> {
    array![x[0] + x[1] - 7.0, x[0] + 2.0 * x[1] - 11.0]
}

fn singular(x: &Array1<f64>) -> Array1<f64> {
    array![x[0] + 2.0 * x[1], 2.0 * x[0] + 4.0 * x[1]]
}

#[test]
fn linear_scalar_with_analytic_jacobian_is_exact() {
    let f = Scalar(|x: f64| 3.0 * x + 6.0);
    let params = Params::new().with_tol(1e-15).with_max_steps(2);
    let solver = Solver::with_jacobian(&f, |_| array![[3.0]], params).unwrap();
    let status = solver.solve_with_status(&array![2.0]).unwrap();
    assert_eq!(status.x, array![-2.0]);
    assert_eq!(status.steps, 1);
    assert_eq!(status.code, StatusCode::Converged);
}

#[test]
fn linear_scalar_with_estimated_jacobian() {
    let f = Scalar(|x: f64| 3.0 * x + 6.0);
    let params = Params::new().with_tol(1e-15).with_max_steps(2);
    let solver = Solver::new(&f, params).unwrap();
    let x = solver.solve_scalar(2.0).unwrap();
    assert_relative_eq!(x, -2.0, epsilon = 1e-12);
}

#[test]
fn linear_scalar_from_any_guess() {
    let (m, k) = (-0.5, 4.0);
    let f = Scalar(move |x: f64| m * x + k);
    let solver = Solver::with_jacobian(&f, move |_| array![[m]], Params::new()).unwrap();
    for x0 in [-100.0, -1.0, 0.0, 3.5, 1e3] {
        let status = solver.solve_with_status(&array![x0]).unwrap();
        assert_relative_eq!(status.x[0], -k / m);
        assert!(status.steps <= 1);
    }
}

#[test]
fn quadratic_finds_both_roots() {
    let f = Scalar(|x: f64| x * x - 9.0);
    let params = Params::new().with_tol(1e-11).with_max_steps(10);
    let solver = Solver::new(&f, params).unwrap();
    assert_abs_diff_eq!(solver.solve_scalar(2.0).unwrap(), 3.0, epsilon = 1e-11);
    assert_abs_diff_eq!(solver.solve_scalar(-2.0).unwrap(), -3.0, epsilon = 1e-11);
}

#[test]
fn tighter_tolerance_never_takes_fewer_steps() {
    let f = Scalar(|x: f64| x * x - 9.0);
    let mut last_steps = 0;
    for tol in [1e-2, 1e-4, 1e-6, 1e-8, 1e-10, 1e-12] {
        let solver = Solver::new(&f, Params::new().with_tol(tol).with_max_steps(50)).unwrap();
        let status = solver.solve_with_status(&array![2.0]).unwrap();
        assert!(status.converged());
        assert!(status.steps >= last_steps);
        last_steps = status.steps;
    }
}

#[test]
fn linear_system_estimated_matches_analytic() {
    let x0 = array![1.0, 1.0];
    let estimated = Solver::new(&linear_2d, Params::new())
        .unwrap()
        .solve(&x0)
        .unwrap();
    let jac = |_: &Array1<f64>| array![[1.0, 1.0], [1.0, 2.0]];
    let analytic = Solver::with_jacobian(&linear_2d, jac, Params::new())
        .unwrap()
        .solve(&x0)
        .unwrap();
    assert_abs_diff_eq!(estimated[0], 3.0, epsilon = 1e-4);
    assert_abs_diff_eq!(estimated[1], 4.0, epsilon = 1e-4);
    assert_abs_diff_eq!(analytic[0], 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(analytic[1], 4.0, epsilon = 1e-12);
    for (a, b) in estimated.iter().zip(analytic.iter()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-4);
    }
}

#[test]
fn central_differences_solve_linear_system() {
    let params = Params::new().with_difference(Difference::Central);
    let root = Solver::new(&linear_2d, params)
        .unwrap()
        .solve(&array![1.0, 1.0])
        .unwrap();
    assert_abs_diff_eq!(root[0], 3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(root[1], 4.0, epsilon = 1e-6);
}

#[test]
fn no_root_leaves_radius() {
    let f = Exponential::new(1.0, 1.0, 0.0);
    let params = Params::new().with_max_radius(1.0);

    let estimated = Solver::new(&f, params.clone()).unwrap();
    assert!(matches!(
        estimated.solve(&array![1.0]),
        Err(Error::DivergedOutOfRadius { .. })
    ));

    let analytic = Solver::analytic(&f, params).unwrap();
    assert!(matches!(
        analytic.solve(&array![1.0]),
        Err(Error::DivergedOutOfRadius { .. })
    ));
}

#[test]
fn no_root_without_radius_runs_out_of_steps() {
    let f = Exponential::new(1.0, 1.0, 0.0);
    let params = Params::new().with_tol(1e-12);
    let solver = Solver::analytic(&f, params.clone()).unwrap();
    let status = solver.solve_with_status(&array![1.0]).unwrap();
    assert_eq!(status.code, StatusCode::MaxSteps);
    assert_eq!(status.steps, 20);
    assert_abs_diff_eq!(status.x[0], -19.0, epsilon = 1e-9);

    let strict = Solver::analytic(&f, params.with_strict(true)).unwrap();
    assert!(matches!(
        strict.solve(&array![1.0]),
        Err(Error::FailedToConverge { max_steps: 20, .. })
    ));
}

#[test]
fn singular_system_is_reported() {
    let x0 = array![5.0, 6.0];

    let estimated = Solver::new(&singular, Params::new()).unwrap();
    assert!(matches!(
        estimated.solve(&x0),
        Err(Error::SingularJacobian(_))
    ));
    assert!(matches!(
        estimated.step(&x0, None),
        Err(Error::SingularJacobian(_))
    ));

    let analytic =
        Solver::with_jacobian(&singular, |_| array![[1.0, 2.0], [2.0, 4.0]], Params::new())
            .unwrap();
    assert!(matches!(
        analytic.solve(&x0),
        Err(Error::SingularJacobian(_))
    ));
}

#[test]
fn non_square_jacobian_is_reported() {
    let f = |x: &Array1<f64>| array![x[0] + x[1]];
    let solver = Solver::new(&f, Params::new()).unwrap();
    assert!(matches!(
        solver.solve(&array![1.0, 1.0]),
        Err(Error::NotSquare { rows: 1, cols: 2 })
    ));
}

#[test]
fn polynomial_2d_estimated_and_analytic() {
    let f = Polynomial2D::new();
    let x0 = array![-2.0, -2.0];
    let root = array![-1.0, 10.0];

    let estimated = Solver::new(&f, Params::new()).unwrap().solve(&x0).unwrap();
    let analytic = Solver::analytic(&f, Params::new())
        .unwrap()
        .solve(&x0)
        .unwrap();
    for i in 0..2 {
        assert_abs_diff_eq!(estimated[i], root[i], epsilon = 1e-6);
        assert_abs_diff_eq!(analytic[i], root[i], epsilon = 1e-6);
    }
}

#[test]
fn polynomial_2d_wrong_jacobian_still_lands_near_root() {
    let f = Polynomial2DWrongJacobian;
    let x0 = array![-2.0, -2.0];
    let analytic = f.jacobian(&x0).unwrap();
    let estimated = approximate_jacobian(&f, &x0, 1e-6).unwrap();
    assert!((analytic[[0, 0]] - estimated[[0, 0]]).abs() > 1.0);

    let root = Solver::analytic(&f, Params::new())
        .unwrap()
        .solve(&x0)
        .unwrap();
    assert_abs_diff_eq!(root[0], -1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(root[1], 10.0, epsilon = 1e-6);
}

#[test]
fn dimension_mismatch_is_propagated() {
    let f = Polynomial2D::new();
    let solver = Solver::new(&f, Params::new()).unwrap();
    assert!(matches!(
        solver.solve(&array![1.0, 2.0, 3.0]),
        Err(Error::DimensionMismatch {
            expected: 2,
            found: 3
        })
    ));
}

#[derive(Debug)]
struct Overflow;

impl std::fmt::Display for Overflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "argument too large")
    }
}

impl std::error::Error for Overflow {}

struct Guarded;

impl Function for Guarded {
    fn evaluate(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        if x[0] > 10.0 {
            return Err(Error::function(Overflow));
        }
        Ok(array![x[0] - 20.0])
    }
}

#[test]
fn function_errors_are_propagated() {
    let solver = Solver::with_jacobian(&Guarded, |_| array![[1.0]], Params::new()).unwrap();
    match solver.solve(&array![0.0]) {
        Err(Error::Function(source)) => assert_eq!(source.to_string(), "argument too large"),
        other => panic!("unexpected result {other:?}"),
    }
}
