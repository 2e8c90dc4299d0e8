//! tests for the false position root finding algorithm
use approx::assert_abs_diff_eq;

use rootbench::function::EvaluationError;
use rootbench::root_finding::errors::{MethodError, ValueFault};
use rootbench::root_finding::false_position;
use rootbench::root_finding::report::StopCriterion;
use rootbench::{Expression, SolverCfg};

type TestResult = Result<(), MethodError>;

#[test]
fn finds_2() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let res = false_position(&f, 1.0, 3.0, SolverCfg::new())?;

    assert_abs_diff_eq!(res.root, 2.0, epsilon = 1e-6);
    assert!(res.f_root.abs() < 1e-6);
    assert_eq!(res.criterion, StopCriterion::AbsFx);
    Ok(())
}

#[test]
fn linear_function_in_one_step() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let res = false_position(&f, 0.0, 10.0, SolverCfg::new())?;

    assert_eq!(res.root, 3.0);
    assert_eq!(res.iteration, 0);
    Ok(())
}

#[test]
fn first_interpolant_of_quadratic() -> TestResult {
    // c = 1 - (-3) * 2 / 8
    let f   = |x: f64| x * x - 4.0;
    let cfg = SolverCfg::new().set_tol(1.0).unwrap();
    let res = false_position(&f, 1.0, 3.0, cfg)?;

    assert_eq!(res.root, 1.75);
    assert_eq!(res.f_root, -0.9375);
    Ok(())
}

#[test]
fn endpoint_root_is_not_bracketed() -> TestResult {
    let f   = |x: f64| x;
    let err = false_position(&f, 0.0, 5.0, SolverCfg::new()).unwrap_err();

    assert_eq!(err, MethodError::NotBracketed { a: 0.0, b: 5.0, fa: 0.0, fb: 5.0 });
    Ok(())
}

#[test]
fn same_sign_is_not_bracketed() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let err = false_position(&f, -1.0, 1.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(err, MethodError::NotBracketed { .. }));
    Ok(())
}

#[test]
fn domain_error_is_reported() -> TestResult {
    let f   = Expression::parse("ln(x)").unwrap();
    let err = false_position(&f, -1.0, 2.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        MethodError::InvalidValue {
            iteration: 0,
            fault: ValueFault::Evaluation(EvaluationError::Domain { function: "ln", .. }),
        }
    ));
    Ok(())
}

#[test]
fn uses_max_iter() -> TestResult {
    let f   = |x: f64| x.powi(10) - 1.0;
    let cfg = SolverCfg::new().with_max_iter(3);
    let err = false_position(&f, 0.0, 1.3, cfg).unwrap_err();

    assert_eq!(err, MethodError::NotConverged { max_iter: 3 });
    Ok(())
}

#[test]
fn zero_max_iter() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let err = false_position(&f, 1.0, 3.0, SolverCfg::new().with_max_iter(0)).unwrap_err();

    assert_eq!(err, MethodError::NotConverged { max_iter: 0 });
    Ok(())
}
