//! tests for the secant root finding algorithm
use approx::assert_abs_diff_eq;

use rootbench::function::EvaluationError;
use rootbench::root_finding::errors::{MethodError, ValueFault};
use rootbench::root_finding::report::StopCriterion;
use rootbench::root_finding::secant;
use rootbench::{Expression, SolverCfg};

type TestResult = Result<(), MethodError>;

#[test]
fn finds_2() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let res = secant(&f, 1.5, 2.5, SolverCfg::new())?;

    assert_abs_diff_eq!(res.root, 2.0, epsilon = 1e-6);
    Ok(())
}

#[test]
fn linear_function_stops_on_abs_fx() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let res = secant(&f, 0.0, 10.0, SolverCfg::new())?;

    assert_eq!(res.root, 3.0);
    assert_eq!(res.iteration, 0);
    assert_eq!(res.criterion, StopCriterion::AbsFx);
    Ok(())
}

#[test]
fn step_is_checked_before_abs_fx() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let res = secant(&f, 2.0, 2.0 + 1e-9, SolverCfg::new())?;

    assert_eq!(res.criterion, StopCriterion::Step);
    assert_abs_diff_eq!(res.root, 2.0, epsilon = 1e-8);
    Ok(())
}

#[test]
fn equal_values_are_degenerate() -> TestResult {
    let f   = |x: f64| x * x;
    let err = secant(&f, -1.0, 1.0, SolverCfg::new()).unwrap_err();

    assert_eq!(err, MethodError::DegenerateSlope { iteration: 1, delta: 0.0 });
    Ok(())
}

#[test]
fn non_finite_start() -> TestResult {
    let f   = |x: f64| 1.0 / x;
    let err = secant(&f, 0.0, 1.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        MethodError::InvalidValue { iteration: 0, fault: ValueFault::NonFiniteValue { x, .. } }
        if x == 0.0));
    Ok(())
}

#[test]
fn non_finite_iterate() -> TestResult {
    // |f(x1) - f(x0)| ~ 1e-14 over a 1e300 window overflows x2
    let f   = |x: f64| if x < 1.0 { 1.0 } else { 1.0 + 1e-14 };
    let err = secant(&f, 0.0, 1e300, SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        MethodError::InvalidValue { iteration: 1, fault: ValueFault::NonFiniteIterate { x } }
        if x.is_infinite()));
    Ok(())
}

#[test]
fn iterate_outside_domain() -> TestResult {
    // x2 = 9 - ln 9 / (ln 10 - ln 9) < 0
    let f   = Expression::parse("ln(x)").unwrap();
    let err = secant(&f, 10.0, 9.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        MethodError::InvalidValue {
            iteration: 1,
            fault: ValueFault::Evaluation(EvaluationError::Domain { function: "ln", .. }),
        }
    ));
    Ok(())
}

#[test]
fn uses_max_iter() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let err = secant(&f, 10.0, 9.0, SolverCfg::new().with_max_iter(1)).unwrap_err();

    assert_eq!(err, MethodError::NotConverged { max_iter: 1 });
    Ok(())
}

#[test]
fn zero_max_iter() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let err = secant(&f, 1.5, 2.5, SolverCfg::new().with_max_iter(0)).unwrap_err();

    assert_eq!(err, MethodError::NotConverged { max_iter: 0 });
    Ok(())
}
