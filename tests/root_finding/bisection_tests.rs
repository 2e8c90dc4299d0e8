//! tests for the bisection root finding algorithm
use std::cell::Cell;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use rootbench::root_finding::bisection;
use rootbench::root_finding::errors::{MethodError, ValueFault};
use rootbench::root_finding::report::StopCriterion;
use rootbench::SolverCfg;

type TestResult = Result<(), MethodError>;

#[test]
fn finds_2_on_first_midpoint() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let res = bisection(&f, 1.0, 3.0, SolverCfg::new())?;

    assert_eq!(res.root, 2.0);
    assert_eq!(res.iteration, 0);
    assert_eq!(res.iterations(), 1);
    assert_eq!(res.criterion, StopCriterion::AbsFx);
    Ok(())
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SolverCfg::new().set_tol(1e-10).unwrap().with_max_iter(60);
    let res = bisection(&f, 0.0, 2.0, cfg)?;

    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-10);
    assert!(res.iteration > 0);
    Ok(())
}

#[test]
fn finds_negative_5_with_reversed_bounds() -> TestResult {
    let f   = |x: f64| x + 5.0;
    let res = bisection(&f, 0.0, -12.0, SolverCfg::new())?;

    assert_abs_diff_eq!(res.root, -5.0, epsilon = 1e-6);
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let err = bisection(&f, -1.0, 1.0, SolverCfg::new()).unwrap_err();

    assert_eq!(err, MethodError::NotBracketed { a: -1.0, b: 1.0, fa: 2.0, fb: 2.0 });
    Ok(())
}

#[test]
fn non_finite_eval() -> TestResult {
    let f   = |x: f64| x.sqrt() - 2.0;
    let err = bisection(&f, -1.0, 5.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        MethodError::InvalidValue { iteration: 0, fault: ValueFault::NonFiniteValue { x, fx } }
        if x == -1.0 && fx.is_nan()));
    Ok(())
}

#[test]
fn narrow_interval_stops_on_width() -> TestResult {
    let f   = |x: f64| 1e6 * (x - 0.3);
    let res = bisection(&f, 0.2999999, 0.3000004, SolverCfg::new())?;

    assert_eq!(res.criterion, StopCriterion::Width);
    assert_eq!(res.iteration, 0);
    Ok(())
}

#[test]
fn endpoint_root_stalls_until_cap() -> TestResult {
    // f(a) = 0: neither half straddles, the bracket never moves
    let f   = |x: f64| x;
    let err = bisection(&f, 0.0, 5.0, SolverCfg::new()).unwrap_err();

    assert_eq!(err, MethodError::NotConverged { max_iter: 100 });
    Ok(())
}

#[test]
fn zero_max_iter_does_not_evaluate() -> TestResult {
    let calls = Cell::new(0);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        x * x - 4.0
    };

    let err = bisection(&f, 1.0, 3.0, SolverCfg::new().with_max_iter(0)).unwrap_err();

    assert_eq!(err, MethodError::NotConverged { max_iter: 0 });
    assert_eq!(calls.get(), 0);
    Ok(())
}

#[test]
fn counts_endpoint_evaluations() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let res = bisection(&f, 1.0, 3.0, SolverCfg::new())?;

    // f(a), f(b), f(m)
    assert_eq!(res.evaluations, 3);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn width_bound_holds(
        a in -10.0_f64..-0.5,
        b in 0.5_f64..10.0,
        t in 0.05_f64..0.95,
    ) {
        let tol = 1e-6;
        let r   = a + t * (b - a);
        let f   = move |x: f64| x - r;

        let steps = ((b - a) / tol).log2();
        // the width test compares against tol after exact halvings
        prop_assume!(steps.fract() > 0.01 && steps.fract() < 0.99);

        let res = bisection(&f, a, b, SolverCfg::new()).unwrap();
        prop_assert!(res.iteration <= steps.ceil() as usize);
        prop_assert!(res.root >= a && res.root <= b);
    }

    #[test]
    fn repeated_runs_agree(r in -5.0_f64..5.0) {
        let f = move |x: f64| x * x * x - r;
        let first  = bisection(&f, -10.0, 10.0, SolverCfg::new());
        let second = bisection(&f, -10.0, 10.0, SolverCfg::new());
        prop_assert_eq!(first, second);
    }
}
