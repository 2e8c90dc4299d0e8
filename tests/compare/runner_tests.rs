//! tests for the comparison runner
use approx::assert_abs_diff_eq;

use rootbench::compare::{run, Outcome};
use rootbench::root_finding::algorithms::Algorithm;
use rootbench::root_finding::errors::MethodError;
use rootbench::{compare, CompareParams, Expression, SolverCfg, WithDerivative};

fn quadratic_params() -> CompareParams {
    CompareParams::new(1.0, 3.0, 1.5, 2.5, SolverCfg::new())
}

#[test]
fn all_methods_find_2() {
    let f = Expression::parse("x**2 - 4").unwrap();
    let comparison = compare(&f, &quadratic_params());

    let order: Vec<_> = comparison.attempts.iter().map(|at| at.algorithm).collect();
    assert_eq!(order, Algorithm::ALL.to_vec());

    let ranking = comparison.ranking().expect("every method converges");
    assert_eq!(ranking.runs.len(), 4);
    for r in &ranking.runs {
        assert_abs_diff_eq!(r.run.root(), 2.0, epsilon = 1e-6);
        assert!(r.run.residual < 1e-6);
    }
}

#[test]
fn ranking_is_ordered_and_numbered() {
    let f = Expression::parse("x**2 - 4").unwrap();
    let comparison = compare(&f, &quadratic_params());
    let ranking = comparison.ranking().unwrap();

    let ranks: Vec<_> = ranking.runs.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert!(ranking.runs.windows(2).all(|w| w[0].run.iterations() <= w[1].run.iterations()));

    // the first midpoint is the root
    assert_eq!(ranking.best().run.algorithm, Algorithm::BISECTION);
    assert_eq!(ranking.statistics.best_iterations, 1);
}

#[test]
fn failing_methods_do_not_stop_the_others() {
    // no sign change on [3, 5]: only the open methods can run
    let f = Expression::parse("x**2 - 4").unwrap();
    let params = CompareParams::new(3.0, 5.0, 1.5, 2.5, SolverCfg::new());
    let comparison = compare(&f, &params);

    for algorithm in [Algorithm::BISECTION, Algorithm::FALSE_POSITION] {
        let at = comparison.attempt(algorithm).unwrap();
        assert!(matches!(at.outcome, Err(MethodError::NotBracketed { .. })));
    }

    let ranking = comparison.ranking().unwrap();
    let ranked: Vec<_> = ranking.runs.iter().map(|r| r.run.algorithm).collect();
    assert_eq!(ranking.statistics.converged, 2);
    assert!(ranked.contains(&Algorithm::SECANT));
    assert!(ranked.contains(&Algorithm::NEWTON));
}

#[test]
fn cubic_roots_stay_in_interval_or_fail_cleanly() {
    let f = Expression::parse("x**3 - 5*x**2 + 8*x - 4").unwrap();

    for (x0, x1) in [(0.5, 2.5), (1.0, 2.0)] {
        let params = CompareParams::new(0.0, 3.0, x0, x1, SolverCfg::new());
        let comparison = compare(&f, &params);

        for at in &comparison.attempts {
            match &at.outcome {
                Ok(c) => assert!(
                    (0.0..=3.0).contains(&c.root),
                    "{} left [0, 3] from ({x0}, {x1}): {}", at.algorithm, c.root,
                ),
                Err(e) => assert!(
                    matches!(
                        e,
                        MethodError::NotConverged { .. }
                            | MethodError::NearZeroDerivative { .. }
                            | MethodError::DegenerateSlope { .. }
                    ),
                    "{} failed from ({x0}, {x1}): {e}", at.algorithm,
                ),
            }
        }
    }
}

#[test]
fn cubic_secant_start_on_both_roots_is_degenerate() {
    // f(1) = f(2) = 0
    let f = Expression::parse("x**3 - 5*x**2 + 8*x - 4").unwrap();
    let comparison = compare(&f, &CompareParams::new(0.0, 3.0, 1.0, 2.0, SolverCfg::new()));

    let secant = comparison.attempt(Algorithm::SECANT).unwrap();
    assert!(matches!(secant.outcome, Err(MethodError::DegenerateSlope { iteration: 1, .. })));
    assert!(comparison.ranking().is_some());
}

#[test]
fn no_sign_change_and_no_iterations_means_none_converged() {
    let f = Expression::parse("x**2 + 1").unwrap();
    let params = CompareParams::new(-1.0, 1.0, 0.0, 0.5, SolverCfg::new().with_max_iter(0));
    let comparison = compare(&f, &params);

    assert_eq!(comparison.outcome, Outcome::NoneConverged);
    assert!(comparison.attempts.iter().all(|at| !at.converged()));
}

#[test]
fn repeated_comparisons_agree() {
    let f = Expression::parse("sin(x) - x/2").unwrap();
    let params = CompareParams::new(1.0, 3.0, 1.5, 2.5, SolverCfg::new());

    let first  = compare(&f, &params);
    let second = compare(&f, &params);

    for (x, y) in first.attempts.iter().zip(&second.attempts) {
        assert_eq!(x.outcome, y.outcome);
    }
}

#[test]
fn closures_with_derivative() {
    let f = WithDerivative::new(|x: f64| x.exp() - 2.0, |x: f64| x.exp());
    let comparison = compare(&f, &CompareParams::new(0.0, 1.0, 0.5, 1.0, SolverCfg::new()));

    let ranking = comparison.ranking().unwrap();
    assert_eq!(ranking.runs.len(), 4);
    assert_abs_diff_eq!(ranking.best().run.root(), 2.0_f64.ln(), epsilon = 1e-6);
}

#[test]
fn run_dispatches_on_algorithm() {
    let f  = Expression::parse("x**2 - 4").unwrap();
    let df = f.derivative();
    let params = quadratic_params();

    let bisect = run(Algorithm::BISECTION, &f, &df, &params).unwrap();
    let newton = run(Algorithm::NEWTON, &f, &df, &params).unwrap();

    assert_eq!(bisect.algorithm, Algorithm::BISECTION);
    assert_eq!(newton.algorithm, Algorithm::NEWTON);
}

#[test]
fn json_carries_outcome_and_methods() {
    let f = Expression::parse("x**2 - 4").unwrap();
    let comparison = compare(&f, &quadratic_params());
    let json = serde_json::to_value(&comparison).unwrap();

    assert_eq!(json["outcome"]["status"], "ranked");
    assert_eq!(json["attempts"][0]["algorithm"], "bisection");
    assert_eq!(json["attempts"].as_array().map(Vec::len), Some(4));
}
