//! tests for ranking and efficiency statistics
use std::time::Duration;

use approx::assert_relative_eq;

use rootbench::compare::{rank, EfficiencyTier, MethodRun};
use rootbench::root_finding::algorithms::Algorithm;
use rootbench::root_finding::report::StopCriterion;
use rootbench::Convergence;

fn run(algorithm: Algorithm, iterations: usize, micros: u64) -> MethodRun {
    MethodRun {
        algorithm,
        convergence: Convergence {
            algorithm,
            root        : 2.0,
            f_root      : 0.0,
            iteration   : iterations - 1,
            evaluations : iterations,
            criterion   : StopCriterion::AbsFx,
        },
        elapsed  : Duration::from_micros(micros),
        residual : 0.0,
    }
}

#[test]
fn orders_by_iterations_with_efficiency() {
    let ranking = rank(vec![
        run(Algorithm::BISECTION, 5, 30),
        run(Algorithm::SECANT, 3, 10),
        run(Algorithm::NEWTON, 8, 20),
    ])
    .unwrap();

    let order: Vec<_> = ranking.runs.iter().map(|r| r.run.iterations()).collect();
    assert_eq!(order, vec![3, 5, 8]);

    let eff: Vec<_> = ranking.runs.iter().map(|r| r.efficiency).collect();
    assert_eq!(eff[0].percent, 100.0);
    assert_eq!(eff[0].tier, EfficiencyTier::Maximal);
    assert_relative_eq!(eff[1].percent, 60.0, max_relative = 1e-12);
    assert_eq!(eff[1].tier, EfficiencyTier::Medium);
    assert_relative_eq!(eff[2].percent, 37.5);
    assert_eq!(eff[2].tier, EfficiencyTier::Low);
}

#[test]
fn statistics() {
    let ranking = rank(vec![
        run(Algorithm::BISECTION, 5, 30),
        run(Algorithm::SECANT, 3, 10),
        run(Algorithm::NEWTON, 8, 20),
    ])
    .unwrap();
    let s = ranking.statistics;

    assert_eq!(s.converged, 3);
    assert_relative_eq!(s.mean_iterations, 16.0 / 3.0);
    assert_eq!(s.mean_elapsed, Duration::from_micros(20));
    assert_eq!(s.best_iterations, 3);
    assert_eq!(s.worst_iterations, 8);
    assert_eq!(s.fastest.algorithm, Algorithm::SECANT);
    assert_eq!(s.slowest.algorithm, Algorithm::BISECTION);
}

#[test]
fn gaps_relative_to_best() {
    let ranking = rank(vec![
        run(Algorithm::BISECTION, 5, 30),
        run(Algorithm::SECANT, 3, 10),
        run(Algorithm::NEWTON, 8, 20),
    ])
    .unwrap();
    let gaps = ranking.gaps();

    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0].best, Algorithm::SECANT);
    assert_eq!(gaps[0].algorithm, Algorithm::BISECTION);
    assert_eq!(gaps[0].extra_iterations, 2);
    assert_relative_eq!(gaps[0].percent_more, 200.0 / 3.0, max_relative = 1e-12);
    assert_eq!(gaps[1].extra_iterations, 5);
}

#[test]
fn ties_keep_input_order() {
    let ranking = rank(vec![
        run(Algorithm::FALSE_POSITION, 4, 10),
        run(Algorithm::SECANT, 4, 10),
        run(Algorithm::BISECTION, 2, 10),
    ])
    .unwrap();

    let order: Vec<_> = ranking.runs.iter().map(|r| r.run.algorithm).collect();
    assert_eq!(order, vec![Algorithm::BISECTION, Algorithm::FALSE_POSITION, Algorithm::SECANT]);

    // equal times: first is fastest, last is slowest
    assert_eq!(ranking.statistics.fastest.algorithm, Algorithm::BISECTION);
    assert_eq!(ranking.statistics.slowest.algorithm, Algorithm::SECANT);
}

#[test]
fn tied_best_runs_are_all_maximal() {
    let ranking = rank(vec![
        run(Algorithm::SECANT, 4, 10),
        run(Algorithm::NEWTON, 4, 12),
        run(Algorithm::BISECTION, 5, 10),
    ])
    .unwrap();

    assert_eq!(ranking.runs[1].efficiency.tier, EfficiencyTier::Maximal);
    assert_eq!(ranking.runs[2].efficiency.tier, EfficiencyTier::High);
}

#[test]
fn nothing_to_rank() {
    assert!(rank(Vec::new()).is_none());
}
