//! Runs all four methods on one problem, times them and ranks the ones
//! that converged.
//!
//! ┌ [`compare`]  : derive f' once, run every [`Algorithm`] in
//! │                [`Algorithm::ALL`] order, rank converged runs
//! ├ [`run`]      : dispatch a single algorithm with the shared parameters
//! └ [`ranking`]  : ordering, [`Statistics`], [`Efficiency`], [`IterationGap`]
//!
//! A failing method never aborts the others; its error is kept in the
//! matching [`Attempt`].

pub mod ranking;
mod render;

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info_span, warn};

use crate::function::{Differentiable, RealFunction};
use crate::root_finding::algorithms::{Algorithm, BracketFamily, OpenFamily};
use crate::root_finding::config::SolverCfg;
use crate::root_finding::errors::MethodError;
use crate::root_finding::report::Convergence;
use crate::root_finding::{bisection, false_position, newton, secant};

pub use ranking::{
    rank, Efficiency, EfficiencyTier, IterationGap, MethodRun, RankedRun, Ranking, Statistics,
    Timed,
};

use ranking::serialize_ms;


/// Problem parameters shared by every method of a comparison.
///
/// ├ `a`, `b`   : bracket for bisection and false position
/// ├ `x0`, `x1` : starting points for secant; newton starts at `x0`
/// └ `cfg`      : tolerance and iteration cap
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct CompareParams {
    pub a   : f64,
    pub b   : f64,
    pub x0  : f64,
    pub x1  : f64,
    pub cfg : SolverCfg,
}
impl CompareParams {
    pub fn new(a: f64, b: f64, x0: f64, x1: f64, cfg: SolverCfg) -> Self {
        Self { a, b, x0, x1, cfg }
    }
}


/// One method's run, successful or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attempt {
    pub algorithm : Algorithm,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_ms")]
    pub elapsed   : Duration,
    pub outcome   : Result<Convergence, MethodError>,
}
impl Attempt {
    pub fn converged(&self) -> bool {
        self.outcome.is_ok()
    }
}


#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Ranked(Ranking),
    NoneConverged,
}


/// Result of [`compare`]: every attempt in run order plus the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub params   : CompareParams,
    pub attempts : Vec<Attempt>,
    pub outcome  : Outcome,
}
impl Comparison {
    pub fn ranking(&self) -> Option<&Ranking> {
        match &self.outcome {
            Outcome::Ranked(r)     => Some(r),
            Outcome::NoneConverged => None,
        }
    }

    pub fn attempt(&self, algorithm: Algorithm) -> Option<&Attempt> {
        self.attempts.iter().find(|at| at.algorithm == algorithm)
    }
}


/// Runs a single algorithm with the shared parameters.
///
/// Bracketing methods use `[a, b]`, secant uses `(x0, x1)`, newton uses
/// `x0` together with `dfunc`.
pub fn run<F, G>(
    algorithm: Algorithm,
    func: &F,
    dfunc: &G,
    params: &CompareParams,
) -> Result<Convergence, MethodError>
where
    F: RealFunction + ?Sized,
    G: RealFunction + ?Sized,
{
    let CompareParams { a, b, x0, x1, cfg } = *params;
    match algorithm {
        Algorithm::Bracket(BracketFamily::Bisection)     => bisection(func, a, b, cfg),
        Algorithm::Bracket(BracketFamily::FalsePosition) => false_position(func, a, b, cfg),
        Algorithm::Open(OpenFamily::Secant)              => secant(func, x0, x1, cfg),
        Algorithm::Open(OpenFamily::Newton)              => newton(func, dfunc, x0, cfg),
    }
}


/// Runs bisection, false position, secant and newton on `func`, in that
/// order, and ranks the converged runs by iteration count.
///
/// The derivative is obtained once, before any method runs. Each method is
/// timed individually with a monotonic clock. Runs are independent: no
/// state is shared between them.
///
/// # Example
/// ```
/// use rootbench::{compare, CompareParams, Expression, SolverCfg};
///
/// let f = Expression::parse("x^2 - 4").unwrap();
/// let params = CompareParams::new(1.0, 3.0, 1.5, 2.5, SolverCfg::new());
/// let comparison = compare(&f, &params);
///
/// let ranking = comparison.ranking().unwrap();
/// assert_eq!(ranking.runs.len(), 4);
/// assert!((ranking.best().run.root() - 2.0).abs() < 1e-6);
/// ```
pub fn compare<F>(func: &F, params: &CompareParams) -> Comparison
where F: Differentiable {

    let _span = info_span!(
        "compare",
        a        = params.a,
        b        = params.b,
        x0       = params.x0,
        x1       = params.x1,
        tol      = params.cfg.tol(),
        max_iter = params.cfg.max_iter()
    )
    .entered();

    let dfunc = func.derivative();

    let attempts: Vec<Attempt> = Algorithm::ALL
        .iter()
        .map(|&algorithm| attempt(algorithm, func, &dfunc, params))
        .collect();

    let runs = attempts
        .iter()
        .filter_map(|at| {
            let convergence = *at.outcome.as_ref().ok()?;
            Some(MethodRun {
                algorithm : at.algorithm,
                residual  : residual(func, convergence.root),
                elapsed   : at.elapsed,
                convergence,
            })
        })
        .collect();

    let outcome = match rank(runs) {
        Some(ranking) => {
            debug!(best = %ranking.best().run.algorithm, converged = ranking.runs.len(), "ranked");
            Outcome::Ranked(ranking)
        }
        None => {
            warn!("no method converged");
            Outcome::NoneConverged
        }
    };

    Comparison { params: *params, attempts, outcome }
}


fn attempt<F, G>(algorithm: Algorithm, func: &F, dfunc: &G, params: &CompareParams) -> Attempt
where
    F: RealFunction + ?Sized,
    G: RealFunction + ?Sized,
{
    let start   = Instant::now();
    let outcome = run(algorithm, func, dfunc, params);
    let elapsed = start.elapsed();

    match &outcome {
        Ok(c) => debug!(
            %algorithm,
            root       = c.root,
            iterations = c.iterations(),
            elapsed_us = elapsed.as_micros() as u64,
            "method converged"
        ),
        Err(e) => warn!(%algorithm, kind = e.kind(), error = %e, "method failed"),
    }

    Attempt { algorithm, elapsed, outcome }
}


/// |f(root)|, or infinity if `f` cannot be evaluated there.
fn residual<F: RealFunction + ?Sized>(func: &F, root: f64) -> f64 {
    match func.evaluate(root) {
        Ok(v) if v.is_finite() => v.abs(),
        Ok(_) | Err(_) => {
            warn!(root, "residual could not be evaluated");
            f64::INFINITY
        }
    }
}
