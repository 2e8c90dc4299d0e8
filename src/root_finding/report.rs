//! Defines the [`Convergence`] struct returned by all
//! root-finding algorithms.

use serde::Serialize;

use super::algorithms::Algorithm;


/// Which stop condition accepted the root.
/// - [`StopCriterion::AbsFx`]
///     - All methods
///     - |f(x)| < tol
/// - [`StopCriterion::Width`]
///     - bisection
///     - |a - b| < tol on the bracket the midpoint was taken from
/// - [`StopCriterion::Step`]
///     - secant, newton
///     - |x_n - x_{n-1}| < tol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopCriterion {
    AbsFx,
    Width,
    Step,
}


/// Successful outcome of a root-finding run.
///
/// [`Convergence`]
/// - `algorithm`   : method that produced the root
/// - `root`        : accepted root estimate
/// - `f_root`      : function value at `root`
/// - `iteration`   : zero-based index of the accepting iteration
/// - `evaluations` : function (and derivative) evaluations performed
/// - `criterion`   : stop condition that fired ([`StopCriterion`])
///
/// Failures, including an exhausted iteration budget, are reported as
/// [`MethodError`](super::errors::MethodError) instead, so a `Convergence`
/// always carries a meaningful root.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Convergence {
    pub algorithm   : Algorithm,
    pub root        : f64,
    pub f_root      : f64,
    pub iteration   : usize,
    pub evaluations : usize,
    pub criterion   : StopCriterion,
}

impl Convergence {
    /// Number of iterations performed, `iteration + 1`.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iteration + 1
    }
}
