//! Bisection method

use tracing::{debug, trace};

use crate::function::RealFunction;

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::MethodError;
use super::eval::CheckedEval;
use super::report::{Convergence, StopCriterion};
use super::signs::{same_side, straddles};


const ALGORITHM: Algorithm = Algorithm::BISECTION;


/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the search interval.
/// ├ `b`    - Other end of the search interval (either order is accepted).
/// └ `cfg`  - [`SolverCfg`] with the tolerance and the iteration cap.
///
/// # Returns
///
/// [`Convergence`] with
/// ├ `root`      : midpoint accepted by a stop condition
/// ├ `iteration` : zero-based index of the accepting iteration
/// └ `criterion` : [`StopCriterion::AbsFx`] if |f(m)| < tol,
///                 [`StopCriterion::Width`] if |a - b| < tol
///
/// # Errors
///
/// ┌ [`MethodError::NotConverged`]  - `cfg.max_iter` is 0 (no evaluation happens), or
/// │                                  the cap was reached without meeting a stop condition.
/// ├ [`MethodError::NotBracketed`]  - `f(a) * f(b) > 0`.
/// └ [`MethodError::InvalidValue`]  - an evaluation failed or was non-finite.
///
/// # Behavior
/// ├ Per iteration `m = (a + b) / 2`; |f(m)| is tested before the bracket width.
/// ├ If `f(m) * f(a) < 0` the root is in the left half (`b = m`),
/// │ else if `f(m) * f(b) < 0` it is in the right half (`a = m`).
/// └ If neither product is negative (an endpoint value is exactly 0) the
///   bracket is left unchanged for that iteration and the run can stall
///   until the cap.
///
/// # Notes
/// └ With a sign change on [a, b] the width halves every iteration, so the
///   width test fires by index ⌈log2(|b - a| / tol)⌉; `max_iter` must leave
///   room for that.
pub fn bisection<F>(
    func: &F,
    mut a: f64,
    mut b: f64,
    cfg: SolverCfg,
) -> Result<Convergence, MethodError>
where F: RealFunction + ?Sized {

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    if max_iter == 0 {
        return Err(MethodError::NotConverged { max_iter });
    }

    let mut eval = CheckedEval::new(func);

    let mut fa = eval.at(a, 0)?;
    let mut fb = eval.at(b, 0)?;
    if same_side(fa, fb) {
        return Err(MethodError::NotBracketed { a, b, fa, fb });
    }

    for iter in 0..max_iter {
        let midpoint = calculate_bisection(a, b);
        let fm       = eval.at(midpoint, iter + 1)?;
        trace!(algorithm = %ALGORITHM, iter, a, b, midpoint, fm);

        let criterion = if fm.abs() < tol {
            Some(StopCriterion::AbsFx)
        } else if (a - b).abs() < tol {
            Some(StopCriterion::Width)
        } else {
            None
        };

        if let Some(criterion) = criterion {
            debug!(algorithm = %ALGORITHM, iter, root = midpoint, ?criterion, "converged");
            return Ok(Convergence {
                algorithm   : ALGORITHM,
                root        : midpoint,
                f_root      : fm,
                iteration   : iter,
                evaluations : eval.evals(),
                criterion,
            });
        }

        // shrink interval
        if straddles(fm, fa) {
            b  = midpoint;
            fb = fm;
        } else if straddles(fm, fb) {
            a  = midpoint;
            fa = fm;
        }
    }

    debug!(algorithm = %ALGORITHM, max_iter, "iteration cap reached");
    Err(MethodError::NotConverged { max_iter })
}
