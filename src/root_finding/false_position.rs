//! False position (regula falsi) method

use tracing::{debug, trace};

use crate::function::RealFunction;

use super::algorithms::Algorithm;
use super::config::{SolverCfg, DEGENERATE_SLOPE};
use super::errors::MethodError;
use super::eval::CheckedEval;
use super::report::{Convergence, StopCriterion};
use super::signs::straddles;


const ALGORITHM: Algorithm = Algorithm::FALSE_POSITION;


/// Where the chord through `(a, fa)` and `(b, fb)` crosses zero
///
/// # Arguments
/// ├ `(a, fa)` - left endpoint and function value
/// ├ `(b, fb)` - right endpoint and function value
/// └ `iteration` - 1-based iteration, for the error
///
/// # Returns
/// ├ `Ok(c)` with `c = a - fa * (b - a) / (fb - fa)`
/// └ `Err(DegenerateSlope)` if |fb - fa| < [`DEGENERATE_SLOPE`].
#[inline]
fn interpolate_bracket(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
    iteration: usize,
) -> Result<f64, MethodError> {
    let denom = fb - fa;
    if denom.abs() < DEGENERATE_SLOPE {
        return Err(MethodError::DegenerateSlope { iteration, delta: denom.abs() });
    }

    Ok(a - fa * (b - a) / denom)
}


/// Finds a root of a function using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the search interval.
/// ├ `b`    - Other end of the search interval.
/// └ `cfg`  - [`SolverCfg`] with the tolerance and the iteration cap.
///
/// # Returns
///
/// [`Convergence`] with `criterion` always [`StopCriterion::AbsFx`]:
/// the only stop condition is |f(c)| < tol.
///
/// # Errors
///
/// ┌ [`MethodError::NotConverged`]    - `cfg.max_iter` is 0, or the cap was reached.
/// ├ [`MethodError::NotBracketed`]    - `f(a) * f(b) >= 0` (an endpoint root counts as unbracketed).
/// ├ [`MethodError::DegenerateSlope`] - |f(b) - f(a)| < 1e-15 at some iteration.
/// └ [`MethodError::InvalidValue`]    - an evaluation failed or was non-finite.
///
/// # Behavior
/// └ Pure regula falsi update: if `f(a) * f(c) < 0` then `b = c`, otherwise
///   `a = c`. No Illinois-type rescaling is applied, so on convex or concave
///   functions one endpoint can stay fixed for many iterations.
pub fn false_position<F>(
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
    if !straddles(fa, fb) {
        return Err(MethodError::NotBracketed { a, b, fa, fb });
    }

    for iter in 0..max_iter {
        let c  = interpolate_bracket((a, fa), (b, fb), iter + 1)?;
        let fc = eval.at(c, iter + 1)?;
        trace!(algorithm = %ALGORITHM, iter, a, b, c, fc);

        if fc.abs() < tol {
            debug!(algorithm = %ALGORITHM, iter, root = c, "converged");
            return Ok(Convergence {
                algorithm   : ALGORITHM,
                root        : c,
                f_root      : fc,
                iteration   : iter,
                evaluations : eval.evals(),
                criterion   : StopCriterion::AbsFx,
            });
        }

        if straddles(fa, fc) {
            b  = c;
            fb = fc;
        } else {
            a  = c;
            fa = fc;
        }
    }

    debug!(algorithm = %ALGORITHM, max_iter, "iteration cap reached");
    Err(MethodError::NotConverged { max_iter })
}
