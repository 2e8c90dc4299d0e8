use tracing::{debug, trace};

use crate::function::RealFunction;

use super::algorithms::Algorithm;
use super::config::{SolverCfg, DEGENERATE_SLOPE};
use super::errors::{MethodError, ValueFault};
use super::eval::CheckedEval;
use super::report::{Convergence, StopCriterion};


const ALGORITHM: Algorithm = Algorithm::SECANT;


/// Calculates the secant x-intercept for the line
/// connecting `(x0, fx0)` and `(x1, fx1)`
///
/// # Returns
/// - `Ok(x2)` with `x2 = x1 - fx1 * (x1 - x0) / (fx1 - fx0)`
/// - `Err(DegenerateSlope)` if |fx1 - fx0| < [`DEGENERATE_SLOPE`]
/// - `Err(InvalidValue)` if `x2` is not finite
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
    iteration: usize,
) -> Result<f64, MethodError> {
    let denom = fx1 - fx0;
    if denom.abs() < DEGENERATE_SLOPE {
        return Err(MethodError::DegenerateSlope { iteration, delta: denom.abs() });
    }

    let x2 = x1 - fx1 * (x1 - x0) / denom;
    if !x2.is_finite() {
        return Err(MethodError::invalid(iteration, ValueFault::NonFiniteIterate { x: x2 }));
    }
    Ok(x2)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial estimate
/// - `x1`   : Second initial estimate
/// - `cfg`  : [`SolverCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`Convergence`] with
/// - `root`      : last secant iterate `x2`
/// - `criterion` : [`StopCriterion::Step`] if |x2 - x1| < tol, else
///                 [`StopCriterion::AbsFx`] if |f(x2)| < tol
///
/// # Errors
/// - [`MethodError::NotConverged`]    : `max_iter` = 0, or the cap was reached
/// - [`MethodError::DegenerateSlope`] : |f(x1) - f(x0)| < 1e-15
/// - [`MethodError::InvalidValue`]    : f(x0), f(x1), x2 or f(x2) is NaN/inf,
///                                      or an evaluation failed
///
/// # Behavior
/// - Update:
///     x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))
/// - No bracket is maintained; the window shifts `x0 <- x1, x1 <- x2`.
///
/// # Warning
/// - Superlinear (~1.618) near a simple root, but poor starting pairs can
///   diverge or cycle until the cap. Only the validity checks above guard
///   against that.
pub fn secant<F>(
    func: &F,
    mut x0: f64,
    mut x1: f64,
    cfg: SolverCfg,
) -> Result<Convergence, MethodError>
where F: RealFunction + ?Sized {

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    if max_iter == 0 {
        return Err(MethodError::NotConverged { max_iter });
    }

    let mut eval = CheckedEval::new(func);

    let mut fx0 = eval.at(x0, 0)?;
    let mut fx1 = eval.at(x1, 0)?;

    for iter in 0..max_iter {
        let x2  = calculate_secant_x_intercept((x0, fx0), (x1, fx1), iter + 1)?;
        let fx2 = eval.at(x2, iter + 1)?;
        trace!(algorithm = %ALGORITHM, iter, x0, x1, x2, fx2);

        let criterion = if (x2 - x1).abs() < tol {
            Some(StopCriterion::Step)
        } else if fx2.abs() < tol {
            Some(StopCriterion::AbsFx)
        } else {
            None
        };

        if let Some(criterion) = criterion {
            debug!(algorithm = %ALGORITHM, iter, root = x2, ?criterion, "converged");
            return Ok(Convergence {
                algorithm   : ALGORITHM,
                root        : x2,
                f_root      : fx2,
                iteration   : iter,
                evaluations : eval.evals(),
                criterion,
            });
        }

        x0  = x1;
        fx0 = fx1;
        x1  = x2;
        fx1 = fx2;
    }

    debug!(algorithm = %ALGORITHM, max_iter, "iteration cap reached");
    Err(MethodError::NotConverged { max_iter })
}
