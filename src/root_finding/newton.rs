//! Newton-Raphson method

use tracing::{debug, trace};

use crate::function::RealFunction;

use super::algorithms::Algorithm;
use super::config::{SolverCfg, NEAR_ZERO_DERIVATIVE};
use super::errors::{MethodError, ValueFault};
use super::eval::CheckedEval;
use super::report::{Convergence, StopCriterion};


const ALGORITHM: Algorithm = Algorithm::NEWTON;


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : its derivative
/// - `x0`    : initial estimate
/// - `cfg`   : [`SolverCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`Convergence`] with
/// - `root`        : last newton iterate
/// - `evaluations` : evaluations of `func` and `dfunc` combined
/// - `criterion`   : [`StopCriterion::AbsFx`] if |f(x_new)| < tol, else
///                   [`StopCriterion::Step`] if |x_new - x| < tol
///
/// # Errors
/// - [`MethodError::NotConverged`]       : `max_iter` = 0, or the cap was reached
/// - [`MethodError::NearZeroDerivative`] : |f'(x)| < 1e-15
/// - [`MethodError::InvalidValue`]       : `x_new` non-finite, or evaluating
///                                         f / f' failed or was non-finite
///
/// # Notes
/// - Convergence is *local only*: quadratic near a simple root, but poor
///   estimates or inflection regions can diverge or cycle. There is no
///   damping or line search; the iteration cap is the only safeguard.
pub fn newton<F, G>(
    func: &F,
    dfunc: &G,
    x0: f64,
    cfg: SolverCfg,
) -> Result<Convergence, MethodError>
where
    F: RealFunction + ?Sized,
    G: RealFunction + ?Sized,
{
    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    if max_iter == 0 {
        return Err(MethodError::NotConverged { max_iter });
    }

    let mut f  = CheckedEval::new(func);
    let mut df = CheckedEval::new(dfunc);

    let mut x = x0;
    for iter in 0..max_iter {
        let label = iter + 1;
        let fx  = f.at(x, label)?;
        let dfx = df.at(x, label)?;

        if dfx.abs() < NEAR_ZERO_DERIVATIVE {
            return Err(MethodError::NearZeroDerivative { iteration: label, x, dfx });
        }

        let x_new = x - fx / dfx;
        if !x_new.is_finite() {
            return Err(MethodError::invalid(label, ValueFault::NonFiniteIterate { x: x_new }));
        }

        let step_error = (x_new - x).abs();
        let f_new      = f.at(x_new, label)?;
        trace!(algorithm = %ALGORITHM, iter, x, fx, dfx, x_new, f_new);

        let criterion = if f_new.abs() < tol {
            Some(StopCriterion::AbsFx)
        } else if step_error < tol {
            Some(StopCriterion::Step)
        } else {
            None
        };

        if let Some(criterion) = criterion {
            debug!(algorithm = %ALGORITHM, iter, root = x_new, ?criterion, "converged");
            return Ok(Convergence {
                algorithm   : ALGORITHM,
                root        : x_new,
                f_root      : f_new,
                iteration   : iter,
                evaluations : f.evals() + df.evals(),
                criterion,
            });
        }

        x = x_new;
    }

    debug!(algorithm = %ALGORITHM, max_iter, "iteration cap reached");
    Err(MethodError::NotConverged { max_iter })
}
