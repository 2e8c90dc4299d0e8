//! Checked function evaluation shared by all methods.

use crate::function::RealFunction;

use super::errors::{MethodError, ValueFault};


/// Wraps a function, counts evaluations and enforces finiteness of both
/// the point and the value.
pub(crate) struct CheckedEval<'f, F: ?Sized> {
    func:  &'f F,
    evals: usize,
}

impl<'f, F> CheckedEval<'f, F>
where F: RealFunction + ?Sized {
    pub(crate) fn new(func: &'f F) -> Self {
        Self { func, evals: 0 }
    }

    /// Evaluates at `x`; `iteration` labels a failure (0 = before the loop).
    pub(crate) fn at(&mut self, x: f64, iteration: usize) -> Result<f64, MethodError> {
        if !x.is_finite() {
            return Err(MethodError::invalid(iteration, ValueFault::NonFiniteIterate { x }));
        }

        self.evals += 1;
        let fx = self.func
            .evaluate(x)
            .map_err(|e| MethodError::invalid(iteration, e))?;

        if !fx.is_finite() {
            return Err(MethodError::invalid(iteration, ValueFault::NonFiniteValue { x, fx }));
        }
        Ok(fx)
    }

    pub(crate) fn evals(&self) -> usize {
        self.evals
    }
}
