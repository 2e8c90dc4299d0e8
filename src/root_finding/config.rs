//! Shared configuration for root-finding algorithms.
//!
//! [`SolverCfg`] — fields used by every method
//! ├ `tol`      : stop threshold for |f(x)|, bracket width or step size
//! └ `max_iter` : iteration cap, the only guaranteed termination bound
//!
//! Fixed numerical guards
//! ├ [`DEGENERATE_SLOPE`]     : |f1 - f0| below this aborts a secant-type step
//! └ [`NEAR_ZERO_DERIVATIVE`] : |f'(x)| below this aborts a newton step

use serde::Serialize;

use super::errors::ConfigError;


pub const DEGENERATE_SLOPE     : f64 = 1e-15;
pub const NEAR_ZERO_DERIVATIVE : f64 = 1e-15;


/// Tolerance and iteration cap shared by all four methods.
///
/// `max_iter = 0` is accepted; every method then reports
/// [`MethodError::NotConverged`](super::errors::MethodError::NotConverged)
/// without evaluating the function.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SolverCfg {
    tol:      f64,
    max_iter: usize,
}
impl SolverCfg {
    pub const DEFAULT_TOL      : f64   = 1e-6;
    pub const DEFAULT_MAX_ITER : usize = 100;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Validated tolerance setter: finite and > 0.
    pub fn set_tol(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidTolerance { got: v });
        }
        self.tol = v;
        Ok(self)
    }

    #[must_use]
    pub fn with_max_iter(mut self, v: usize) -> Self { self.max_iter = v; self }

    #[inline] #[must_use] pub fn tol(&self)      -> f64   { self.tol }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            tol:      Self::DEFAULT_TOL,
            max_iter: Self::DEFAULT_MAX_ITER,
        }
    }
}
