//! Root-finding error types.
//!
//! ┌ [`MethodError`] : why a single method run did not produce a root
//! │  ├ no sign change on the initial interval
//! │  ├ near-zero secant/interpolation denominator
//! │  ├ near-zero derivative (newton)
//! │  ├ invalid value ([`ValueFault`])
//! │  └ iteration budget exhausted
//! │
//! └ [`ConfigError`] : invalid solver configuration
//!
//! Every variant is non-fatal to the comparison runner; a failing method
//! is reported next to the others.

use serde::Serialize;
use thiserror::Error;

use crate::function::EvaluationError;


/// What made a value unusable.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFault {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error("f({x}) is not finite: {fx}")]
    NonFiniteValue { x: f64, fx: f64 },

    #[error("iterate is not finite: {x}")]
    NonFiniteIterate { x: f64 },
}


/// Failure of a single method run.
///
/// `iteration` fields count from 1; `0` means the failure happened while
/// evaluating the initial points, before the first iteration.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MethodError {
    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NotBracketed { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("degenerate slope at iteration {iteration}: |f1 - f0| = {delta:e}")]
    DegenerateSlope { iteration: usize, delta: f64 },

    #[error("derivative near zero at iteration {iteration}: f'({x}) = {dfx:e}")]
    NearZeroDerivative { iteration: usize, x: f64, dfx: f64 },

    #[error("invalid value at iteration {iteration}: {fault}")]
    InvalidValue {
        iteration: usize,
        #[source]
        fault: ValueFault,
    },

    #[error("not converged within {max_iter} iterations")]
    NotConverged { max_iter: usize },
}

impl MethodError {
    pub(crate) fn invalid(iteration: usize, fault: impl Into<ValueFault>) -> Self {
        MethodError::InvalidValue { iteration, fault: fault.into() }
    }

    /// Short tag, e.g. for log fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            MethodError::NotBracketed { .. }       => "not_bracketed",
            MethodError::DegenerateSlope { .. }    => "degenerate_slope",
            MethodError::NearZeroDerivative { .. } => "near_zero_derivative",
            MethodError::InvalidValue { .. }       => "invalid_value",
            MethodError::NotConverged { .. }       => "not_converged",
        }
    }
}


/// Solver configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}
