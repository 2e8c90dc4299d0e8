//! The function capability consumed by every root-finding method.
//!
//! [`RealFunction`]   : evaluate at a point, may fail with [`EvaluationError`]
//! [`Differentiable`] : produce a derivative function (Newton only)
//!
//! Closures `Fn(f64) -> f64` are [`RealFunction`]s directly. Pair a closure
//! with its analytic derivative through [`WithDerivative`].
//!
//! Implementations are evaluated through `&self` and must be stateless:
//! the same point always yields the same value.

use serde::Serialize;
use thiserror::Error;


/// Failure to evaluate a function at a point.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum EvaluationError {
    #[error("{function} undefined for argument {arg}")]
    Domain { function: &'static str, arg: f64 },

    #[error("division by zero at x={x}")]
    DivisionByZero { x: f64 },

    #[error("non-finite value at x={x}: {value}")]
    NonFinite { x: f64, value: f64 },
}


/// A real-valued function of one real variable.
pub trait RealFunction {
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError>;
}

impl<F> RealFunction for F
where F: Fn(f64) -> f64 {
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        Ok(self(x))
    }
}


/// A function that can hand out its own derivative.
///
/// The comparison runner asks for the derivative once per run and shares
/// it with Newton-Raphson.
pub trait Differentiable: RealFunction {
    type Derivative: RealFunction;

    fn derivative(&self) -> Self::Derivative;
}


/// A function paired with a caller-supplied derivative.
///
/// ```
/// use rootbench::{Differentiable, RealFunction, WithDerivative};
///
/// let f = WithDerivative::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x);
/// assert_eq!(f.evaluate(3.0).unwrap(), 5.0);
/// assert_eq!(f.derivative().evaluate(3.0).unwrap(), 6.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, G> {
    f:  F,
    df: G,
}
impl<F, G> WithDerivative<F, G> {
    pub fn new(f: F, df: G) -> Self {
        Self { f, df }
    }
}

impl<F, G> RealFunction for WithDerivative<F, G>
where
    F: RealFunction,
{
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        self.f.evaluate(x)
    }
}

impl<F, G> Differentiable for WithDerivative<F, G>
where
    F: RealFunction,
    G: RealFunction + Clone,
{
    type Derivative = G;

    fn derivative(&self) -> G {
        self.df.clone()
    }
}
