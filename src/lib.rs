//! Real root finding for functions of one variable.
//!
//! ┌ [`function`]     : the evaluate/differentiate capability methods consume
//! ├ [`expression`]   : free-text expressions (parse, evaluate, differentiate)
//! ├ [`root_finding`] : bisection, false position, secant, newton
//! ├ [`compare`]      : runs all four methods, times and ranks them
//! └ [`params`]       : one-value-per-line parameter files

pub mod function;
pub mod expression;
pub mod root_finding;
pub mod compare;
pub mod params;

pub use function::{Differentiable, EvaluationError, RealFunction, WithDerivative};
pub use expression::Expression;
pub use root_finding::config::SolverCfg;
pub use root_finding::errors::MethodError;
pub use root_finding::report::Convergence;
pub use compare::{compare, CompareParams, Comparison};
