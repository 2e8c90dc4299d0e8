//! Free-text function expressions in the variable `x`.
//!
//! ┌ [`Expression::parse`]      : text → tree, e.g. `x**3 - 5*x**2 + 8*x - 4`
//! ├ [`Expression::evaluate`]   : value at a point, fails on domain errors
//! └ [`Expression::derivative`] : symbolic d/dx
//!
//! [`Expression`] implements [`RealFunction`] and [`Differentiable`], so it
//! can be handed straight to any root-finding method or to the comparator.

mod ast;
mod derivative;
mod error;
mod parser;
mod token;

use std::fmt;
use std::str::FromStr;

pub use ast::{Constant, Expr, Func};
pub use error::ParseError;

use crate::function::{Differentiable, EvaluationError, RealFunction};


/// A parsed expression.
///
/// Displays as the text it was parsed from; derived expressions display
/// their rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root:   Expr,
}

impl Expression {
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        let root = parser::parse(src)?;
        Ok(Self { source: src.trim().to_string(), root })
    }

    pub fn from_tree(root: Expr) -> Self {
        Self { source: root.to_string(), root }
    }

    pub fn tree(&self) -> &Expr {
        &self.root
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Value at `x`; a non-finite result is an error.
    pub fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        let value = self.root.eval(x)?;
        if !value.is_finite() {
            return Err(EvaluationError::NonFinite { x, value });
        }
        Ok(value)
    }

    pub fn derivative(&self) -> Expression {
        Self::from_tree(derivative::differentiate(&self.root))
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl RealFunction for Expression {
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        Expression::evaluate(self, x)
    }
}

impl Differentiable for Expression {
    type Derivative = Expression;

    fn derivative(&self) -> Expression {
        Expression::derivative(self)
    }
}
