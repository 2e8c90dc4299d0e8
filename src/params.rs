//! Parameter files: one value per line.
//!
//! ```text
//! # f(x)
//! x**2 - 4
//! 1        # a
//! 3        # b
//! 1.5      # x0
//! 2.5      # x1
//! 1e-6     # tolerance
//! 100      # max iterations
//! ```
//!
//! Blank lines and lines whose first non-blank character is `#` are
//! skipped. A `#` after a value starts a trailing comment. Line numbers in
//! errors refer to the original text.

use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::compare::CompareParams;
use crate::expression::{Expression, ParseError};
use crate::root_finding::config::SolverCfg;
use crate::root_finding::errors::ConfigError;


const FIELDS: [&str; 7] = ["expression", "a", "b", "x0", "x1", "tolerance", "max_iterations"];


#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("cannot read parameter file: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing value for `{field}` (expected {expected} values, found {found})")]
    Missing { field: &'static str, expected: usize, found: usize },

    #[error("unexpected extra value on line {line}: {text:?}")]
    Extra { line: usize, text: String },

    #[error("line {line}: invalid {field} {text:?}")]
    InvalidNumber { line: usize, field: &'static str, text: String },

    #[error("line {line}: invalid expression: {source}")]
    Expression {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("line {line}: {source}")]
    Config {
        line: usize,
        #[source]
        source: ConfigError,
    },
}


/// A fully parsed problem: the function plus everything the comparator needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub expression : Expression,
    pub a          : f64,
    pub b          : f64,
    pub x0         : f64,
    pub x1         : f64,
    pub cfg        : SolverCfg,
}

impl Params {
    pub fn parse(text: &str) -> Result<Self, ParamsError> {
        let mut values = text
            .lines()
            .enumerate()
            .map(|(i, raw)| (i + 1, strip_comment(raw)))
            .filter(|(_, v)| !v.is_empty());

        let mut next = |idx: usize| {
            values.next().ok_or(ParamsError::Missing {
                field    : FIELDS[idx],
                expected : FIELDS.len(),
                found    : idx,
            })
        };

        let (line, src) = next(0)?;
        let expression = Expression::parse(src)
            .map_err(|source| ParamsError::Expression { line, source })?;

        let a  = number::<f64>(next(1)?, FIELDS[1])?;
        let b  = number::<f64>(next(2)?, FIELDS[2])?;
        let x0 = number::<f64>(next(3)?, FIELDS[3])?;
        let x1 = number::<f64>(next(4)?, FIELDS[4])?;

        let (tol_line, tol_text) = next(5)?;
        let tol = number::<f64>((tol_line, tol_text), FIELDS[5])?;
        let max_iter = number::<usize>(next(6)?, FIELDS[6])?;

        if let Some((line, text)) = values.next() {
            return Err(ParamsError::Extra { line, text: text.to_string() });
        }

        let cfg = SolverCfg::new()
            .set_tol(tol)
            .map_err(|source| ParamsError::Config { line: tol_line, source })?
            .with_max_iter(max_iter);

        Ok(Self { expression, a, b, x0, x1, cfg })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn compare_params(&self) -> CompareParams {
        CompareParams::new(self.a, self.b, self.x0, self.x1, self.cfg)
    }

    pub fn into_parts(self) -> (Expression, CompareParams) {
        let params = self.compare_params();
        (self.expression, params)
    }
}

impl FromStr for Params {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}


fn strip_comment(raw: &str) -> &str {
    match raw.find('#') {
        Some(i) => raw[..i].trim(),
        None    => raw.trim(),
    }
}

fn number<T: FromStr>((line, text): (usize, &str), field: &'static str) -> Result<T, ParamsError> {
    text.parse::<T>().map_err(|_| ParamsError::InvalidNumber {
        line,
        field,
        text: text.to_string(),
    })
}
