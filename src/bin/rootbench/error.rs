//! CLI error type

use thiserror::Error;

use rootbench::expression::ParseError;
use rootbench::params::ParamsError;
use rootbench::root_finding::errors::ConfigError;
use rootbench::MethodError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no function given (pass an expression or --params <file>)")]
    MissingFunction,

    #[error("invalid expression: {0}")]
    Expression(#[from] ParseError),

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown method: {0} (expected bisection, false-position, secant or newton)")]
    UnknownMethod(String),

    #[error("{method} failed: {source}")]
    Method {
        method: &'static str,
        #[source]
        source: MethodError,
    },

    #[error("cannot serialise output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
