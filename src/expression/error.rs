//! Expression parsing errors.

use thiserror::Error;


/// Reasons a text expression cannot be parsed.
///
/// Positions are byte offsets into the source text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{text}' at {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unexpected {found} at {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unknown identifier '{name}' at {pos}; the variable is `x`")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("unknown function '{name}' at {pos}")]
    UnknownFunction { name: String, pos: usize },

    #[error("expression nested too deeply at {pos}")]
    TooDeep { pos: usize },
}
