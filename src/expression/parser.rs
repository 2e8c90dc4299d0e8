//! Recursive-descent parser.
//!
//! ```text
//! expr    := term   (('+' | '-') term)*
//! term    := unary  (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?          right associative
//! primary := number | 'x' | constant | func '(' expr ')' | '(' expr ')'
//! ```
//!
//! `-x^2` parses as `-(x^2)`.
//!
//! Nesting (parentheses, calls, unary signs, exponents) and the length of
//! `+ - * /` chains both count toward [`MAX_DEPTH`], which bounds the depth
//! of the resulting tree.

use super::ast::{Constant, Expr, Func};
use super::error::ParseError;
use super::token::{tokenize, Spanned, Token};


pub(crate) const MAX_DEPTH: usize = 256;


pub(crate) fn parse(src: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(src)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser { tokens, at: 0, depth: 0, end: src.len() };
    let expr = parser.expr()?;

    match parser.peek() {
        None    => Ok(expr),
        Some(s) => Err(ParseError::UnexpectedToken { found: s.token.describe(), pos: s.pos }),
    }
}


struct Parser {
    tokens: Vec<Spanned>,
    at:     usize,
    depth:  usize,
    end:    usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.at)
    }

    fn next(&mut self, expected: &'static str) -> Result<Spanned, ParseError> {
        let tok = self.tokens.get(self.at).cloned()
            .ok_or(ParseError::UnexpectedEnd { expected })?;
        self.at += 1;
        Ok(tok)
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek().is_some_and(|s| &s.token == token) {
            self.at += 1;
            true
        } else {
            false
        }
    }

    /// One level deeper; fails past [`MAX_DEPTH`].
    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            let pos = self.peek().map_or(self.end, |s| s.pos);
            return Err(ParseError::TooDeep { pos });
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<Expr, ParseError> {
        let outer = self.depth;
        let mut lhs = self.term()?;
        loop {
            if self.eat(&Token::Plus) {
                self.descend()?;
                lhs = Expr::Add(Box::new(lhs), Box::new(self.term()?));
            } else if self.eat(&Token::Minus) {
                self.descend()?;
                lhs = Expr::Sub(Box::new(lhs), Box::new(self.term()?));
            } else {
                self.depth = outer;
                return Ok(lhs);
            }
        }
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let outer = self.depth;
        let mut lhs = self.unary()?;
        loop {
            if self.eat(&Token::Star) {
                self.descend()?;
                lhs = Expr::Mul(Box::new(lhs), Box::new(self.unary()?));
            } else if self.eat(&Token::Slash) {
                self.descend()?;
                lhs = Expr::Div(Box::new(lhs), Box::new(self.unary()?));
            } else {
                self.depth = outer;
                return Ok(lhs);
            }
        }
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        self.descend()?;
        let expr = if self.eat(&Token::Minus) {
            Expr::Neg(Box::new(self.unary()?))
        } else if self.eat(&Token::Plus) {
            self.unary()?
        } else {
            self.power()?
        };
        self.depth -= 1;
        Ok(expr)
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.primary()?;
        if self.eat(&Token::Caret) {
            let exp = self.unary()?;
            return Ok(Expr::Pow(Box::new(base), Box::new(exp)));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let Spanned { token, pos } = self.next("a number, `x`, a function or '('")?;

        match token {
            Token::Number(v) => Ok(Expr::Const(v)),

            Token::LParen => {
                let inner = self.expr()?;
                self.close_paren()?;
                Ok(inner)
            },

            Token::Ident(name) => {
                if self.peek().is_some_and(|s| s.token == Token::LParen) {
                    let func = Func::lookup(&name)
                        .ok_or(ParseError::UnknownFunction { name, pos })?;
                    self.at += 1;
                    let arg = self.expr()?;
                    self.close_paren()?;
                    return Ok(Expr::Call(func, Box::new(arg)));
                }

                match name.as_str() {
                    "x"        => Ok(Expr::Var),
                    "pi"       => Ok(Expr::Named(Constant::Pi)),
                    "e" | "E"  => Ok(Expr::Named(Constant::E)),
                    _          => Err(ParseError::UnknownIdentifier { name, pos }),
                }
            },

            other => Err(ParseError::UnexpectedToken { found: other.describe(), pos }),
        }
    }

    fn close_paren(&mut self) -> Result<(), ParseError> {
        let Spanned { token, pos } = self.next("')'")?;
        if token != Token::RParen {
            return Err(ParseError::UnexpectedToken { found: token.describe(), pos });
        }
        Ok(())
    }
}
