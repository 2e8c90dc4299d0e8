//! Expression tree, point evaluation and rendering.

use std::fmt;

use crate::function::EvaluationError;


/// Built-in functions of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    /// natural logarithm; `log` is accepted as an alias
    Ln,
    Sqrt,
    Abs,
    Sign,
}
impl Func {
    pub(crate) fn lookup(name: &str) -> Option<Func> {
        Some(match name {
            "sin"         => Func::Sin,
            "cos"         => Func::Cos,
            "tan"         => Func::Tan,
            "exp"         => Func::Exp,
            "ln" | "log"  => Func::Ln,
            "sqrt"        => Func::Sqrt,
            "abs"         => Func::Abs,
            "sign"        => Func::Sign,
            _             => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Func::Sin  => "sin",
            Func::Cos  => "cos",
            Func::Tan  => "tan",
            Func::Exp  => "exp",
            Func::Ln   => "ln",
            Func::Sqrt => "sqrt",
            Func::Abs  => "abs",
            Func::Sign => "sign",
        }
    }

    fn apply(self, v: f64) -> Result<f64, EvaluationError> {
        let out = match self {
            Func::Sin  => v.sin(),
            Func::Cos  => v.cos(),
            Func::Tan  => v.tan(),
            Func::Exp  => v.exp(),
            Func::Ln   => {
                if v <= 0.0 {
                    return Err(EvaluationError::Domain { function: "ln", arg: v });
                }
                v.ln()
            },
            Func::Sqrt => {
                if v < 0.0 {
                    return Err(EvaluationError::Domain { function: "sqrt", arg: v });
                }
                v.sqrt()
            },
            Func::Abs  => v.abs(),
            Func::Sign => if v == 0.0 { 0.0 } else { v.signum() },
        };
        Ok(out)
    }
}


/// Named mathematical constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}
impl Constant {
    pub const fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E  => std::f64::consts::E,
        }
    }
}


/// Expression tree over the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(f64),
    Named(Constant),
    Var,
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

impl Expr {
    /// Evaluates the tree at `x`.
    ///
    /// Division by zero and out-of-domain arguments fail immediately;
    /// overflow is left for the caller to detect on the final value.
    pub fn eval(&self, x: f64) -> Result<f64, EvaluationError> {
        Ok(match self {
            Expr::Const(c)   => *c,
            Expr::Named(c)   => c.value(),
            Expr::Var        => x,
            Expr::Neg(u)     => -u.eval(x)?,
            Expr::Add(u, v)  => u.eval(x)? + v.eval(x)?,
            Expr::Sub(u, v)  => u.eval(x)? - v.eval(x)?,
            Expr::Mul(u, v)  => u.eval(x)? * v.eval(x)?,
            Expr::Div(u, v)  => {
                let num = u.eval(x)?;
                let den = v.eval(x)?;
                if den == 0.0 {
                    return Err(EvaluationError::DivisionByZero { x });
                }
                num / den
            },
            Expr::Pow(u, v)  => {
                let base = u.eval(x)?;
                let exp  = v.eval(x)?;
                if base == 0.0 && exp < 0.0 {
                    return Err(EvaluationError::DivisionByZero { x });
                }
                let out = base.powf(exp);
                if out.is_nan() && !(base.is_nan() || exp.is_nan()) {
                    return Err(EvaluationError::Domain { function: "pow", arg: base });
                }
                out
            },
            Expr::Call(f, u) => f.apply(u.eval(x)?)?,
        })
    }

    /// `true` if the variable occurs anywhere in the tree.
    pub fn has_var(&self) -> bool {
        match self {
            Expr::Const(_) | Expr::Named(_) => false,
            Expr::Var                       => true,
            Expr::Neg(u) | Expr::Call(_, u) => u.has_var(),
            Expr::Add(u, v)
            | Expr::Sub(u, v)
            | Expr::Mul(u, v)
            | Expr::Div(u, v)
            | Expr::Pow(u, v)               => u.has_var() || v.has_var(),
        }
    }

    /// Binding strength used to decide where parentheses are needed.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 1,
            Expr::Mul(..) | Expr::Div(..) => 2,
            Expr::Neg(..)                 => 3,
            Expr::Const(c) if *c < 0.0    => 3,
            Expr::Pow(..)                 => 4,
            _                             => 5,
        }
    }

    fn fmt_child(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(c)        => write!(f, "{c}"),
            Expr::Named(Constant::Pi) => write!(f, "pi"),
            Expr::Named(Constant::E)  => write!(f, "e"),
            Expr::Var             => write!(f, "x"),
            Expr::Neg(u)          => { write!(f, "-")?; u.fmt_child(f, 3) },
            Expr::Add(u, v)       => { u.fmt_child(f, 1)?; write!(f, " + ")?; v.fmt_child(f, 1) },
            Expr::Sub(u, v)       => { u.fmt_child(f, 1)?; write!(f, " - ")?; v.fmt_child(f, 2) },
            Expr::Mul(u, v)       => { u.fmt_child(f, 2)?; write!(f, "*")?;   v.fmt_child(f, 3) },
            Expr::Div(u, v)       => { u.fmt_child(f, 2)?; write!(f, "/")?;   v.fmt_child(f, 4) },
            Expr::Pow(u, v)       => { u.fmt_child(f, 5)?; write!(f, "^")?;   v.fmt_child(f, 4) },
            Expr::Call(func, u)   => write!(f, "{}({u})", func.name()),
        }
    }
}
