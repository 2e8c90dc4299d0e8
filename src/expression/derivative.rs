//! Symbolic differentiation with respect to `x`.
//!
//! Applies the sum, product, quotient, chain and power rules. The node
//! builders below fold trivial identities (`0 + u`, `1 * u`, `u ^ 1`, ...)
//! so a derivative stays readable; no further simplification is attempted.

use super::ast::{Expr, Func};


pub(crate) fn differentiate(e: &Expr) -> Expr {
    match e {
        Expr::Const(_) | Expr::Named(_) => Expr::Const(0.0),
        Expr::Var                       => Expr::Const(1.0),

        Expr::Neg(u)    => neg(differentiate(u)),
        Expr::Add(u, v) => add(differentiate(u), differentiate(v)),
        Expr::Sub(u, v) => sub(differentiate(u), differentiate(v)),

        // (uv)' = u'v + uv'
        Expr::Mul(u, v) => add(
            mul(differentiate(u), (**v).clone()),
            mul((**u).clone(), differentiate(v)),
        ),

        // (u/v)' = (u'v - uv') / v^2
        Expr::Div(u, v) => div(
            sub(
                mul(differentiate(u), (**v).clone()),
                mul((**u).clone(), differentiate(v)),
            ),
            pow((**v).clone(), Expr::Const(2.0)),
        ),

        Expr::Pow(u, v) => power_rule(u, v),

        Expr::Call(f, u) => mul(outer_derivative(*f, u), differentiate(u)),
    }
}


fn power_rule(u: &Expr, v: &Expr) -> Expr {
    let du = differentiate(u);

    // u^n, n free of x: n * u^(n-1) * u'
    if !v.has_var() {
        let lowered = match v {
            Expr::Const(n) => Expr::Const(n - 1.0),
            _              => sub(v.clone(), Expr::Const(1.0)),
        };
        return mul(mul(v.clone(), pow(u.clone(), lowered)), du);
    }

    let dv = differentiate(v);
    let this = pow(u.clone(), v.clone());

    // a^v, a free of x: a^v * ln(a) * v'
    if !u.has_var() {
        return mul(mul(this, call(Func::Ln, u.clone())), dv);
    }

    // u^v: u^v * (v' ln(u) + v u' / u)
    mul(
        this,
        add(
            mul(dv, call(Func::Ln, u.clone())),
            div(mul(v.clone(), du), u.clone()),
        ),
    )
}


/// f'(u) for the outer function of a call.
fn outer_derivative(f: Func, u: &Expr) -> Expr {
    let u = u.clone();
    match f {
        Func::Sin  => call(Func::Cos, u),
        Func::Cos  => neg(call(Func::Sin, u)),
        Func::Tan  => div(Expr::Const(1.0), pow(call(Func::Cos, u), Expr::Const(2.0))),
        Func::Exp  => call(Func::Exp, u),
        Func::Ln   => div(Expr::Const(1.0), u),
        Func::Sqrt => div(Expr::Const(1.0), mul(Expr::Const(2.0), call(Func::Sqrt, u))),
        Func::Abs  => call(Func::Sign, u),
        Func::Sign => Expr::Const(0.0),
    }
}


fn is_const(e: &Expr, c: f64) -> bool {
    matches!(e, Expr::Const(v) if *v == c)
}

fn neg(u: Expr) -> Expr {
    match u {
        Expr::Const(c) => Expr::Const(-c),
        Expr::Neg(inner) => *inner,
        u => Expr::Neg(Box::new(u)),
    }
}

fn add(u: Expr, v: Expr) -> Expr {
    match (u, v) {
        (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
        (u, v) if is_const(&u, 0.0) => v,
        (u, v) if is_const(&v, 0.0) => u,
        (u, v) => Expr::Add(Box::new(u), Box::new(v)),
    }
}

fn sub(u: Expr, v: Expr) -> Expr {
    match (u, v) {
        (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
        (u, v) if is_const(&v, 0.0) => u,
        (u, v) if is_const(&u, 0.0) => neg(v),
        (u, v) => Expr::Sub(Box::new(u), Box::new(v)),
    }
}

fn mul(u: Expr, v: Expr) -> Expr {
    match (u, v) {
        (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
        (u, v) if is_const(&u, 0.0) || is_const(&v, 0.0) => Expr::Const(0.0),
        (u, v) if is_const(&u, 1.0) => v,
        (u, v) if is_const(&v, 1.0) => u,
        (u, v) => Expr::Mul(Box::new(u), Box::new(v)),
    }
}

fn div(u: Expr, v: Expr) -> Expr {
    match (u, v) {
        (u, v) if is_const(&v, 1.0) => u,
        (u, v) => Expr::Div(Box::new(u), Box::new(v)),
    }
}

fn pow(u: Expr, v: Expr) -> Expr {
    match (u, v) {
        (u, v) if is_const(&v, 1.0) => u,
        (_, v) if is_const(&v, 0.0) => Expr::Const(1.0),
        (u, v) => Expr::Pow(Box::new(u), Box::new(v)),
    }
}

fn call(f: Func, u: Expr) -> Expr {
    Expr::Call(f, Box::new(u))
}
