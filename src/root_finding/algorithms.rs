//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! grouped into bracketing and open families.

use serde::{Serialize, Serializer};


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BracketFamily {
    Bisection,
    FalsePosition,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OpenFamily {
    Secant,
    Newton,
}

/// Asymptotic rate at which the iterate error shrinks near a simple root.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceOrder {
    Linear,
    /// golden ratio, ~1.618
    Superlinear,
    Quadratic,
}
impl ConvergenceOrder {
    pub const fn label(self) -> &'static str {
        match self {
            ConvergenceOrder::Linear      => "linear",
            ConvergenceOrder::Superlinear => "superlinear",
            ConvergenceOrder::Quadratic   => "quadratic",
        }
    }
}

impl Algorithm {
    pub const BISECTION:      Algorithm = Algorithm::Bracket(BracketFamily::Bisection);
    pub const FALSE_POSITION: Algorithm = Algorithm::Bracket(BracketFamily::FalsePosition);
    pub const SECANT:         Algorithm = Algorithm::Open(OpenFamily::Secant);
    pub const NEWTON:         Algorithm = Algorithm::Open(OpenFamily::Newton);

    /// Every method, in the order the comparator runs them.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BISECTION,
        Algorithm::FALSE_POSITION,
        Algorithm::SECANT,
        Algorithm::NEWTON,
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)     => "bisection",
            Algorithm::Bracket(BracketFamily::FalsePosition) => "false_position",
            Algorithm::Open(OpenFamily::Secant)              => "secant",
            Algorithm::Open(OpenFamily::Newton)              => "newton",
        }
    }

    /// Human-readable name used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)     => "Bisection",
            Algorithm::Bracket(BracketFamily::FalsePosition) => "False Position",
            Algorithm::Open(OpenFamily::Secant)              => "Secant",
            Algorithm::Open(OpenFamily::Newton)              => "Newton-Raphson",
        }
    }

    pub const fn convergence_order(self) -> ConvergenceOrder {
        match self {
            Algorithm::Bracket(_)                => ConvergenceOrder::Linear,
            Algorithm::Open(OpenFamily::Secant)  => ConvergenceOrder::Superlinear,
            Algorithm::Open(OpenFamily::Newton)  => ConvergenceOrder::Quadratic,
        }
    }

    /// One-line characterisation shown under a comparison report.
    pub const fn summary(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)
                => "robust; always converges when the interval brackets a sign change",
            Algorithm::Bracket(BracketFamily::FalsePosition)
                => "improves on bisection with linear interpolation; one endpoint may stagnate",
            Algorithm::Open(OpenFamily::Secant)
                => "approximates the derivative from the last two iterates",
            Algorithm::Open(OpenFamily::Newton)
                => "quadratic convergence close to a simple root; needs f'(x)",
        }
    }

    pub const fn is_bracketing(self) -> bool {
        matches!(self, Algorithm::Bracket(_))
    }

    /// Parses either the snake-case name or a few common aliases.
    pub fn from_name(name: &str) -> Option<Algorithm> {
        let normalized = name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Some(match normalized.as_str() {
            "bisection" | "bisect"                          => Algorithm::BISECTION,
            "false_position" | "regula_falsi" | "falsi"     => Algorithm::FALSE_POSITION,
            "secant"                                        => Algorithm::SECANT,
            "newton" | "newton_raphson"                     => Algorithm::NEWTON,
            _                                               => return None,
        })
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.algorithm_name())
    }
}
