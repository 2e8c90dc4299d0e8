//! Demo command implementation
//!
//! Compares the four methods on a fixed set of sample problems.

use rootbench::{compare, CompareParams, Expression, SolverCfg};
use tracing::info;

use crate::{Format, Result};

struct Sample {
    title    : &'static str,
    function : &'static str,
    a        : f64,
    b        : f64,
    x0       : f64,
    x1       : f64,
}

const SAMPLES: [Sample; 5] = [
    Sample { title: "simple quadratic",       function: "x**2 - 4",                            a: 1.0, b: 3.0,  x0: 1.5, x1: 2.5 },
    Sample { title: "particle accelerator",   function: "x**3 - 5*x**2 + 8*x - 4",             a: 0.0, b: 3.0,  x0: 1.0, x1: 2.0 },
    Sample { title: "bacteria concentration", function: "80*exp(-2*x) + 20*exp(-0.1*x) - 10", a: 0.0, b: 10.0, x0: 1.0, x1: 2.0 },
    Sample { title: "building displacement",  function: "10*exp(-0.5*x)*cos(2*x) - 5",         a: 0.0, b: 5.0,  x0: 0.5, x1: 1.5 },
    Sample { title: "transcendental",         function: "sin(x) - x/2",                        a: 1.0, b: 3.0,  x0: 1.5, x1: 2.0 },
];

/// Run the demo command
pub fn run(format: Format) -> Result<()> {
    let cfg = SolverCfg::new();

    for (i, s) in SAMPLES.iter().enumerate() {
        info!(sample = s.title, "running sample");
        let f = Expression::parse(s.function)?;
        let params = CompareParams::new(s.a, s.b, s.x0, s.x1, cfg);
        let comparison = compare(&f, &params);

        if format == Format::Table {
            println!("### {}. {}", i + 1, s.title);
        }
        super::compare::print(&f, &comparison, format)?;
        println!();
    }
    Ok(())
}
