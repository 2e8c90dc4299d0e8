//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod compare;
pub mod demo;
pub mod solve;

use rootbench::params::Params;
use rootbench::{CompareParams, Expression, SolverCfg};

use crate::{CliError, ProblemArgs, Result};

/// Builds the function and parameters from either a parameter file or flags.
pub fn load_problem(args: &ProblemArgs) -> Result<(Expression, CompareParams)> {
    if let Some(path) = &args.params {
        return Ok(Params::from_file(path)?.into_parts());
    }

    let src = args.function.as_deref().ok_or(CliError::MissingFunction)?;
    let expression = Expression::parse(src)?;
    let cfg = SolverCfg::new().set_tol(args.tol)?.with_max_iter(args.max_iter);

    Ok((expression, CompareParams::new(args.a, args.b, args.x0, args.x1, cfg)))
}
