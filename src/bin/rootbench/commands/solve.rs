//! Solve command implementation

use rootbench::compare::run as run_method;
use rootbench::root_finding::algorithms::Algorithm;
use tracing::info;

use crate::{CliError, ProblemArgs, Result};

/// Run the solve command
pub fn run(method: &str, args: &ProblemArgs) -> Result<()> {
    let algorithm = Algorithm::from_name(method)
        .ok_or_else(|| CliError::UnknownMethod(method.to_string()))?;

    let (f, params) = super::load_problem(args)?;
    info!(%algorithm, function = %f, "solving");

    let df = f.derivative();
    let c = run_method(algorithm, &f, &df, &params)
        .map_err(|source| CliError::Method { method: algorithm.label(), source })?;

    println!("method     : {}", algorithm.label());
    println!("root       : {:.12}", c.root);
    println!("f(root)    : {:.3e}", c.f_root);
    println!("iterations : {}", c.iterations());
    println!("evaluations: {}", c.evaluations);
    println!("stopped by : {:?}", c.criterion);
    Ok(())
}
