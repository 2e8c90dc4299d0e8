//! Compare command implementation

use rootbench::{compare, Comparison, Expression};
use tracing::info;

use crate::{Format, ProblemArgs, Result};

/// Run the compare command
pub fn run(args: &ProblemArgs, format: Format) -> Result<()> {
    let (f, params) = super::load_problem(args)?;
    info!(function = %f, "comparing methods");

    let comparison = compare(&f, &params);
    print(&f, &comparison, format)
}

pub fn print(f: &Expression, comparison: &Comparison, format: Format) -> Result<()> {
    match format {
        Format::Table => {
            println!("f(x)  = {f}");
            println!("f'(x) = {}", f.derivative());
            println!();
            print!("{comparison}");
        }
        Format::Json => {
            let doc = serde_json::json!({
                "function"   : f.to_string(),
                "derivative" : f.derivative().to_string(),
                "comparison" : comparison,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}
