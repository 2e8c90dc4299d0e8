//! rootbench - compare root-finding methods from the command line
//!
//! # Commands
//!
//! - `rootbench compare <expr> ...` - run all four methods and rank them
//! - `rootbench compare --params <file>` - same, reading a parameter file
//! - `rootbench solve --method <m> <expr> ...` - run a single method
//! - `rootbench demo` - compare on the bundled sample problems

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Root-finding method comparison
#[derive(Parser)]
#[command(name = "rootbench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logs unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output format of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

/// Problem given on the command line
#[derive(Debug, Args)]
pub struct ProblemArgs {
    /// Function of x, e.g. "x**2 - 4"
    pub function: Option<String>,

    /// Left end of the bracket
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub a: f64,

    /// Right end of the bracket
    #[arg(short, long, default_value_t = 3.0, allow_negative_numbers = true)]
    pub b: f64,

    /// First initial estimate (secant, newton)
    #[arg(long, default_value_t = 1.5, allow_negative_numbers = true)]
    pub x0: f64,

    /// Second initial estimate (secant)
    #[arg(long, default_value_t = 2.5, allow_negative_numbers = true)]
    pub x1: f64,

    /// Stop tolerance
    #[arg(short, long, default_value_t = rootbench::SolverCfg::DEFAULT_TOL)]
    pub tol: f64,

    /// Iteration cap
    #[arg(short, long, default_value_t = rootbench::SolverCfg::DEFAULT_MAX_ITER)]
    pub max_iter: usize,

    /// Parameter file; replaces the function and the flags above
    #[arg(short, long, conflicts_with = "function")]
    pub params: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all four methods and rank the ones that converged
    Compare {
        #[command(flatten)]
        problem: ProblemArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Run a single method
    Solve {
        /// bisection, false-position, secant or newton
        #[arg(long)]
        method: String,

        #[command(flatten)]
        problem: ProblemArgs,
    },

    /// Compare all methods on the bundled sample problems
    Demo {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    debug!("verbose mode enabled");

    match cli.command {
        Commands::Compare { problem, format } => commands::compare::run(&problem, format),
        Commands::Solve { method, problem }  => commands::solve::run(&method, &problem),
        Commands::Demo { format }            => commands::demo::run(format),
    }
}
