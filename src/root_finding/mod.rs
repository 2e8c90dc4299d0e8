// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod config;
pub(crate) mod signs;
pub(crate) mod eval;

// algorithms
pub mod bisection;
pub mod false_position;
pub mod secant;
pub mod newton;

pub use bisection::bisection;
pub use false_position::false_position;
pub use secant::secant;
pub use newton::newton;
