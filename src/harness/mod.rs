//! Demonstration harness.
//!
//! Runs the solvers on fixed scenarios and hands the results to a
//! [`Reporter`]. The harness is a plain caller of the public solver API;
//! nothing in the solvers depends on it.

mod report;
mod scenario;

pub use report::{run_scenario, Report, Reporter, TextReporter};
pub use scenario::{builtin_scenarios, Scenario};
