//! Running a simulation over time

pub mod cancel;
pub mod runner;

pub use cancel::CancellationToken;
pub use runner::{RunOutcome, Simulation};
