//! Simulation driver layer: image loading and the cycle runner.

/// Program image loading.
pub mod loader;
/// The cycle loop and per-cycle register logging.
pub mod runner;

pub use runner::{RunOutcome, Runner};
