//! Simulation utilities and program loading.
//!
//! Provides the loader that places programs in memory and the `Simulator` that
//! drives a CPU to completion.

pub mod loader;

pub mod simulator;

pub use simulator::{RunSummary, Simulator, StopHandle};
