//! Simulation driver.

/// The cycle-loop engine.
pub mod simulator;

pub use simulator::Simulator;
