//! Host-facing scheduling contract.
//!
//! [`Simulation`] is the callback pair the scheduler drives; [`Harness`]
//! bundles a wall clock and a fixed-step scheduler for hosts that want the
//! whole loop iteration in one call.

mod harness;
mod sim;

pub use harness::{Harness, HarnessConfig};
pub use sim::Simulation;
