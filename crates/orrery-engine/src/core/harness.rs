use anyhow::Result;

use crate::time::{FixedStep, WallClock};

use super::sim::Simulation;

/// Harness configuration.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Fixed simulation step, in seconds.
    pub step_size: f32,

    /// Upper bound on a single iteration's wall-clock delta, in seconds.
    pub max_frame_delta: f32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            step_size: 0.001,
            max_frame_delta: FixedStep::MAX_FRAME_DELTA,
        }
    }
}

/// Wall clock + fixed-step scheduler pair driving a [`Simulation`].
///
/// One `Harness` per host loop. The accumulator state has a single logical
/// owner; concurrent `frame` calls on one instance are not supported and
/// must be serialized by the caller.
pub struct Harness {
    clock: WallClock,
    stepper: FixedStep,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            clock: WallClock::new(),
            stepper: FixedStep::with_max_delta(config.step_size, config.max_frame_delta),
        }
    }

    /// Whole simulation steps taken so far.
    pub fn ticks(&self) -> u64 {
        self.stepper.ticks()
    }

    /// Rebaselines the clock, e.g. after asset preloading, so the stalled
    /// period is not replayed as catch-up steps.
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    /// Drives one host-loop iteration: samples the clock, drains fixed steps
    /// into [`Simulation::update`], then calls [`Simulation::present`] once.
    pub fn frame<S: Simulation>(&mut self, sim: &mut S) -> Result<()> {
        let delta = self.clock.tick();

        self.stepper.try_advance_with(
            delta,
            sim,
            |sim, dt| sim.update(dt),
            |sim, alpha| sim.present(alpha),
        )
    }
}
