use std::convert::Infallible;

/// Fixed-timestep scheduler decoupling simulation rate from display rate.
///
/// Each host-loop iteration feeds [`advance`](Self::advance) the wall-clock
/// delta. The scheduler accumulates time, drains it in whole steps through
/// the `update` callback, then calls `present` exactly once with the
/// fractional progress toward the next step — the value to interpolate
/// between the previous and current simulated state with.
///
/// Invariants after every `advance`:
/// - the accumulator is in `[0, step)`
/// - simulated time (`ticks * step`) trails wall-clock time by less than one
///   step, and wall-clock time by no more than the per-frame clamp
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_delta: f32,
    accumulator: f32,
    ticks: u64,
}

impl FixedStep {
    /// Default clamp on a single frame's delta, in seconds.
    ///
    /// A frame delta is clamped here before accumulation, so the catch-up
    /// burst after a stall (breakpoint, window drag) replays at most
    /// `MAX_FRAME_DELTA / step` update steps.
    pub const MAX_FRAME_DELTA: f32 = 0.2;

    /// Creates a scheduler with the default frame-delta clamp.
    pub fn new(step: f32) -> Self {
        Self::with_max_delta(step, Self::MAX_FRAME_DELTA)
    }

    /// Creates a scheduler with a custom frame-delta clamp.
    pub fn with_max_delta(step: f32, max_delta: f32) -> Self {
        debug_assert!(step > 0.0);
        debug_assert!(max_delta >= step);

        Self {
            step,
            max_delta,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Fixed step size in seconds, as passed at construction.
    pub fn step_size(&self) -> f32 {
        self.step
    }

    /// Whole simulation steps taken so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Total simulated time in seconds (`ticks * step`).
    pub fn simulated_time(&self) -> f64 {
        self.ticks as f64 * self.step as f64
    }

    /// Fractional progress toward the next step, in `[0, 1)`.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    /// Infallible [`try_advance`](Self::try_advance).
    pub fn advance(
        &mut self,
        delta: f32,
        mut update: impl FnMut(f32),
        present: impl FnOnce(f32),
    ) {
        let result = self.try_advance::<Infallible>(
            delta,
            |dt| {
                update(dt);
                Ok(())
            },
            |alpha| {
                present(alpha);
                Ok(())
            },
        );

        match result {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }

    /// [`try_advance_with`](Self::try_advance_with) for callbacks that do not
    /// share mutable state.
    pub fn try_advance<E>(
        &mut self,
        delta: f32,
        mut update: impl FnMut(f32) -> Result<(), E>,
        present: impl FnOnce(f32) -> Result<(), E>,
    ) -> Result<(), E> {
        self.try_advance_with(delta, &mut (), |_, dt| update(dt), |_, alpha| present(alpha))
    }

    /// Advances the logical clock by `delta` seconds.
    ///
    /// `delta` is clamped to the frame-delta bound before accumulation, and a
    /// non-positive `delta` is a no-op invoking neither callback (a timer
    /// that did not advance skips the frame). `update` runs once per whole
    /// step drained — zero or many times per call — and `present` runs
    /// exactly once afterwards with [`alpha`](Self::alpha).
    ///
    /// `ctx` is threaded through both callbacks so update and present can
    /// mutate one simulation state without fighting the borrow checker.
    ///
    /// Callback errors propagate unchanged: a failing `update` aborts the
    /// remaining queued steps and `present` is not invoked for that call.
    pub fn try_advance_with<C, E>(
        &mut self,
        delta: f32,
        ctx: &mut C,
        mut update: impl FnMut(&mut C, f32) -> Result<(), E>,
        present: impl FnOnce(&mut C, f32) -> Result<(), E>,
    ) -> Result<(), E> {
        if delta <= 0.0 {
            return Ok(());
        }

        self.accumulator += delta.min(self.max_delta);

        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            update(ctx, self.step)?;
            self.ticks += 1;
        }

        present(ctx, self.alpha())
    }
}
