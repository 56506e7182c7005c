use std::time::Instant;

/// Wall-clock delta source for a host loop.
///
/// `WallClock` is designed to be used per loop so that concurrent loops do
/// not share delta state. The returned delta is raw and non-negative but
/// deliberately unclamped; bounding catch-up work is [`FixedStep`]'s job.
///
/// [`FixedStep`]: super::FixedStep
#[derive(Debug, Clone)]
pub struct WallClock {
    last: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }

    /// Resets the baseline.
    ///
    /// Useful after a deliberate stall (asset preload, suspension) so the
    /// next delta does not cover the stalled period.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Returns the seconds elapsed since the previous `tick` (or construction).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;

        dt.as_secs_f32()
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}
