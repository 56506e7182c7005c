use anyhow::Result;

/// Simulation contract implemented by higher layers.
///
/// Errors from either callback abort the current loop iteration and
/// propagate to the harness caller unmodified.
pub trait Simulation {
    /// Called once per fixed step with the constant step size in seconds.
    ///
    /// This is where deterministic state stepping belongs; the call count
    /// per frame varies with how far real time has drifted ahead.
    fn update(&mut self, dt: f32) -> Result<()>;

    /// Called once per loop iteration, after the step drain, with the
    /// fractional progress toward the next step in `[0, 1)`.
    ///
    /// Intended for rendering with interpolation between the previous and
    /// current simulated state.
    fn present(&mut self, alpha: f32) -> Result<()>;
}
