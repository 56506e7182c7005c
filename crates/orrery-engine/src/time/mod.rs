//! Time subsystem.
//!
//! Provides stable, testable frame scheduling without coupling to the host loop.
//! Intended usage:
//! - one `WallClock` per host loop as the delta source
//! - one `FixedStep` per simulation, fed the clock's delta once per iteration

mod fixed_step;
mod wall_clock;

pub use fixed_step::FixedStep;
pub use wall_clock::WallClock;
