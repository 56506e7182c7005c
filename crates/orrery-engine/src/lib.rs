//! Orrery engine crate.
//!
//! This crate owns the frame-scheduling and asset-loading pieces used by
//! hosts. Window, event-loop, and GPU concerns stay with the host; the
//! contract here is callbacks in, decoded bytes out.

pub mod assets;
pub mod core;
pub mod logging;
pub mod time;
