//! Logging setup for hosts and tools.

mod init;

pub use init::{init_logging, LoggingConfig};
