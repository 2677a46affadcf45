//! Logging setup.
//!
//! Library code only talks to the `log` facade; `init_logging` is for binaries
//! and tests that want to see it.

mod init;

pub use init::{LoggingConfig, init_logging};
