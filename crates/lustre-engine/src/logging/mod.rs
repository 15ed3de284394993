//! Logging utilities.
//!
//! Library code only uses the `log` facade; binaries call [`init_logging`]
//! once to install the `env_logger` backend.

mod init;

pub use init::{LoggingConfig, init_logging};
