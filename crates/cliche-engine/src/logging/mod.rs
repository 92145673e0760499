//! Logging utilities.
//!
//! Widgets and the engine log through the `log` facade; this module only
//! wires up `env_logger` as the backend for binaries.

mod init;

pub use init::{init_logging, LoggingConfig};
