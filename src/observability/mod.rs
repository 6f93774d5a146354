//! Observability module
//!
//! Structured logging for `envgate` runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
