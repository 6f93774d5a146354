//! `envgate` - startup environment validation for web front-ends
//!
//! Reads the front-end's environment variables once, validates them against
//! a single schema, and hands back an immutable [`ValidatedConfig`]:
//!
//! ```no_run
//! let config = envgate::load_config()?;
//! println!("calling {}", config.api_base_url());
//! # Ok::<(), envgate::ConfigError>(())
//! ```
//!
//! Pass the returned value to whatever needs it; there is no global.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;

pub use config::{ValidatedConfig, load_config, load_from};
pub use error::{ConfigError, ValidationIssue};
