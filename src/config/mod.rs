//! Configuration module
//!
//! Reads the front-end's environment variables, validates them against a
//! single schema, and produces an immutable [`ValidatedConfig`].

pub mod loader;
pub mod schema;
pub mod source;
pub mod validated;
pub mod validation;

pub use loader::{load_config, load_from};
pub use schema::{FieldKind, FieldSpec, Requirement, SCHEMA};
pub use source::{EnvSource, EnvValue, MapEnv, ProcessEnv};
pub use validated::{AbsoluteUrl, ErrorReporting, REDACTED, SourceMapUpload, ValidatedConfig};
pub use validation::{FieldValue, ValidationReport, Validator};
