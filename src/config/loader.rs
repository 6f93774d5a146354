//! Configuration loading
//!
//! Entry points that turn an environment snapshot into a
//! [`ValidatedConfig`]. Call one of these once at startup and pass the
//! result to whatever needs it.

use crate::config::source::{EnvSource, ProcessEnv};
use crate::config::validated::ValidatedConfig;
use crate::config::validation::Validator;
use crate::error::ConfigError;

/// Validates the current process environment.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] listing every missing or malformed
/// variable. The caller is expected to abort startup.
pub fn load_config() -> Result<ValidatedConfig, ConfigError> {
    load_from(&ProcessEnv)
}

/// Validates an arbitrary environment source.
///
/// Warnings are logged and do not affect the result.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] listing every missing or malformed
/// variable.
pub fn load_from(env: &impl EnvSource) -> Result<ValidatedConfig, ConfigError> {
    let report = Validator::new().validate(env);

    for warning in &report.warnings {
        tracing::warn!(var = %warning.path, "{}", warning.message);
    }

    match report.into_config() {
        Ok(config) => {
            tracing::info!(
                api_base_url = %config.api_base_url(),
                error_reporting = config.error_reporting().is_some(),
                source_map_upload = config.source_map_upload().is_some(),
                "configuration valid"
            );
            Ok(config)
        }
        Err(err) => {
            tracing::error!(problems = err.issues().len(), "configuration invalid");
            Err(err)
        }
    }
}
