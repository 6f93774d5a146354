//! Environment validation
//!
//! Checks an [`EnvSource`] against [`SCHEMA`] and produces either a
//! [`ValidatedConfig`] or every problem found. Validation collects ALL
//! errors (doesn't stop at first) so an operator can fix them in one pass.

use std::collections::BTreeMap;

use crate::config::schema::{
    API_BASE_URL, FieldKind, FieldSpec, OBSERVABILITY_AUTH_TOKEN, OBSERVABILITY_DSN,
    OBSERVABILITY_ORG, OBSERVABILITY_PROJECT, SCHEMA,
};
use crate::config::source::{EnvSource, EnvValue};
use crate::config::validated::{AbsoluteUrl, ValidatedConfig};
use crate::error::{ConfigError, ValidationIssue};

// ============================================================================
// Public API
// ============================================================================

/// A value that passed its field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A checked absolute URL.
    Url(AbsoluteUrl),
    /// Free text.
    Text(String),
}

/// Result of checking an environment against the schema.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,

    values: BTreeMap<&'static str, FieldValue>,
}

impl ValidationReport {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the checked value of a variable, if it was set and valid.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Converts the report into a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] carrying every error issue if the
    /// report has any.
    pub fn into_config(mut self) -> Result<ValidatedConfig, ConfigError> {
        if self.has_errors() {
            return Err(ConfigError::Validation {
                issues: self.errors,
            });
        }

        let Some(FieldValue::Url(api_base_url)) = self.values.remove(API_BASE_URL) else {
            // A required field with no error and no value means the schema
            // and this constructor disagree.
            return Err(ConfigError::Validation {
                issues: vec![ValidationIssue::error(
                    API_BASE_URL,
                    "required variable is not set",
                )],
            });
        };

        Ok(ValidatedConfig::new(
            api_base_url,
            self.take_url(OBSERVABILITY_DSN),
            self.take_text(OBSERVABILITY_AUTH_TOKEN),
            self.take_text(OBSERVABILITY_ORG),
            self.take_text(OBSERVABILITY_PROJECT),
        ))
    }

    fn take_url(&mut self, name: &str) -> Option<AbsoluteUrl> {
        match self.values.remove(name)? {
            FieldValue::Url(url) => Some(url),
            FieldValue::Text(_) => None,
        }
    }

    fn take_text(&mut self, name: &str) -> Option<String> {
        match self.values.remove(name)? {
            FieldValue::Text(text) => Some(text),
            FieldValue::Url(url) => Some(url.as_str().to_string()),
        }
    }
}

/// Environment validator.
///
/// Walks every schema field, checking presence and then shape.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
    values: BTreeMap<&'static str, FieldValue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates an environment and returns the report.
    ///
    /// This method collects all errors and warnings rather than stopping
    /// at the first issue.
    pub fn validate(&mut self, env: &impl EnvSource) -> ValidationReport {
        self.errors.clear();
        self.warnings.clear();
        self.values.clear();

        for spec in SCHEMA {
            self.validate_field(spec, env.get(spec.name));
        }

        self.validate_api_transport();
        self.validate_source_map_upload();

        ValidationReport {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
            values: std::mem::take(&mut self.values),
        }
    }

    // ========================================================================
    // Field Validation
    // ========================================================================

    fn validate_field(&mut self, spec: &FieldSpec, value: EnvValue) {
        let raw = match value {
            EnvValue::Unset => {
                tracing::debug!(var = spec.name, "unset");
                if spec.is_required() {
                    self.add_error(spec.name, "required variable is not set");
                }
                return;
            }
            EnvValue::NotUnicode => {
                self.add_error(spec.name, "value is not valid Unicode");
                return;
            }
            EnvValue::Value(raw) => raw,
        };

        if raw.is_empty() {
            if spec.is_required() {
                self.add_error(spec.name, "required variable is set but empty");
            } else {
                tracing::debug!(var = spec.name, "empty value treated as unset");
                self.add_warning(spec.name, "empty value treated as unset");
            }
            return;
        }

        match spec.kind {
            FieldKind::AbsoluteUrl => match AbsoluteUrl::parse(&raw) {
                Ok(url) => {
                    tracing::debug!(var = spec.name, "valid absolute URL");
                    self.values.insert(spec.name, FieldValue::Url(url));
                }
                Err(reason) => {
                    self.add_error(spec.name, format!("not a valid absolute URL: {reason}"));
                }
            },
            FieldKind::Text => {
                tracing::debug!(var = spec.name, "set");
                self.values.insert(spec.name, FieldValue::Text(raw));
            }
        }
    }

    // ========================================================================
    // Cross-Field Checks
    // ========================================================================

    /// Warns when the API is reached over plain HTTP on a non-local host.
    fn validate_api_transport(&mut self) {
        let message = match self.values.get(API_BASE_URL) {
            Some(FieldValue::Url(url)) if url.url().scheme() != "https" && !url.is_loopback() => {
                format!(
                    "API base URL uses '{}' on a non-local host; use https",
                    url.url().scheme()
                )
            }
            _ => return,
        };
        self.add_warning(API_BASE_URL, message);
    }

    /// Warns when only part of the source map upload settings is present.
    fn validate_source_map_upload(&mut self) {
        let trio = [OBSERVABILITY_AUTH_TOKEN, OBSERVABILITY_ORG, OBSERVABILITY_PROJECT];
        let missing: Vec<&str> = trio
            .iter()
            .copied()
            .filter(|name| !self.values.contains_key(*name))
            .collect();

        if !missing.is_empty() && missing.len() < trio.len() {
            let message = format!(
                "source map upload is partially configured; missing {}",
                missing.join(", ")
            );
            self.add_warning(missing[0], message);
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn add_error(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(ValidationIssue::error(path, message));
    }

    fn add_warning(&mut self, path: &str, message: impl Into<String>) {
        self.warnings.push(ValidationIssue::warning(path, message));
    }
}

// ============================================================================
// Tests
// ============================================================================
