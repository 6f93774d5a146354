//! Error types for `envgate`
//!
//! Validation problems are collected as [`ValidationIssue`]s and surfaced
//! together in a single [`ConfigError::Validation`], so an operator can fix
//! every problem in one pass.

use std::fmt;

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `envgate` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (missing or malformed variables)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (failed to write output)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `envgate` commands.
///
/// Aggregates the library's [`ConfigError`] with the failures the CLI
/// itself can hit while rendering output.
#[derive(Debug, Error)]
pub enum EnvGateError {
    /// Configuration validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EnvGateError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration validation error.
///
/// There is exactly one kind: the environment did not satisfy the schema.
/// `issues` holds every error-severity problem found, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One or more variables were missing or malformed
    #[error("{}", render_issues(.issues))]
    Validation {
        /// Every error-severity issue found during validation
        issues: Vec<ValidationIssue>,
    },
}

impl ConfigError {
    /// Returns the issues carried by this error.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Validation { issues } => issues,
        }
    }

    /// Returns `true` if any issue refers to the given variable name.
    #[must_use]
    pub fn mentions(&self, var: &str) -> bool {
        self.issues().iter().any(|issue| issue.path == var)
    }
}

fn render_issues(issues: &[ValidationIssue]) -> String {
    let noun = if issues.len() == 1 {
        "problem"
    } else {
        "problems"
    };
    let mut out = format!(
        "configuration validation failed ({} {noun})",
        issues.len()
    );
    for issue in issues {
        out.push_str("\n  ");
        out.push_str(&issue.to_string());
    }
    out
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found while checking the environment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationIssue {
    /// Environment variable the issue refers to
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl ValidationIssue {
    /// Creates an error-severity issue.
    #[must_use]
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Creates a warning-severity issue.
    #[must_use]
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.severity, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Prevents a configuration from being produced
    Error,
    /// Reported, but does not prevent loading
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `envgate` commands.
pub type Result<T> = std::result::Result<T, EnvGateError>;

// ============================================================================
// Tests
// ============================================================================
