//! The environment schema
//!
//! One static table describes every variable `envgate` recognizes. The
//! validator walks this table; the CLI renders it for `envgate schema`.

use serde::Serialize;

// ============================================================================
// Variable Names
// ============================================================================

/// Base URL of the backend API the front-end calls.
pub const API_BASE_URL: &str = "NEXT_PUBLIC_API_BASE_URL";

/// DSN of the error-reporting integration.
pub const OBSERVABILITY_DSN: &str = "NEXT_PUBLIC_SENTRY_DSN";

/// Token used to upload source maps to the error-reporting service.
pub const OBSERVABILITY_AUTH_TOKEN: &str = "SENTRY_AUTH_TOKEN";

/// Organization slug for source map uploads.
pub const OBSERVABILITY_ORG: &str = "SENTRY_ORG";

/// Project slug for source map uploads.
pub const OBSERVABILITY_PROJECT: &str = "SENTRY_PROJECT";

/// Prefix marking variables that are inlined into browser bundles.
pub const PUBLIC_PREFIX: &str = "NEXT_PUBLIC_";

// ============================================================================
// Field Specification
// ============================================================================

/// The shape a variable's value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Parses as a URL with a scheme and a non-empty host.
    AbsoluteUrl,
    /// Any string.
    Text,
}

impl FieldKind {
    /// Short label used in human output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AbsoluteUrl => "absolute URL",
            Self::Text => "text",
        }
    }
}

/// Whether a variable must be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// Absence is a validation error.
    Required,
    /// Absence yields an unset value.
    Optional,
}

/// A single recognized environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Environment variable name
    pub name: &'static str,
    /// Value shape
    pub kind: FieldKind,
    /// Whether the variable must be set
    pub requirement: Requirement,
    /// Value must never be printed
    pub secret: bool,
    /// One-line description
    pub description: &'static str,
}

impl FieldSpec {
    /// Returns `true` if the variable must be set.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self.requirement, Requirement::Required)
    }

    /// Returns `true` if the variable is exposed to browser code.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.name.starts_with(PUBLIC_PREFIX)
    }
}

/// Every variable `envgate` recognizes, in validation order.
pub const SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: API_BASE_URL,
        kind: FieldKind::AbsoluteUrl,
        requirement: Requirement::Required,
        secret: false,
        description: "Base URL of the backend API",
    },
    FieldSpec {
        name: OBSERVABILITY_DSN,
        kind: FieldKind::AbsoluteUrl,
        requirement: Requirement::Optional,
        secret: false,
        description: "Error-reporting DSN; reporting is disabled when unset",
    },
    FieldSpec {
        name: OBSERVABILITY_AUTH_TOKEN,
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        secret: true,
        description: "Auth token for source map uploads",
    },
    FieldSpec {
        name: OBSERVABILITY_ORG,
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        secret: false,
        description: "Organization slug for source map uploads",
    },
    FieldSpec {
        name: OBSERVABILITY_PROJECT,
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        secret: false,
        description: "Project slug for source map uploads",
    },
];

/// Looks up a field by variable name.
#[must_use]
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    SCHEMA.iter().find(|spec| spec.name == name)
}
