//! The validated configuration record
//!
//! [`ValidatedConfig`] can only be built by the validator, so holding one
//! proves the environment satisfied the schema. It is immutable and cheap
//! to share behind a reference or an `Arc`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use url::Url;

use crate::config::schema::{
    API_BASE_URL, OBSERVABILITY_AUTH_TOKEN, OBSERVABILITY_DSN, OBSERVABILITY_ORG,
    OBSERVABILITY_PROJECT, SCHEMA,
};

/// Placeholder printed in place of secret values.
pub const REDACTED: &str = "[REDACTED]";

// ============================================================================
// AbsoluteUrl
// ============================================================================

/// A URL with a scheme and a non-empty host.
///
/// Keeps the input string verbatim alongside the parsed form; equality and
/// display use the verbatim string.
#[derive(Clone)]
pub struct AbsoluteUrl {
    raw: String,
    parsed: Url,
}

impl AbsoluteUrl {
    /// Parses `raw` as an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if `raw` does not parse or
    /// has no host.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let parsed = Url::parse(raw).map_err(|e| e.to_string())?;
        if !parsed.has_host() || parsed.host_str().is_some_and(str::is_empty) {
            return Err(format!("URL has no host (scheme '{}')", parsed.scheme()));
        }
        Ok(Self {
            raw: raw.to_string(),
            parsed,
        })
    }

    /// The value exactly as it was read from the environment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.parsed
    }

    /// Returns `true` if the host is a loopback name or address.
    #[must_use]
    pub fn is_loopback(&self) -> bool {
        match self.parsed.host() {
            Some(url::Host::Domain(d)) => d.eq_ignore_ascii_case("localhost"),
            Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
            Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
            None => false,
        }
    }
}

impl PartialEq for AbsoluteUrl {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for AbsoluteUrl {}

impl fmt::Debug for AbsoluteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AbsoluteUrl").field(&self.raw).finish()
    }
}

impl fmt::Display for AbsoluteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for AbsoluteUrl {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl Serialize for AbsoluteUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

// ============================================================================
// ValidatedConfig
// ============================================================================

/// Front-end configuration that passed validation.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedConfig {
    api_base_url: AbsoluteUrl,
    observability_dsn: Option<AbsoluteUrl>,
    #[serde(serialize_with = "serialize_redacted")]
    observability_auth_token: Option<String>,
    observability_org: Option<String>,
    observability_project: Option<String>,
}

impl ValidatedConfig {
    pub(crate) const fn new(
        api_base_url: AbsoluteUrl,
        observability_dsn: Option<AbsoluteUrl>,
        observability_auth_token: Option<String>,
        observability_org: Option<String>,
        observability_project: Option<String>,
    ) -> Self {
        Self {
            api_base_url,
            observability_dsn,
            observability_auth_token,
            observability_org,
            observability_project,
        }
    }

    /// Backend API base URL.
    #[must_use]
    pub const fn api_base_url(&self) -> &AbsoluteUrl {
        &self.api_base_url
    }

    /// Error-reporting DSN, if configured.
    #[must_use]
    pub const fn observability_dsn(&self) -> Option<&AbsoluteUrl> {
        self.observability_dsn.as_ref()
    }

    /// Source map upload token, if configured.
    #[must_use]
    pub fn observability_auth_token(&self) -> Option<&str> {
        self.observability_auth_token.as_deref()
    }

    /// Error-reporting organization slug, if configured.
    #[must_use]
    pub fn observability_org(&self) -> Option<&str> {
        self.observability_org.as_deref()
    }

    /// Error-reporting project slug, if configured.
    #[must_use]
    pub fn observability_project(&self) -> Option<&str> {
        self.observability_project.as_deref()
    }

    /// Settings for the runtime error-reporting integration.
    ///
    /// `None` means reporting should not be initialized.
    #[must_use]
    pub fn error_reporting(&self) -> Option<ErrorReporting<'_>> {
        self.observability_dsn.as_ref().map(|dsn| ErrorReporting {
            dsn,
            org: self.observability_org(),
            project: self.observability_project(),
        })
    }

    /// Credentials for build-time source map uploads.
    ///
    /// Present only when the token, org and project are all set.
    #[must_use]
    pub fn source_map_upload(&self) -> Option<SourceMapUpload<'_>> {
        Some(SourceMapUpload {
            auth_token: self.observability_auth_token.as_deref()?,
            org: self.observability_org.as_deref()?,
            project: self.observability_project.as_deref()?,
        })
    }

    /// Value of a variable by name, with secrets replaced by [`REDACTED`].
    ///
    /// Returns `None` for unset or unrecognized variables.
    #[must_use]
    pub fn redacted_var(&self, name: &str) -> Option<&str> {
        match name {
            API_BASE_URL => Some(self.api_base_url.as_str()),
            OBSERVABILITY_DSN => self.observability_dsn.as_ref().map(AbsoluteUrl::as_str),
            OBSERVABILITY_AUTH_TOKEN => self.observability_auth_token.as_ref().map(|_| REDACTED),
            OBSERVABILITY_ORG => self.observability_org(),
            OBSERVABILITY_PROJECT => self.observability_project(),
            _ => None,
        }
    }

    /// Browser-exposed variables that are set, keyed by variable name.
    #[must_use]
    pub fn public_vars(&self) -> BTreeMap<&'static str, &str> {
        SCHEMA
            .iter()
            .filter(|spec| spec.is_public() && !spec.secret)
            .filter_map(|spec| Some((spec.name, self.redacted_var(spec.name)?)))
            .collect()
    }
}

impl fmt::Debug for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedConfig")
            .field("api_base_url", &self.api_base_url)
            .field("observability_dsn", &self.observability_dsn)
            .field(
                "observability_auth_token",
                &self.observability_auth_token.as_ref().map(|_| REDACTED),
            )
            .field("observability_org", &self.observability_org)
            .field("observability_project", &self.observability_project)
            .finish()
    }
}

// serde hands `serialize_with` a reference to the field.
#[allow(clippy::ref_option)]
fn serialize_redacted<S: Serializer>(
    value: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(_) => serializer.serialize_some(REDACTED),
        None => serializer.serialize_none(),
    }
}

// ============================================================================
// Derived Views
// ============================================================================

/// Runtime error-reporting settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorReporting<'a> {
    /// Ingestion DSN
    pub dsn: &'a AbsoluteUrl,
    /// Organization slug, if set
    pub org: Option<&'a str>,
    /// Project slug, if set
    pub project: Option<&'a str>,
}

/// Build-time source map upload credentials.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SourceMapUpload<'a> {
    /// Upload token
    pub auth_token: &'a str,
    /// Organization slug
    pub org: &'a str,
    /// Project slug
    pub project: &'a str,
}

impl fmt::Debug for SourceMapUpload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceMapUpload")
            .field("auth_token", &REDACTED)
            .field("org", &self.org)
            .field("project", &self.project)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> AbsoluteUrl {
        AbsoluteUrl::parse(raw).unwrap()
    }

    fn full() -> ValidatedConfig {
        ValidatedConfig::new(
            url("https://api.example.com"),
            Some(url("https://dsn.example.com/1")),
            Some("tok".to_string()),
            Some("org".to_string()),
            Some("proj".to_string()),
        )
    }

    #[test]
    fn absolute_url_keeps_input_verbatim() {
        let u = url("https://api.example.com");
        assert_eq!(u.as_str(), "https://api.example.com");
        assert_eq!(u.url().as_str(), "https://api.example.com/");
    }

    #[test]
    fn absolute_url_rejects_relative() {
        assert!(AbsoluteUrl::parse("not-a-url").is_err());
        assert!(AbsoluteUrl::parse("/api/v1").is_err());
    }

    #[test]
    fn absolute_url_rejects_hostless() {
        let err = AbsoluteUrl::parse("mailto:ops@example.com").unwrap_err();
        assert!(err.contains("no host"), "{err}");
    }

    #[test]
    fn absolute_url_loopback() {
        assert!(url("http://localhost:3000").is_loopback());
        assert!(url("http://127.0.0.1:8080").is_loopback());
        assert!(url("http://[::1]/").is_loopback());
        assert!(!url("http://api.example.com").is_loopback());
    }

    #[test]
    fn debug_redacts_token() {
        let rendered = format!("{:?}", full());
        assert!(!rendered.contains("tok\""), "{rendered}");
        assert!(rendered.contains(REDACTED));
    }

    #[test]
    fn serialize_redacts_token() {
        let json = serde_json::to_value(full()).unwrap();
        assert_eq!(json["observability_auth_token"], REDACTED);
        assert_eq!(json["api_base_url"], "https://api.example.com");
        assert_eq!(json["observability_org"], "org");
    }

    #[test]
    fn serialize_unset_token_is_null() {
        let config = ValidatedConfig::new(url("https://api.example.com"), None, None, None, None);
        let json = serde_json::to_value(config).unwrap();
        assert!(json["observability_auth_token"].is_null());
    }

    #[test]
    fn error_reporting_requires_dsn() {
        let config = ValidatedConfig::new(
            url("https://api.example.com"),
            None,
            None,
            Some("org".to_string()),
            None,
        );
        assert!(config.error_reporting().is_none());

        let config = full();
        let reporting = config.error_reporting();
        assert_eq!(
            reporting.map(|r| r.dsn.as_str().to_string()),
            Some("https://dsn.example.com/1".to_string())
        );
    }

    #[test]
    fn source_map_upload_requires_all_three() {
        let full = full();
        let upload = full.source_map_upload().unwrap();
        assert_eq!(upload.auth_token, "tok");
        assert_eq!(upload.org, "org");
        assert_eq!(upload.project, "proj");

        let partial = ValidatedConfig::new(
            url("https://api.example.com"),
            None,
            Some("tok".to_string()),
            Some("org".to_string()),
            None,
        );
        assert!(partial.source_map_upload().is_none());
    }

    #[test]
    fn source_map_upload_debug_redacts() {
        let full = full();
        let rendered = format!("{:?}", full.source_map_upload().unwrap());
        assert!(!rendered.contains("\"tok\""));
    }

    #[test]
    fn redacted_var_hides_secrets() {
        let config = full();
        assert_eq!(config.redacted_var(OBSERVABILITY_AUTH_TOKEN), Some(REDACTED));
        assert_eq!(config.redacted_var(OBSERVABILITY_ORG), Some("org"));
        assert_eq!(config.redacted_var(API_BASE_URL), Some("https://api.example.com"));
        assert_eq!(config.redacted_var("HOME"), None);
    }

    #[test]
    fn public_vars_only_lists_set_public_variables() {
        let config = full();
        let vars = config.public_vars();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[API_BASE_URL], "https://api.example.com");
        assert_eq!(vars[OBSERVABILITY_DSN], "https://dsn.example.com/1");

        let minimal = ValidatedConfig::new(url("https://api.example.com"), None, None, None, None);
        assert_eq!(minimal.public_vars().len(), 1);
    }
}
