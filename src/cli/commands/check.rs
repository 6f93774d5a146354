//! `envgate check`
//!
//! Validates the process environment and reports every error and warning.

use std::io::Write;

use serde_json::json;

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::config::{ProcessEnv, ValidationReport, Validator};
use crate::error::EnvGateError;

/// Validate the current environment.
///
/// # Errors
///
/// Returns a config error listing every problem if validation fails, or an
/// I/O error if the report cannot be written.
pub fn run(args: &CheckArgs) -> Result<(), EnvGateError> {
    tracing::info!("validating environment");
    let report = Validator::new().validate(&ProcessEnv);

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    match args.format {
        OutputFormat::Human => write_human(&report, &mut stdout, &mut stderr)?,
        OutputFormat::Json => write_json(&report, &mut stdout)?,
    }

    report.into_config()?;
    Ok(())
}

/// Writes warnings to `diag`, and the success line to `out`.
///
/// Errors are left to the caller, which prints them as part of the
/// returned [`ConfigError`](crate::error::ConfigError).
pub(crate) fn write_human(
    report: &ValidationReport,
    out: &mut impl Write,
    diag: &mut impl Write,
) -> std::io::Result<()> {
    for warning in &report.warnings {
        writeln!(diag, "{warning}")?;
    }
    if report.is_valid() {
        match report.warnings.len() {
            0 => writeln!(out, "configuration valid")?,
            1 => writeln!(out, "configuration valid (1 warning)")?,
            n => writeln!(out, "configuration valid ({n} warnings)")?,
        }
    }
    Ok(())
}

pub(crate) fn write_json(
    report: &ValidationReport,
    out: &mut impl Write,
) -> Result<(), EnvGateError> {
    let body = json!({
        "valid": report.is_valid(),
        "errors": report.errors,
        "warnings": report.warnings,
    });
    serde_json::to_writer_pretty(&mut *out, &body)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapEnv;
    use crate::config::schema::{API_BASE_URL, OBSERVABILITY_ORG};

    fn report(env: &MapEnv) -> ValidationReport {
        Validator::new().validate(env)
    }

    #[test]
    fn human_success_line() {
        let r = report(&MapEnv::new().with(API_BASE_URL, "https://api.example.com"));
        let (mut out, mut diag) = (Vec::new(), Vec::new());
        write_human(&r, &mut out, &mut diag).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "configuration valid\n");
        assert!(diag.is_empty());
    }

    #[test]
    fn human_warning_count() {
        let r = report(
            &MapEnv::new()
                .with(API_BASE_URL, "https://api.example.com")
                .with(OBSERVABILITY_ORG, ""),
        );
        let (mut out, mut diag) = (Vec::new(), Vec::new());
        write_human(&r, &mut out, &mut diag).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("1 warning"));
        assert!(String::from_utf8(diag).unwrap().contains(OBSERVABILITY_ORG));
    }

    #[test]
    fn human_failure_prints_nothing_on_stdout() {
        let r = report(&MapEnv::new());
        let (mut out, mut diag) = (Vec::new(), Vec::new());
        write_human(&r, &mut out, &mut diag).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn json_shape() {
        let r = report(&MapEnv::new());
        let mut out = Vec::new();
        write_json(&r, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["errors"][0]["path"], API_BASE_URL);
        assert_eq!(value["errors"][0]["severity"], "error");
        assert!(value["warnings"].as_array().unwrap().is_empty());
    }
}
