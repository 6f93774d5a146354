//! `envgate print`
//!
//! Loads the configuration and prints it with secrets redacted.

use std::collections::BTreeMap;
use std::io::Write;

use crate::cli::args::{OutputFormat, PrintArgs};
use crate::config::{SCHEMA, ValidatedConfig, load_config};
use crate::error::EnvGateError;

/// Validate the current environment and print the resolved configuration.
///
/// # Errors
///
/// Returns a config error if validation fails, or an I/O/JSON error if the
/// output cannot be written.
pub fn run(args: &PrintArgs) -> Result<(), EnvGateError> {
    let config = load_config()?;
    let mut stdout = std::io::stdout().lock();
    render(&config, args, &mut stdout)
}

/// Renders `config` to `out`.
///
/// # Errors
///
/// Returns an error if writing or serialization fails.
pub fn render(
    config: &ValidatedConfig,
    args: &PrintArgs,
    out: &mut impl Write,
) -> Result<(), EnvGateError> {
    let vars: BTreeMap<&str, Option<&str>> = if args.public_only {
        config
            .public_vars()
            .into_iter()
            .map(|(name, value)| (name, Some(value)))
            .collect()
    } else {
        SCHEMA
            .iter()
            .map(|spec| (spec.name, config.redacted_var(spec.name)))
            .collect()
    };

    match args.format {
        OutputFormat::Human => {
            // Schema order, not map order.
            for spec in SCHEMA {
                let Some(value) = vars.get(spec.name) else {
                    continue;
                };
                writeln!(out, "{}={}", spec.name, value.unwrap_or("(unset)"))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &vars)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{
        API_BASE_URL, OBSERVABILITY_AUTH_TOKEN, OBSERVABILITY_DSN, OBSERVABILITY_ORG,
    };
    use crate::config::{MapEnv, REDACTED, load_from};

    fn config() -> ValidatedConfig {
        load_from(
            &MapEnv::new()
                .with(API_BASE_URL, "https://api.example.com")
                .with(OBSERVABILITY_DSN, "https://dsn.example.com/1")
                .with(OBSERVABILITY_AUTH_TOKEN, "super-secret"),
        )
        .unwrap()
    }

    fn render_to_string(format: OutputFormat, public_only: bool) -> String {
        let args = PrintArgs {
            format,
            public_only,
        };
        let mut out = Vec::new();
        render(&config(), &args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn human_lists_every_variable_in_schema_order() {
        let text = render_to_string(OutputFormat::Human, false);
        let names: Vec<_> = text.lines().filter_map(|l| l.split('=').next()).collect();
        let expected: Vec<_> = SCHEMA.iter().map(|s| s.name).collect();
        assert_eq!(names, expected);
        assert!(text.contains(&format!("{OBSERVABILITY_ORG}=(unset)")));
    }

    #[test]
    fn token_is_never_printed() {
        for format in [OutputFormat::Human, OutputFormat::Json] {
            let text = render_to_string(format, false);
            assert!(!text.contains("super-secret"), "{text}");
            assert!(text.contains(REDACTED));
        }
    }

    #[test]
    fn json_has_nulls_for_unset() {
        let text = render_to_string(OutputFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value[OBSERVABILITY_ORG].is_null());
        assert_eq!(value[API_BASE_URL], "https://api.example.com");
    }

    #[test]
    fn public_only_omits_private_variables() {
        let text = render_to_string(OutputFormat::Json, true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key(API_BASE_URL));
        assert!(obj.contains_key(OBSERVABILITY_DSN));
        assert!(!text.contains(REDACTED));
    }
}
