//! `envgate schema`
//!
//! Lists every recognized environment variable.

use std::io::Write;

use serde_json::{Value, json};

use crate::cli::args::{OutputFormat, SchemaArgs};
use crate::config::{FieldSpec, SCHEMA};
use crate::error::EnvGateError;

/// Print the variable schema.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run(args: &SchemaArgs) -> Result<(), EnvGateError> {
    let mut stdout = std::io::stdout().lock();
    render(SCHEMA, args.format, &mut stdout)
}

fn spec_json(spec: &FieldSpec) -> Value {
    json!({
        "name": spec.name,
        "kind": spec.kind,
        "requirement": spec.requirement,
        "secret": spec.secret,
        "public": spec.is_public(),
        "description": spec.description,
    })
}

fn render(
    specs: &[FieldSpec],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), EnvGateError> {
    match format {
        OutputFormat::Human => {
            let width = specs.iter().map(|s| s.name.len()).max().unwrap_or(0);
            for spec in specs {
                let mut flags = vec![if spec.is_required() { "required" } else { "optional" }];
                if spec.secret {
                    flags.push("secret");
                }
                if spec.is_public() {
                    flags.push("public");
                }
                writeln!(
                    out,
                    "{:<width$}  {:<12}  {:<24}  {}",
                    spec.name,
                    spec.kind.label(),
                    flags.join(","),
                    spec.description,
                )?;
            }
        }
        OutputFormat::Json => {
            let body: Vec<Value> = specs.iter().map(spec_json).collect();
            serde_json::to_writer_pretty(&mut *out, &body)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
