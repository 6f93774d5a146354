//! Shared integration-test harness for running the `envgate` binary
//! against a controlled environment.

#![allow(dead_code)]

use std::process::{Command, Output};

/// A fully valid environment for the front-end.
pub const FULL_ENV: &[(&str, &str)] = &[
    ("NEXT_PUBLIC_API_BASE_URL", "https://api.example.com"),
    ("NEXT_PUBLIC_SENTRY_DSN", "https://dsn.example.com/1"),
    ("SENTRY_AUTH_TOKEN", "tok-do-not-print"),
    ("SENTRY_ORG", "org"),
    ("SENTRY_PROJECT", "proj"),
];

/// Runs `envgate` with `args` and an environment containing only `vars`.
#[allow(clippy::missing_panics_doc)]
pub fn run_envgate(args: &[&str], vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_envgate"))
        .args(args)
        .env_clear()
        .env("NO_COLOR", "1")
        .envs(vars.iter().copied())
        .output()
        .expect("failed to run envgate")
}

/// Lossy stdout.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy stderr.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
