//! Environment sources
//!
//! Validation reads variables through [`EnvSource`] so the same code path
//! runs against the live process environment and against fixed maps in
//! tests.

use std::collections::BTreeMap;

/// A variable lookup result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    /// The variable is not set.
    Unset,
    /// The variable is set to this value.
    Value(String),
    /// The variable is set but is not valid Unicode.
    NotUnicode,
}

/// A read-only store of environment variables.
pub trait EnvSource {
    /// Looks up a single variable.
    fn get(&self, name: &str) -> EnvValue;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> EnvValue {
        std::env::var_os(name).map_or(EnvValue::Unset, |raw| {
            raw.into_string()
                .map_or(EnvValue::NotUnicode, EnvValue::Value)
        })
    }
}

/// An in-memory environment snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the snapshot with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Returns the snapshot with `name` removed.
    #[must_use]
    pub fn without(mut self, name: &str) -> Self {
        self.vars.remove(name);
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> EnvValue {
        self.vars
            .get(name)
            .map_or(EnvValue::Unset, |v| EnvValue::Value(v.clone()))
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, name: &str) -> EnvValue {
        (**self).get(name)
    }
}
