//! Environment variable abstraction for testability.
//!
//! The server reads its overrides through [`Env::real()`]. Config tests use
//! [`Env::mock()`] so they never touch the process environment.

use std::collections::HashMap;
use std::str::FromStr;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

/// Outcome of reading a typed variable.
#[derive(Debug, PartialEq, Eq)]
pub enum EnvValue<T> {
    Unset,
    Invalid(String),
    Parsed(T),
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Option<String> {
        let value = match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Look up and parse a variable, keeping the raw text when it does not parse.
    pub fn parse<T: FromStr>(&self, name: &str) -> EnvValue<T> {
        match self.var(name) {
            None => EnvValue::Unset,
            Some(raw) => match raw.trim().parse() {
                Ok(v) => EnvValue::Parsed(v),
                Err(_) => EnvValue::Invalid(raw),
            },
        }
    }
}
