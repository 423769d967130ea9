//! Raw action inputs.
//!
//! GitHub Actions exposes each `with:` input as an environment variable named
//! `INPUT_<NAME>`, upper-cased. [`RawInputs`] captures those values once so the
//! rest of the crate never touches process-wide state.

use std::collections::BTreeMap;
use std::ffi::OsString;

use crate::error::{Result, SassBuildError};

/// Environment prefix used by the Actions runner.
pub const DEFAULT_INPUT_PREFIX: &str = "INPUT_";

/// Read-only lookup of action inputs keyed by their declared name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    values: BTreeMap<String, String>,
}

impl RawInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs using the declared input names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(key, value)| (input_key(&key.into()), value.into()))
            .collect();
        Self { values }
    }

    /// Capture every variable carrying `prefix` from an environment listing.
    ///
    /// Names are stored upper-cased, so `INPUT_INDENTWIDTH` answers a lookup
    /// for `indentWidth`. Variables whose name is not UTF-8 are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SassBuildError::InvalidInputEncoding`] when a prefixed
    /// variable holds a value that is not UTF-8.
    pub fn from_env_vars<I, K, V>(vars: I, prefix: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut values = BTreeMap::new();
        for (key, value) in vars {
            let Ok(key) = key.into().into_string() else {
                continue;
            };
            let Some(name) = key.strip_prefix(prefix) else {
                continue;
            };
            let value = value
                .into()
                .into_string()
                .map_err(|_| SassBuildError::InvalidInputEncoding { name: key.clone() })?;
            values.insert(name.to_ascii_uppercase(), value);
        }
        Ok(Self { values })
    }

    /// Capture the current process environment.
    ///
    /// # Errors
    ///
    /// See [`RawInputs::from_env_vars`].
    pub fn from_env(prefix: &str) -> Result<Self> {
        Self::from_env_vars(std::env::vars_os(), prefix)
    }

    /// Value of the named input, `None` when absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&input_key(name)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn input_key(name: &str) -> String {
    name.to_ascii_uppercase()
}
