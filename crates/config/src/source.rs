//! Environment sources consulted by [`EnvReader`](crate::EnvReader).
//!
//! Responsibilities:
//! - Define the `EnvSource` seam between the getters and the environment table.
//! - Read the real process environment (`SystemEnv`).
//! - Provide an in-memory table (`MapEnv`) for tests and captured snapshots.
//!
//! Does NOT handle:
//! - Type coercion or defaults (see reader.rs).
//! - Mutating the process environment. No source ever writes to it.
//!
//! Invariants:
//! - A lookup reports `VarError::NotPresent` for unknown names, like `std::env::var`.
//! - An empty value is returned as-is; sources never collapse it to "absent".

use std::collections::HashMap;
use std::env::VarError;

/// Read-only access to a table of environment variables.
///
/// The signature mirrors [`std::env::var`] so the process environment and
/// in-memory tables are interchangeable.
pub trait EnvSource {
    /// Look up `name`, returning its value or the reason it is unavailable.
    fn var(&self, name: &str) -> Result<String, VarError>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, name: &str) -> Result<String, VarError> {
        (**self).var(name)
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, name: &str) -> Result<String, VarError> {
        std::env::var(name)
    }
}

/// An owned, in-memory environment table.
///
/// Useful in tests, where mutating the process environment needs global
/// serialization, and for resolving values from a snapshot such as
/// `MapEnv::from_vars(std::env::vars())`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture name/value pairs into a new table. Later duplicates win.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        vars.into_iter().collect()
    }

    /// Builder-style insert.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a variable, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(name.into(), value.into())
    }

    /// Number of variables in the table.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the table holds no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Result<String, VarError> {
        self.vars.get(name).cloned().ok_or(VarError::NotPresent)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        env.extend(iter);
        env
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for MapEnv {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
