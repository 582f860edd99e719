//! Typed getters over an environment source.
//!
//! Responsibilities:
//! - Read one named variable per call and coerce it to the requested type.
//! - Substitute the caller's default when the variable is unset, empty, or unparsable.
//! - Log every fallback by variable name.
//!
//! Does NOT handle:
//! - Storing or mutating variables (see source.rs).
//! - Caching. Every call performs a fresh lookup.
//!
//! Invariants:
//! - No getter returns an error or panics.
//! - An empty value counts as set for `get_string` but as unset for the
//!   integer and boolean getters.
//! - Raw values are never logged.

mod error;
mod normalize;

#[cfg(test)]
mod tests;

use std::str::FromStr;

use self::error::FallbackReason;
use crate::constants::EMPTY_SENTINEL;
use crate::source::{EnvSource, SystemEnv};

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types readable with [`EnvReader::get_integer`].
///
/// Parsing uses the type's [`FromStr`] implementation: an optional `+` or `-`
/// followed by ASCII digits, with no surrounding whitespace. Values outside
/// the type's range are parse failures.
pub trait EnvInteger: FromStr<Err = std::num::ParseIntError> + sealed::Sealed {}

macro_rules! env_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl EnvInteger for $ty {}
        )*
    };
}

env_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Reads typed values from an [`EnvSource`], falling back to defaults.
///
/// # Empty values
///
/// A variable explicitly set to `""` is returned as `""` by
/// [`get_string`](Self::get_string). The integer and boolean getters read
/// through an empty-string sentinel, so for them an empty variable is
/// indistinguishable from an unset one and yields the default. This is kept
/// for compatibility with existing deployments that rely on `VAR=` meaning
/// "use the default".
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvReader<S = SystemEnv> {
    source: S,
}

impl EnvReader<SystemEnv> {
    /// A reader over the current process environment.
    pub fn system() -> Self {
        Self { source: SystemEnv }
    }
}

impl<S: EnvSource> EnvReader<S> {
    /// A reader over an arbitrary source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// The source this reader looks variables up in.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the raw value of `name`, or `default` if it is unset.
    ///
    /// An empty value is returned as-is. A value that is not valid Unicode
    /// is treated as unset.
    pub fn get_string(&self, name: &str, default: impl Into<String>) -> String {
        match self.source.var(name) {
            Ok(value) => value,
            Err(error) => fallback(name, FallbackReason::from(error), default.into()),
        }
    }

    /// Read `name` as an `i32`.
    ///
    /// Returns `default` if the variable is unset, empty, or not a base-10
    /// integer in range.
    pub fn get_int(&self, name: &str, default: i32) -> i32 {
        self.get_integer(name, default)
    }

    /// Read `name` as an `i64`. Same rules as [`get_int`](Self::get_int).
    pub fn get_long(&self, name: &str, default: i64) -> i64 {
        self.get_integer(name, default)
    }

    /// Read `name` as any primitive integer type.
    pub fn get_integer<T: EnvInteger>(&self, name: &str, default: T) -> T {
        let parsed = self
            .non_empty(name)
            .and_then(|raw| raw.parse::<T>().map_err(FallbackReason::from));
        resolve(name, parsed, default)
    }

    /// Read `name` as a boolean.
    ///
    /// The value is normalized by uppercasing its first character and
    /// lowercasing the rest, then must equal `True` or `False`. So `true`,
    /// `TRUE` and `tRuE` all parse. Anything else, including `1`, `yes` and
    /// padded values, yields `default`, as do unset and empty variables.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        let parsed = self
            .non_empty(name)
            .and_then(|raw| normalize::parse_bool(&raw));
        resolve(name, parsed, default)
    }

    /// Read through the empty-string sentinel and reject empty values.
    fn non_empty(&self, name: &str) -> Result<String, FallbackReason> {
        let raw = self.source.var(name).map_err(FallbackReason::from)?;
        if raw == EMPTY_SENTINEL {
            return Err(FallbackReason::Empty);
        }
        Ok(raw)
    }
}

fn resolve<T>(name: &str, parsed: Result<T, FallbackReason>, default: T) -> T {
    match parsed {
        Ok(value) => value,
        Err(reason) => fallback(name, reason, default),
    }
}

fn fallback<T>(name: &str, reason: FallbackReason, default: T) -> T {
    if reason.is_misconfiguration() {
        tracing::warn!(var = name, reason = %reason, "Ignoring environment variable, using default");
    } else {
        tracing::debug!(var = name, reason = %reason, "Environment variable not provided, using default");
    }
    default
}
