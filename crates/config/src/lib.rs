//! Typed environment variable access with default fallbacks.
//!
//! This crate reads a named environment variable, coerces it to the requested
//! type, and returns a caller-supplied default when the variable is absent or
//! cannot be coerced. No getter ever returns an error.
//!
//! ```
//! let port = env_defaults::get_int("ENV_DEFAULTS_DOC_PORT", 8080);
//! let verbose = env_defaults::get_bool("ENV_DEFAULTS_DOC_VERBOSE", false);
//! assert_eq!(port, 8080);
//! assert!(!verbose);
//! ```
//!
//! A variable set to the empty string counts as set for [`get_string`], but
//! the integer and boolean getters treat it exactly like an unset variable.
//! See [`EnvReader`] for details.

pub mod constants;
mod reader;
pub mod source;

pub use reader::{EnvInteger, EnvReader};
pub use source::{EnvSource, MapEnv, SystemEnv};

/// Read `name` from the process environment, or `default` if unset.
///
/// Shorthand for [`EnvReader::get_string`] on [`EnvReader::system`].
pub fn get_string(name: &str, default: impl Into<String>) -> String {
    EnvReader::system().get_string(name, default)
}

/// Read `name` from the process environment as an `i32`.
pub fn get_int(name: &str, default: i32) -> i32 {
    EnvReader::system().get_int(name, default)
}

/// Read `name` from the process environment as an `i64`.
pub fn get_long(name: &str, default: i64) -> i64 {
    EnvReader::system().get_long(name, default)
}

/// Read `name` from the process environment as any primitive integer type.
pub fn get_integer<T: EnvInteger>(name: &str, default: T) -> T {
    EnvReader::system().get_integer(name, default)
}

/// Read `name` from the process environment as a boolean.
pub fn get_bool(name: &str, default: bool) -> bool {
    EnvReader::system().get_bool(name, default)
}
