//! Tests for the typed getters.
//!
//! Responsibilities:
//! - Test coercion and fallback rules against in-memory sources.
//! - Test the same rules against the real process environment.
//! - Test that fallbacks are logged without leaking values.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and `env_lock()`.
//! - Process variables are scoped with `temp_env` so they are restored afterwards.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
