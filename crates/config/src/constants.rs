//! Literals shared by the typed getters.
//!
//! Kept in one place so the boolean grammar and the empty-value sentinel are
//! not duplicated across the reader and its tests.

// =============================================================================
// Boolean Literals
// =============================================================================

/// Normalized spelling accepted as `true`.
pub const BOOL_TRUE_LITERAL: &str = "True";

/// Normalized spelling accepted as `false`.
pub const BOOL_FALSE_LITERAL: &str = "False";

// =============================================================================
// Lookup Sentinels
// =============================================================================

/// Value the integer and boolean getters read through when a variable is unset.
///
/// Because the sentinel is the empty string, a variable explicitly set to `""`
/// cannot be told apart from an unset one by those getters.
pub const EMPTY_SENTINEL: &str = "";
