//! Boolean normalization.
//!
//! Invariants:
//! - Normalization uppercases the first character and lowercases the rest.
//! - Only the normalized spellings `True` and `False` parse.

use super::error::FallbackReason;
use crate::constants::{BOOL_FALSE_LITERAL, BOOL_TRUE_LITERAL};

/// Uppercase the first character and lowercase the remainder.
///
/// `"tRuE"` becomes `"True"`. Case mapping is Unicode-aware, so a single
/// character may expand to several.
pub(crate) fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut normalized: String = first.to_uppercase().collect();
            normalized.push_str(&chars.as_str().to_lowercase());
            normalized
        }
    }
}

/// Parse a boolean after normalizing its letter case.
pub(crate) fn parse_bool(raw: &str) -> Result<bool, FallbackReason> {
    let normalized = capitalize(raw);
    if normalized == BOOL_TRUE_LITERAL {
        Ok(true)
    } else if normalized == BOOL_FALSE_LITERAL {
        Ok(false)
    } else {
        Err(FallbackReason::InvalidBool)
    }
}
