//! Reasons a getter fell back to its default.
//!
//! Responsibilities:
//! - Name every cause of a fallback so it can be logged.
//!
//! Does NOT handle:
//! - Surfacing failures to callers. Getters always resolve to the default.
//!
//! Invariants:
//! - No variant carries the raw variable value, which may be a secret.

use std::env::VarError;
use std::num::ParseIntError;
use thiserror::Error;

/// Why a requested type could not be produced from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum FallbackReason {
    #[error("variable is not set")]
    Unset,

    #[error("variable is set to an empty string")]
    Empty,

    #[error("variable value is not valid Unicode")]
    NotUnicode,

    #[error("not a base-10 integer for the requested type: {0}")]
    InvalidInteger(#[from] ParseIntError),

    #[error("not a boolean literal (expected true or false in any letter case)")]
    InvalidBool,
}

impl FallbackReason {
    /// Whether the variable held a value that could not be used.
    ///
    /// Unset and empty variables are the ordinary way to ask for a default;
    /// everything else points at a misconfigured environment.
    pub(crate) fn is_misconfiguration(&self) -> bool {
        !matches!(self, Self::Unset | Self::Empty)
    }
}

impl From<VarError> for FallbackReason {
    fn from(error: VarError) -> Self {
        match error {
            VarError::NotPresent => Self::Unset,
            VarError::NotUnicode(_) => Self::NotUnicode,
        }
    }
}
