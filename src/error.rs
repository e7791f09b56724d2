//! Crate-level error types.
//!
//! The orientation core never fails; only the outer surfaces (options files
//! and rig updates) return these.

use std::fmt;

/// Errors produced by the orbitech crate.
#[derive(Debug)]
pub enum OrbitError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Constraint preset name that is not `full`, `minimal` or `standard`.
    UnknownPreset(String),
    /// Manual update requested on a rig that updates every frame.
    ManualUpdateDisabled,
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownPreset(name) => {
                write!(f, "unknown constraint preset: {name:?}")
            }
            Self::ManualUpdateDisabled => write!(
                f,
                "manual update requested but the rig updates every frame"
            ),
        }
    }
}

impl std::error::Error for OrbitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
