//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (parsing). Eventing
/// never surfaces these to the write path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A name did not match any known variant (e.g. an unknown table or topic).
    #[error("unknown {kind}: {value:?}")]
    Unknown { kind: &'static str, value: String },
}

impl DomainError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Unknown {
            kind,
            value: value.into(),
        }
    }
}
