use thiserror::Error;

use crate::domain::EntityKind;

/// Failures raised by a persistence adapter
///
/// These are infrastructure faults. Use cases pass them through untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("unique constraint violated: {kind} with {key} already stored")]
    UniqueViolation { kind: EntityKind, key: String },

    /// The stored copy moved past the version the caller loaded
    #[error("concurrency conflict on {kind} {id}: expected version {expected}, found {actual}")]
    StaleAggregate {
        kind: EntityKind,
        id: String,
        expected: u64,
        actual: u64,
    },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
