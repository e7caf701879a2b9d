//! Snapshot error types.

use crate::machine::MachineError;
use crate::relation::MachineKind;
use thiserror::Error;

/// Errors that can occur during snapshot operations
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot holds a different kind of machine than requested
    #[error("Snapshot holds a {found}, requested a {requested}")]
    KindMismatch {
        found: MachineKind,
        requested: MachineKind,
    },

    /// Stored encoding no longer describes a valid machine
    #[error("Snapshot validation failed: {0}")]
    Invalid(#[from] MachineError),
}
