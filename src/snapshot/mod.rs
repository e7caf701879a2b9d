//! Persisting machines as JSON or binary snapshots.
//!
//! A snapshot wraps a machine's canonical text encoding with metadata. The
//! encoding, not the in-memory index, is what gets stored, so restoring a
//! snapshot re-runs every validity check.

use crate::machine::Machine;
use crate::relation::{MachineKind, Relation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of a machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When snapshot was created
    pub created_at: DateTime<Utc>,

    /// Whether the stored machine is deterministic
    pub kind: MachineKind,

    /// The machine in its text encoding
    pub encoding: String,
}

impl Snapshot {
    /// Capture a machine.
    pub fn of<R: Relation>(machine: &Machine<R>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            kind: R::KIND,
            encoding: machine.encode(),
        }
    }

    /// Rebuild the machine, which must be of the kind the snapshot holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsmkit::machine::Dfa;
    /// use fsmkit::snapshot::Snapshot;
    ///
    /// let dfa = Dfa::parse("0 1/a/0,a,1;1,a,0/0/0").unwrap();
    /// let json = Snapshot::of(&dfa).to_json().unwrap();
    ///
    /// let restored: Dfa = Snapshot::from_json(&json).unwrap().restore().unwrap();
    /// assert_eq!(restored, dfa);
    /// ```
    pub fn restore<R: Relation>(&self) -> Result<Machine<R>, SnapshotError> {
        self.check_version()?;
        if self.kind != R::KIND {
            return Err(SnapshotError::KindMismatch {
                found: self.kind,
                requested: R::KIND,
            });
        }
        Ok(Machine::parse(&self.encoding)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    /// Serialize to a compact binary form.
    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    fn check_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(())
    }
}

impl<R: Relation> From<&Machine<R>> for Snapshot {
    fn from(machine: &Machine<R>) -> Self {
        Self::of(machine)
    }
}
