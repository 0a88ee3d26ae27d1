use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which of the two storage locations an operation targets. A stateless
/// selector consulted at the moment of each operation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageMode {
    /// App-private data directory, not visible to other programs.
    Internal,
    /// Shared public Documents directory.
    External,
}

impl StorageMode {
    /// The documented write policy for each location: external notes grow as a
    /// line-oriented log, internal notes hold the latest buffer only.
    pub fn default_policy(&self) -> WritePolicy {
        match self {
            StorageMode::Internal => WritePolicy::Overwrite,
            StorageMode::External => WritePolicy::Append,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Append the text plus a trailing newline to whatever is already there.
    Append,
    /// Replace the file with the raw bytes of the text. Empty text is a no-op.
    Overwrite,
}

/// Metadata about the persisted note, as reported by `Store::info`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteInfo {
    /// Resolved file location; `None` for stores with no backing file.
    pub location: Option<PathBuf>,
    pub exists: bool,
    pub bytes: u64,
    pub modified_at: Option<DateTime<Utc>>,
}
