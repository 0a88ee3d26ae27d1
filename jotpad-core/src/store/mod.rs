use crate::{CoreError, NoteInfo};
use async_trait::async_trait;

pub mod memory;

/// Seam between the note operations and a storage location. Each call opens
/// and closes its own handle; nothing is shared across calls.
#[async_trait]
pub trait Store: Send + Sync {
    /// Persist `text` according to the store's write policy.
    async fn save(&self, text: &str) -> Result<(), CoreError>;

    /// Read the note back line by line, with a newline appended after every
    /// line. A note that was never saved is `CoreError::NotFound`.
    async fn load(&self) -> Result<String, CoreError>;

    /// Declared but unimplemented; always `CoreError::Unsupported`.
    async fn share(&self) -> Result<(), CoreError>;

    async fn info(&self) -> Result<NoteInfo, CoreError>;
}
