use directories::{ProjectDirs, UserDirs};
use jotpad_core::StorageMode;
use std::path::PathBuf;

/// Fixed name of the persisted note in either location.
pub const NOTE_FILE: &str = "jotpad.txt";

/// App-private data directory.
pub fn internal_root() -> PathBuf {
    // org = "jotpad", app = "Jotpad"
    if let Some(pd) = ProjectDirs::from("com", "jotpad", "Jotpad") {
        pd.data_dir().to_path_buf()
    } else {
        // Fallback: current dir
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// Shared public Documents directory.
pub fn external_root() -> PathBuf {
    if let Some(dirs) = UserDirs::new() {
        if let Some(docs) = dirs.document_dir() {
            return docs.to_path_buf();
        }
        // No registered Documents dir (headless setups)
        return dirs.home_dir().join("Documents");
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolved location of the note file for `mode`. The two modes resolve to
/// independent files that may diverge.
pub fn note_path(mode: StorageMode) -> PathBuf {
    match mode {
        StorageMode::Internal => internal_root().join(NOTE_FILE),
        StorageMode::External => external_root().join(NOTE_FILE),
    }
}
