use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jotpad_core::{CoreError, NoteInfo, StorageMode, Store, WritePolicy};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::task;

pub mod paths;

/// File-backed note store. One fixed-name file per storage mode; the file is
/// created on first save and never deleted here. Handles are scoped to each
/// call, nothing is shared or locked across calls.
pub struct FileStore {
    path: PathBuf,
    policy: WritePolicy,
}

impl FileStore {
    /// Store at the default location for `mode`, with the mode's documented
    /// write policy.
    pub fn open_default(mode: StorageMode) -> Self {
        Self::open_with(paths::note_path(mode), mode.default_policy())
    }

    pub fn open_with(path: PathBuf, policy: WritePolicy) -> Self {
        Self { path, policy }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Store for FileStore {
    async fn save(&self, text: &str) -> Result<(), CoreError> {
        let path = self.path.clone();
        let policy = self.policy;
        let text = text.to_string();

        // Join error -> CoreError, inner io failure already mapped
        task::spawn_blocking(move || match policy {
            WritePolicy::Append => append_line(&path, &text),
            WritePolicy::Overwrite => overwrite(&path, &text),
        })
        .await
        .map_err(|_| CoreError::Storage("io"))?
    }

    async fn load(&self) -> Result<String, CoreError> {
        let path = self.path.clone();
        task::spawn_blocking(move || read_lines(&path))
            .await
            .map_err(|_| CoreError::Storage("io"))?
    }

    async fn share(&self) -> Result<(), CoreError> {
        Err(CoreError::Unsupported("share"))
    }

    async fn info(&self) -> Result<NoteInfo, CoreError> {
        let path = self.path.clone();
        task::spawn_blocking(move || stat(&path))
            .await
            .map_err(|_| CoreError::Storage("io"))?
    }
}

fn io_err(path: &Path, what: &'static str, e: std::io::Error) -> CoreError {
    log::warn!("{what} {}: {e}", path.display());
    CoreError::Storage("io")
}

fn ensure_parent_dirs(path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_err(parent, "create", e))?;
    }
    Ok(())
}

fn append_line(path: &Path, text: &str) -> Result<(), CoreError> {
    ensure_parent_dirs(path)?;
    log::debug!("appending to {}", path.display());
    let mut f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_err(path, "open", e))?;
    writeln!(f, "{text}").map_err(|e| io_err(path, "write", e))
}

fn overwrite(path: &Path, text: &str) -> Result<(), CoreError> {
    // Empty buffer: no write, prior content stays
    if text.is_empty() {
        return Ok(());
    }
    ensure_parent_dirs(path)?;
    log::debug!("writing {}", path.display());

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let result = (|| -> std::io::Result<()> {
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.flush()?;
        let _ = fs::remove_file(path);
        tmp.persist(path)?;
        Ok(())
    })();
    result.map_err(|e| io_err(path, "write", e))
}

fn read_lines(path: &Path) -> Result<String, CoreError> {
    let f = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("no note at {}", path.display());
            return Err(CoreError::NotFound("note"));
        }
        Err(e) => return Err(io_err(path, "open", e)),
    };
    let mut text = String::new();
    for line in BufReader::new(f).lines() {
        let line = line.map_err(|e| io_err(path, "read", e))?;
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}

fn stat(path: &Path) -> Result<NoteInfo, CoreError> {
    match fs::metadata(path) {
        Ok(meta) => Ok(NoteInfo {
            location: Some(path.to_path_buf()),
            exists: true,
            bytes: meta.len(),
            modified_at: meta.modified().ok().map(DateTime::<Utc>::from),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(NoteInfo {
            location: Some(path.to_path_buf()),
            exists: false,
            bytes: 0,
            modified_at: None,
        }),
        Err(e) => Err(io_err(path, "stat", e)),
    }
}
