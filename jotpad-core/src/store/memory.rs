use crate::{CoreError, NoteInfo, Store, WritePolicy};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

#[derive(Default)]
struct State {
    text: String,
    modified_at: Option<DateTime<Utc>>,
}

/// In-memory store, mainly a test double for code written against `Store`.
pub struct MemoryStore {
    policy: WritePolicy,
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new(policy: WritePolicy) -> Self {
        Self {
            policy,
            state: RwLock::new(State::default()),
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn save(&self, text: &str) -> Result<(), CoreError> {
        let mut s = self.state.write();
        match self.policy {
            WritePolicy::Append => {
                s.text.push_str(text);
                s.text.push('\n');
            }
            WritePolicy::Overwrite => {
                if text.is_empty() {
                    return Ok(());
                }
                s.text = text.to_string();
            }
        }
        s.modified_at = Some(Utc::now());
        Ok(())
    }

    async fn load(&self) -> Result<String, CoreError> {
        let s = self.state.read();
        if s.modified_at.is_none() {
            return Err(CoreError::NotFound("note"));
        }
        let mut out = String::with_capacity(s.text.len() + 1);
        for line in s.text.lines() {
            out.push_str(line);
            out.push('\n');
        }
        Ok(out)
    }

    async fn share(&self) -> Result<(), CoreError> {
        Err(CoreError::Unsupported("share"))
    }

    async fn info(&self) -> Result<NoteInfo, CoreError> {
        let s = self.state.read();
        Ok(NoteInfo {
            location: None,
            exists: s.modified_at.is_some(),
            bytes: s.text.len() as u64,
            modified_at: s.modified_at,
        })
    }
}
