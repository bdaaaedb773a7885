//! Session persistence: the in-progress resume, how it was started and the
//! wizard step, stored as one JSON blob under a single key.
//!
//! Backends are pluggable behind `SessionStore`; `AppState` carries an
//! `Arc<dyn SessionStore>` (Redis when configured, in-process otherwise).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::models::resume::ResumeData;

pub const SESSION_KEY: &str = "resumeBuilderData";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("redis: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartMethod {
    Scratch,
    Upload,
    Prompt,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSession {
    #[serde(default)]
    pub resume_data: ResumeData,
    #[serde(default)]
    pub start_method: Option<StartMethod>,
    #[serde(default)]
    pub current_step: u32,
    #[serde(default)]
    pub last_saved: Option<DateTime<Utc>>,
}

impl SavedSession {
    /// Decodes a stored blob; anything unreadable becomes the empty session.
    pub fn from_stored(raw: Option<&str>) -> SavedSession {
        let Some(raw) = raw else {
            return SavedSession::default();
        };
        match serde_json::from_str(raw) {
            Ok(session) => session,
            Err(e) => {
                warn!("Discarding corrupt saved session: {e}");
                SavedSession::default()
            }
        }
    }

    /// Stamps `last_saved` with the current time.
    pub fn touched(mut self) -> SavedSession {
        self.last_saved = Some(Utc::now());
        self
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Result<SavedSession, StorageError>;

    /// Replaces the stored session wholesale and returns what was written.
    async fn save(&self, session: SavedSession) -> Result<SavedSession, StorageError>;

    async fn clear(&self) -> Result<(), StorageError>;
}

// ────────────────────────────────────────────────────────────────────────────
// RedisSessionStore
// ────────────────────────────────────────────────────────────────────────────

pub struct RedisSessionStore {
    client: redis::Client,
}

impl RedisSessionStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self) -> Result<SavedSession, StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(SESSION_KEY).await?;
        Ok(SavedSession::from_stored(raw.as_deref()))
    }

    async fn save(&self, session: SavedSession) -> Result<SavedSession, StorageError> {
        let session = session.touched();
        let payload = serde_json::to_string(&session)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(SESSION_KEY, payload).await?;
        debug!("Session saved to redis (step {})", session.current_step);
        Ok(session)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del::<_, ()>(SESSION_KEY).await?;
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MemorySessionStore
// ────────────────────────────────────────────────────────────────────────────

/// Keeps the serialized blob in process memory. Used when no Redis URL is set.
#[derive(Default)]
pub struct MemorySessionStore {
    blob: RwLock<Option<String>>,
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<SavedSession, StorageError> {
        let blob = self.blob.read().await;
        Ok(SavedSession::from_stored(blob.as_deref()))
    }

    async fn save(&self, session: SavedSession) -> Result<SavedSession, StorageError> {
        let session = session.touched();
        let payload = serde_json::to_string(&session)?;
        *self.blob.write().await = Some(payload);
        debug!("Session saved in memory (step {})", session.current_step);
        Ok(session)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.blob.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, PersonalInfo, Skills};

    fn populated() -> SavedSession {
        SavedSession {
            resume_data: ResumeData {
                personal_info: PersonalInfo {
                    full_name: "Grace Hopper".to_string(),
                    email: "grace@navy.mil".to_string(),
                    ..Default::default()
                },
                experience: vec![Experience {
                    company: "US Navy".to_string(),
                    role: "Rear Admiral".to_string(),
                    duration: "43 years".to_string(),
                    description: "COBOL".to_string(),
                }],
                skills: Skills {
                    technical: vec!["COBOL".to_string()],
                    soft: vec!["Teaching".to_string()],
                },
                ..Default::default()
            },
            start_method: Some(StartMethod::Scratch),
            current_step: 3,
            last_saved: None,
        }
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = MemorySessionStore::default();
        let saved = store.save(populated()).await.unwrap();
        assert!(saved.last_saved.is_some());

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.resume_data, populated().resume_data);
    }

    #[tokio::test]
    async fn test_empty_store_loads_default() {
        let store = MemorySessionStore::default();
        assert_eq!(store.load().await.unwrap(), SavedSession::default());
    }

    #[tokio::test]
    async fn test_clear_resets_to_default() {
        let store = MemorySessionStore::default();
        store.save(populated()).await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap().current_step, 0);
    }

    #[test]
    fn test_corrupt_blob_loads_default() {
        assert_eq!(
            SavedSession::from_stored(Some("{not json")),
            SavedSession::default()
        );
    }

    #[test]
    fn test_wire_shape_uses_camel_case_and_null_start_method() {
        let value = serde_json::to_value(SavedSession::default()).unwrap();
        assert!(value.get("resumeData").is_some());
        assert!(value["startMethod"].is_null());
        assert_eq!(value["currentStep"], 0);

        let parsed: SavedSession =
            serde_json::from_str(r#"{"startMethod": "upload", "currentStep": 2}"#).unwrap();
        assert_eq!(parsed.start_method, Some(StartMethod::Upload));
    }
}
