use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use eduquiz_core::model::Session;

/// Errors surfaced by session storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// The single persisted piece of client state: the authenticated
/// teacher's session, stored under one logical key.
///
/// `load` is fail-safe by contract: a payload that does not parse, or
/// parses but is missing any of name/email/qualification, must be
/// cleared and reported as `Ok(None)` so the routing guard lands in the
/// anonymous state.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the stored session, if a well-formed one exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for storage-level failures; malformed
    /// payloads are cleared and reported as absent.
    async fn load(&self) -> Result<Option<Session>, StorageError>;

    /// Persist the session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session cannot be stored.
    async fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Remove the stored session. A no-op when none exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// Decode a persisted payload, rejecting sessions with missing fields.
pub(crate) fn decode_session(raw: &str) -> Option<Session> {
    let session: Session = serde_json::from_str(raw).ok()?;
    session.is_well_formed().then_some(session)
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    raw: Arc<Mutex<Option<String>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an arbitrary raw payload, valid or not.
    #[must_use]
    pub fn with_raw_payload(raw: impl Into<String>) -> Self {
        Self {
            raw: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// The raw payload currently held, if any.
    #[must_use]
    pub fn raw_payload(&self) -> Option<String> {
        self.raw.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        let mut guard = self
            .raw
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let Some(raw) = guard.as_deref() else {
            return Ok(None);
        };
        match decode_session(raw) {
            Some(session) => Ok(Some(session)),
            None => {
                *guard = None;
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        let payload = serde_json::to_string(session)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let mut guard = self
            .raw
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(payload);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .raw
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}
