use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool, sqlite::SqlitePoolOptions};
use thiserror::Error;

use eduquiz_core::model::Session;

use crate::session_store::{SessionStore, StorageError, decode_session};

mod migrate;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SqliteInitError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// `SQLite`-backed session store.
///
/// Stands in for browser-local storage: one fixed-id row holding the
/// serialized session object, nothing else.
#[derive(Clone)]
pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    /// Connect to `SQLite` using the given URL and run migrations.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the connection cannot be established
    /// or migrations fail.
    pub async fn connect(database_url: &str) -> Result<Self, SqliteInitError> {
        // The session has exactly one writer at a time; a single
        // connection also keeps `sqlite::memory:` coherent under test.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .after_connect(|conn, _meta| {
                Box::pin(async move {
                    sqlx::query("PRAGMA journal_mode = WAL;")
                        .execute(&mut *conn)
                        .await?;
                    sqlx::query("PRAGMA busy_timeout = 5000;")
                        .execute(&mut *conn)
                        .await?;
                    Ok(())
                })
            })
            .connect(database_url)
            .await?;
        migrate::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        let row = sqlx::query("SELECT payload FROM session WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let payload: String = row
            .try_get("payload")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        match decode_session(&payload) {
            Some(session) => Ok(Some(session)),
            None => {
                // Fail safe: a malformed payload means no session.
                self.clear().await?;
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        let payload = serde_json::to_string(session)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO session (id, payload, saved_at)
            VALUES (1, ?1, ?2)
            ON CONFLICT(id) DO UPDATE SET
                payload = excluded.payload,
                saved_at = excluded.saved_at
            ",
        )
        .bind(payload)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM session WHERE id = 1")
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduquiz_core::model::Teacher;
    use eduquiz_core::time::fixed_now;

    fn session() -> Session {
        Session::from_teacher(
            Teacher {
                name: "A".into(),
                email: "a@x.com".into(),
                qualification: "MSc".into(),
            },
            fixed_now(),
        )
        .unwrap()
    }

    #[test]
    fn store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteSessionStore>();
    }

    #[tokio::test]
    async fn round_trips_session() {
        let store = SqliteSessionStore::connect("sqlite::memory:").await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        store.save(&session()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(session()));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_replaces_previous_session() {
        let store = SqliteSessionStore::connect("sqlite::memory:").await.unwrap();
        store.save(&session()).await.unwrap();

        let replacement = Session::from_teacher(
            Teacher {
                name: "B".into(),
                email: "b@x.com".into(),
                qualification: "B.Ed".into(),
            },
            fixed_now(),
        )
        .unwrap();
        store.save(&replacement).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn malformed_row_is_cleared_on_load() {
        let store = SqliteSessionStore::connect("sqlite::memory:").await.unwrap();
        sqlx::query("INSERT INTO session (id, payload, saved_at) VALUES (1, ?1, ?2)")
            .bind(r#"{"name":"A","email":"a@x.com"}"#)
            .bind(Utc::now().to_rfc3339())
            .execute(store.pool())
            .await
            .unwrap();

        assert!(store.load().await.unwrap().is_none());

        let rows = sqlx::query("SELECT id FROM session")
            .fetch_all(store.pool())
            .await
            .unwrap();
        assert!(rows.is_empty());
    }
}
