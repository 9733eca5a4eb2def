#![forbid(unsafe_code)]

pub mod session_store;
pub mod sqlite;

pub use session_store::{InMemorySessionStore, SessionStore, StorageError};
pub use sqlite::{SqliteInitError, SqliteSessionStore};
