//! Persistent key-value backing store.
//!
//! # Responsibility
//! - Define the string-keyed, string-valued storage contract the organizer
//!   store writes its collections through.
//! - Host the SQLite and in-memory implementations.
//!
//! # Invariants
//! - `set_item` replaces any previous value for the key.
//! - `keys` returns keys in ascending order.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

pub type KvResult<T> = Result<T, KvError>;

/// Errors from backing-store reads and writes.
#[derive(Debug)]
pub enum KvError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// The write would exceed the configured storage capacity.
    QuotaExceeded {
        key: String,
        required_bytes: usize,
        limit_bytes: usize,
    },
    /// Connection is missing the key/value table.
    MissingTable(&'static str),
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::QuotaExceeded {
                key,
                required_bytes,
                limit_bytes,
            } => write!(
                f,
                "storage quota exceeded writing `{key}`: {required_bytes} bytes needed, limit {limit_bytes}"
            ),
            Self::MissingTable(table) => write!(f, "backing store requires table `{table}`"),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::QuotaExceeded { .. } | Self::MissingTable(_) => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String key/value storage with local-storage semantics.
pub trait KvStore {
    /// Returns the stored value, or `None` when the key is absent.
    fn get_item(&self, key: &str) -> KvResult<Option<String>>;
    /// Inserts or replaces the value for `key`.
    fn set_item(&mut self, key: &str, value: &str) -> KvResult<()>;
    /// Lists every stored key.
    fn keys(&self) -> KvResult<Vec<String>>;
    /// Removes every stored key.
    fn clear(&mut self) -> KvResult<()>;
}
