//! In-memory key/value store with an optional byte quota.

use super::{KvError, KvResult, KvStore};
use std::collections::BTreeMap;

/// Volatile key/value store.
///
/// A quota, when set, caps the sum of key and value lengths in bytes the
/// way browser local storage caps an origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes past `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .map(|(existing, value)| existing.len() + value.len())
            .sum()
    }
}

impl KvStore for MemoryKvStore {
    fn get_item(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> KvResult<()> {
        if let Some(limit) = self.quota_bytes {
            let required = self.used_bytes_excluding(key) + key.len() + value.len();
            if required > limit {
                return Err(KvError::QuotaExceeded {
                    key: key.to_string(),
                    required_bytes: required,
                    limit_bytes: limit,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> KvResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn clear(&mut self) -> KvResult<()> {
        self.entries.clear();
        Ok(())
    }
}
