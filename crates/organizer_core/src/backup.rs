//! Whole-app export, import and wipe over the backing store.
//!
//! # Responsibility
//! - Produce one JSON object holding every organizer key's raw value.
//! - Restore such an object key by key.
//!
//! # Invariants
//! - Import validates the payload shape before the first write.
//! - Only string-valued entries are written; everything else is skipped.

use crate::kv::{KvError, KvResult, KvStore};
use crate::prefs::PREFERENCE_KEYS;
use crate::store::Collection;
use log::{error, info, warn};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum BackupError {
    /// Payload is not a JSON object. Nothing was written.
    InvalidPayload(String),
    /// Backing store failed mid-operation.
    Kv(KvError),
    Serialize(serde_json::Error),
}

impl Display for BackupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPayload(details) => write!(f, "invalid backup payload: {details}"),
            Self::Kv(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize backup: {err}"),
        }
    }
}

impl Error for BackupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPayload(_) => None,
            Self::Kv(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<KvError> for BackupError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

/// Counts from one import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Every key included in an export: collections first, then preferences.
pub fn exported_keys() -> impl Iterator<Item = &'static str> {
    Collection::ALL
        .into_iter()
        .map(Collection::storage_key)
        .chain(PREFERENCE_KEYS)
}

/// Serializes every organizer key to a pretty-printed JSON object.
///
/// Absent keys are exported as `null`.
pub fn export_snapshot<K: KvStore>(backend: &K) -> Result<String, BackupError> {
    let mut snapshot = Map::new();
    for key in exported_keys() {
        let value = backend.get_item(key)?.map_or(Value::Null, Value::String);
        snapshot.insert(key.to_string(), value);
    }
    let json = serde_json::to_string_pretty(&Value::Object(snapshot))
        .map_err(BackupError::Serialize)?;
    info!(
        "event=backup_export module=backup status=ok bytes={}",
        json.len()
    );
    Ok(json)
}

/// Writes each string-valued entry of an exported object.
///
/// Entries are not type-checked beyond being strings; a malformed
/// collection value surfaces on the next load as an empty collection.
pub fn import_snapshot<K: KvStore>(
    backend: &mut K,
    payload: &str,
) -> Result<ImportSummary, BackupError> {
    let parsed: Value = serde_json::from_str(payload.trim()).map_err(|err| {
        warn!("event=backup_import module=backup status=rejected error_code=invalid_json error={err}");
        BackupError::InvalidPayload(err.to_string())
    })?;
    let Value::Object(entries) = parsed else {
        warn!("event=backup_import module=backup status=rejected error_code=not_an_object");
        return Err(BackupError::InvalidPayload(
            "expected a JSON object of key/value strings".to_string(),
        ));
    };

    let mut summary = ImportSummary::default();
    for (key, value) in &entries {
        match value {
            Value::String(raw) => {
                backend.set_item(key, raw).map_err(|err| {
                    error!(
                        "event=backup_import module=backup status=error key={key} error_code=write_failed error={err}"
                    );
                    err
                })?;
                summary.written += 1;
            }
            _ => summary.skipped += 1,
        }
    }

    info!(
        "event=backup_import module=backup status=ok written={} skipped={}",
        summary.written, summary.skipped
    );
    Ok(summary)
}

/// Deletes every key in the backing store and returns how many there were.
pub fn clear_all<K: KvStore>(backend: &mut K) -> KvResult<usize> {
    let removed = backend.keys()?.len();
    backend.clear()?;
    warn!("event=backup_clear module=backup status=ok removed_keys={removed}");
    Ok(removed)
}
