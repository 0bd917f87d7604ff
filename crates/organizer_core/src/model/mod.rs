//! Domain records persisted by the organizer store.
//!
//! # Responsibility
//! - Define one record type per persisted collection.
//! - Keep the serialized shape (camelCase JSON) compatible with existing
//!   exported data.
//!
//! # Invariants
//! - Every record carries a non-empty string `id` assigned at creation.
//! - Range-restricted fields (`Priority`, `Quadrant`) cannot hold
//!   out-of-range values, including after deserialization.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod academics;
pub mod content;
pub mod files;
pub mod habit;
pub mod planning;
pub mod task;

static LIST_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*").expect("valid list separator regex"));

/// Identifier shared by every record.
///
/// Kept as a string: imported data may carry ids from other generators.
pub type EntityId = String;

/// Generates a fresh record identifier.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4().to_string()
}

/// Records addressable by id.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::model::Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}
pub(crate) use impl_identified;

/// Splits comma-separated user input (`"rust, sql ,,go"`) into trimmed,
/// non-empty entries.
pub fn split_list(input: &str) -> Vec<String> {
    LIST_SEPARATOR_RE
        .split(input.trim())
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rejected value for a range-restricted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    PriorityOutOfRange(u8),
    QuadrantOutOfRange(u8),
    UnknownVariant {
        field: &'static str,
        value: String,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PriorityOutOfRange(value) => {
                write!(f, "priority must be within 1..=5, got {value}")
            }
            Self::QuadrantOutOfRange(value) => {
                write!(f, "quadrant must be within 1..=4, got {value}")
            }
            Self::UnknownVariant { field, value } => {
                write!(f, "unknown {field} value `{value}`")
            }
        }
    }
}

impl Error for ModelError {}
