//! Tasks, subtasks and their Eisenhower-matrix placement.

use super::{impl_identified, EntityId, ModelError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Task priority, 1 (lowest) to 5 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const DEFAULT: Self = Self(3);

    pub fn new(value: u8) -> Result<Self, ModelError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::PriorityOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Priority {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(value: Priority) -> Self {
        value.0
    }
}

/// Eisenhower-matrix quadrant.
///
/// 1 = urgent & important, 2 = important, 3 = urgent, 4 = neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quadrant(u8);

impl Quadrant {
    pub const DO_FIRST: Self = Self(1);
    pub const SCHEDULE: Self = Self(2);
    pub const DELEGATE: Self = Self(3);
    pub const ELIMINATE: Self = Self(4);
    pub const ALL: [Self; 4] = [
        Self::DO_FIRST,
        Self::SCHEDULE,
        Self::DELEGATE,
        Self::ELIMINATE,
    ];

    pub fn new(value: u8) -> Result<Self, ModelError> {
        if (1..=4).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::QuadrantOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quadrant> for u8 {
    fn from(value: Quadrant) -> Self {
        value.0
    }
}

impl FromStr for Quadrant {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed = value.trim().parse::<u8>().map_err(|_| ModelError::UnknownVariant {
            field: "quadrant",
            value: value.to_string(),
        })?;
        Self::new(parsed)
    }
}

/// Checklist item owned by one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: EntityId,
    pub title: String,
    pub completed: bool,
}

/// Actionable to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    pub priority: Priority,
    pub quadrant: Quadrant,
    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Free-form label such as `weekly`. Stored only; never expanded into
    /// future dates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<Subtask>>,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,
    /// RFC 3339 timestamp.
    #[serde(default)]
    pub created_at: String,
}

impl Task {
    /// Whether completing this task should spawn the next occurrence.
    pub fn is_recurring(&self) -> bool {
        self.recurrence
            .as_deref()
            .is_some_and(|label| !label.trim().is_empty())
    }

    /// Returns `(completed, total)` subtask counts.
    pub fn subtask_progress(&self) -> (usize, usize) {
        let subtasks = self.subtasks.as_deref().unwrap_or_default();
        let done = subtasks.iter().filter(|sub| sub.completed).count();
        (done, subtasks.len())
    }
}

impl_identified!(Task, Subtask);
