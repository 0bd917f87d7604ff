//! Free-form notes, code snippets and the focus-session log.

use super::{impl_identified, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display colour token chosen by the presentation layer.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub color: String,
}

impl Note {
    /// Matches either a tag or the category, as the notes filter does.
    pub fn matches_label(&self, label: &str) -> bool {
        self.category == label || self.tags.iter().any(|tag| tag == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub id: EntityId,
    pub title: String,
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCodeSnippet {
    pub title: String,
    pub language: String,
    pub code: String,
    pub tags: Vec<String>,
}

/// One finished focus block. Written once, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSession {
    pub id: EntityId,
    /// Unix epoch milliseconds.
    pub start_time: i64,
    /// Minutes.
    pub duration: u32,
    pub goal: String,
    pub completed: bool,
}

impl_identified!(Note, CodeSnippet, FocusSession);
