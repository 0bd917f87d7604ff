//! Folder tree and the link/snippet files filed inside it.

use super::{impl_identified, EntityId, ModelError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Folder node. `parent_id = None` means root level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: EntityId,
    pub name: String,
    pub parent_id: Option<EntityId>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Link,
    Snippet,
}

impl FromStr for FileKind {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "link" => Ok(Self::Link),
            "snippet" => Ok(Self::Snippet),
            _ => Err(ModelError::UnknownVariant {
                field: "file type",
                value: value.to_string(),
            }),
        }
    }
}

/// A saved link or text snippet. `folder_id = None` means root level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResource {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub content: String,
    pub folder_id: Option<EntityId>,
    #[serde(default)]
    pub created_at: String,
}

impl_identified!(Folder, FileResource);
