//! Side projects and measurable goals.

use super::{impl_identified, EntityId, ModelError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Idea,
    Planning,
    Development,
    Testing,
    Done,
}

impl ProjectStatus {
    pub const ALL: [Self; 5] = [
        Self::Idea,
        Self::Planning,
        Self::Development,
        Self::Testing,
        Self::Done,
    ];
}

impl FromStr for ProjectStatus {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| format!("{status:?}").eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ModelError::UnknownVariant {
                field: "project status",
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub status: ProjectStatus,
    pub tech_stack: Vec<String>,
    pub deadline: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalCategory {
    Academic,
    Skill,
    Project,
    Personal,
}

impl FromStr for GoalCategory {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "academic" => Ok(Self::Academic),
            "skill" => Ok(Self::Skill),
            "project" => Ok(Self::Project),
            "personal" => Ok(Self::Personal),
            _ => Err(ModelError::UnknownVariant {
                field: "goal category",
                value: value.to_string(),
            }),
        }
    }
}

/// Numeric target with free-running progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: EntityId,
    pub title: String,
    pub target: f64,
    /// Not clamped; may exceed `target`.
    pub current: f64,
    pub unit: String,
    #[serde(default)]
    pub deadline: String,
    pub category: GoalCategory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub title: String,
    pub target: f64,
    pub unit: String,
    pub deadline: String,
    pub category: GoalCategory,
}

impl_identified!(Project, Goal);
