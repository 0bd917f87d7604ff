//! Scalar preferences stored next to the collections.
//!
//! # Invariants
//! - Preference writes go straight to the backing store; they are not gated
//!   by the store lifecycle.
//! - Unrecognized stored values read back as the default.

use crate::kv::{KvResult, KvStore};
use crate::model::ModelError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const LAST_VIEW_KEY: &str = "cs-organizer-last-view";
pub const USERNAME_KEY: &str = "cs-organizer-username";
pub const THEME_KEY: &str = "theme";

/// Every preference key, in export order.
pub const PREFERENCE_KEYS: [&str; 3] = [USERNAME_KEY, THEME_KEY, LAST_VIEW_KEY];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ModelError::UnknownVariant {
                field: "theme",
                value: other.to_string(),
            }),
        }
    }
}

/// App section last shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    Courses,
    Assignments,
    Exams,
    Grades,
    Focus,
    Tasks,
    Habits,
    Matrix,
    Files,
    Notes,
    Code,
    Projects,
    Calendar,
    Goals,
    Analytics,
    Settings,
    Help,
}

impl View {
    pub const ALL: [Self; 18] = [
        Self::Dashboard,
        Self::Courses,
        Self::Assignments,
        Self::Exams,
        Self::Grades,
        Self::Focus,
        Self::Tasks,
        Self::Habits,
        Self::Matrix,
        Self::Files,
        Self::Notes,
        Self::Code,
        Self::Projects,
        Self::Calendar,
        Self::Goals,
        Self::Analytics,
        Self::Settings,
        Self::Help,
    ];

    /// Stored form, e.g. `DASHBOARD`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "DASHBOARD",
            Self::Courses => "COURSES",
            Self::Assignments => "ASSIGNMENTS",
            Self::Exams => "EXAMS",
            Self::Grades => "GRADES",
            Self::Focus => "FOCUS",
            Self::Tasks => "TASKS",
            Self::Habits => "HABITS",
            Self::Matrix => "MATRIX",
            Self::Files => "FILES",
            Self::Notes => "NOTES",
            Self::Code => "CODE",
            Self::Projects => "PROJECTS",
            Self::Calendar => "CALENDAR",
            Self::Goals => "GOALS",
            Self::Analytics => "ANALYTICS",
            Self::Settings => "SETTINGS",
            Self::Help => "HELP",
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownVariant {
                field: "view",
                value: value.to_string(),
            })
    }
}

/// Read/write access to preference keys.
pub struct Preferences<'a, K: KvStore> {
    backend: &'a mut K,
}

impl<'a, K: KvStore> Preferences<'a, K> {
    pub fn new(backend: &'a mut K) -> Self {
        Self { backend }
    }

    pub fn theme(&self) -> KvResult<Theme> {
        Ok(self
            .backend
            .get_item(THEME_KEY)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default())
    }

    pub fn set_theme(&mut self, theme: Theme) -> KvResult<()> {
        self.backend.set_item(THEME_KEY, theme.as_str())
    }

    /// Switches light/dark and returns the new theme.
    pub fn toggle_theme(&mut self) -> KvResult<Theme> {
        let next = self.theme()?.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn username(&self) -> KvResult<Option<String>> {
        Ok(self
            .backend
            .get_item(USERNAME_KEY)?
            .filter(|name| !name.trim().is_empty()))
    }

    /// Saves a trimmed display name. Blank input is ignored and returns `false`.
    pub fn set_username(&mut self, name: &str) -> KvResult<bool> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        self.backend.set_item(USERNAME_KEY, trimmed)?;
        Ok(true)
    }

    pub fn last_view(&self) -> KvResult<View> {
        Ok(self
            .backend
            .get_item(LAST_VIEW_KEY)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default())
    }

    pub fn set_last_view(&mut self, view: View) -> KvResult<()> {
        self.backend.set_item(LAST_VIEW_KEY, view.as_str())
    }
}
