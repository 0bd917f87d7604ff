//! Habits tracked by daily check-ins.

use super::{impl_identified, EntityId, ModelError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HabitCategory {
    Academic,
    Health,
    Productivity,
}

impl HabitCategory {
    pub const ALL: [Self; 3] = [Self::Academic, Self::Health, Self::Productivity];
}

impl FromStr for HabitCategory {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "academic" => Ok(Self::Academic),
            "health" => Ok(Self::Health),
            "productivity" => Ok(Self::Productivity),
            _ => Err(ModelError::UnknownVariant {
                field: "habit category",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitFrequency {
    #[default]
    Daily,
    Weekly,
}

impl FromStr for HabitFrequency {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            _ => Err(ModelError::UnknownVariant {
                field: "habit frequency",
                value: value.to_string(),
            }),
        }
    }
}

/// A recurring behaviour with its check-in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: EntityId,
    pub name: String,
    pub category: HabitCategory,
    /// Total check-ins while today is checked, otherwise 0.
    pub streak: u32,
    /// `YYYY-MM-DD` entries, in check-in order.
    pub completed_dates: Vec<String>,
    pub frequency: HabitFrequency,
    /// `HH:mm`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
    /// Name of the habit this one follows. Not validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_after: Option<String>,
}

impl Habit {
    pub fn is_done_on(&self, date: &str) -> bool {
        self.completed_dates.iter().any(|done| done == date)
    }

    /// Adds `date` if absent, removes it if present, then recomputes the
    /// streak relative to `date`.
    pub fn toggle_date(&mut self, date: &str) {
        if self.is_done_on(date) {
            self.completed_dates.retain(|done| done != date);
        } else {
            self.completed_dates.push(date.to_string());
        }

        self.streak = if self.is_done_on(date) {
            u32::try_from(self.completed_dates.len()).unwrap_or(u32::MAX)
        } else {
            0
        };
    }
}

impl_identified!(Habit);

#[cfg(test)]
mod tests {
    use super::{Habit, HabitCategory, HabitFrequency};

    fn habit() -> Habit {
        Habit {
            id: "h1".to_string(),
            name: "Read".to_string(),
            category: HabitCategory::Academic,
            streak: 0,
            completed_dates: vec!["2024-03-01".to_string(), "2024-03-02".to_string()],
            frequency: HabitFrequency::Daily,
            reminder_time: None,
            chain_after: None,
        }
    }

    #[test]
    fn streak_counts_all_check_ins_when_today_is_checked() {
        let mut habit = habit();
        habit.toggle_date("2024-03-10");
        assert_eq!(habit.streak, 3);

        habit.toggle_date("2024-03-10");
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.completed_dates.len(), 2);
    }

    #[test]
    fn frequency_serializes_lowercase() {
        let json = serde_json::to_string(&habit()).unwrap();
        assert!(json.contains("\"frequency\":\"daily\""));
        assert!(json.contains("\"completedDates\""));
    }
}
