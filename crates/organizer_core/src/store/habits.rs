//! Habit mutations.

use super::{find, find_mut, remove_by_id, Collection, OrganizerStore};
use crate::clock::Clock;
use crate::kv::KvStore;
use crate::model::habit::{Habit, HabitCategory, HabitFrequency};
use crate::model::new_entity_id;

impl<K: KvStore, C: Clock> OrganizerStore<K, C> {
    pub fn habit(&self, id: &str) -> Option<&Habit> {
        find(&self.data.habits, id)
    }

    /// Resolves `chain_after` by name. Dangling names resolve to `None`.
    pub fn chained_after(&self, habit: &Habit) -> Option<&Habit> {
        let name = habit.chain_after.as_deref()?;
        self.data.habits.iter().find(|other| other.name == name)
    }

    pub fn add_habit(
        &mut self,
        name: impl Into<String>,
        category: HabitCategory,
        frequency: HabitFrequency,
        reminder_time: Option<String>,
        chain_after: Option<String>,
    ) -> Habit {
        let habit = Habit {
            id: new_entity_id(),
            name: name.into(),
            category,
            streak: 0,
            completed_dates: Vec::new(),
            frequency,
            reminder_time: reminder_time.filter(|time| !time.is_empty()),
            chain_after: chain_after
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
        };
        self.data.habits.push(habit.clone());
        self.persist(Collection::Habits);
        habit
    }

    pub fn delete_habit(&mut self, id: &str) -> bool {
        let removed = remove_by_id(&mut self.data.habits, id);
        self.commit(Collection::Habits, removed)
    }

    /// Checks or unchecks today's local date and recomputes the streak.
    ///
    /// The streak is the total number of check-ins while today is checked
    /// and 0 otherwise; it is not a consecutive-day count.
    pub fn toggle_habit_for_today(&mut self, id: &str) -> bool {
        let today = self.clock.today_string();
        let changed = match find_mut(&mut self.data.habits, id) {
            Some(habit) => {
                habit.toggle_date(&today);
                true
            }
            None => false,
        };
        self.commit(Collection::Habits, changed)
    }
}
