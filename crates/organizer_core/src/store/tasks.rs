//! Task and subtask mutations.

use super::{find, find_mut, remove_by_id, Collection, OrganizerStore};
use crate::clock::Clock;
use crate::kv::KvStore;
use crate::model::new_entity_id;
use crate::model::task::{Priority, Quadrant, Subtask, Task};

impl<K: KvStore, C: Clock> OrganizerStore<K, C> {
    pub fn task(&self, id: &str) -> Option<&Task> {
        find(&self.data.tasks, id)
    }

    /// Creates an incomplete task at the front of the list.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        quadrant: Quadrant,
        priority: Priority,
        due_date: Option<String>,
    ) -> Task {
        let task = Task {
            id: new_entity_id(),
            title: title.into(),
            description: None,
            completed: false,
            priority,
            quadrant,
            due_date: due_date.filter(|date| !date.is_empty()),
            tags: None,
            recurrence: None,
            subtasks: None,
            time_estimate: None,
            attachments: None,
            created_at: self.clock.timestamp(),
        };
        self.data.tasks.insert(0, task.clone());
        self.persist(Collection::Tasks);
        task
    }

    /// Sets or clears the recurrence label of a task.
    pub fn set_task_recurrence(&mut self, id: &str, recurrence: Option<String>) -> bool {
        let changed = match find_mut(&mut self.data.tasks, id) {
            Some(task) => {
                task.recurrence = recurrence.filter(|label| !label.trim().is_empty());
                true
            }
            None => false,
        };
        self.commit(Collection::Tasks, changed)
    }

    /// Flips completion.
    ///
    /// Completing a recurring task also appends a fresh incomplete copy with
    /// a new id and creation time. The copy keeps the original due date.
    pub fn toggle_task(&mut self, id: &str) -> bool {
        let created_at = self.clock.timestamp();
        let Some(task) = find_mut(&mut self.data.tasks, id) else {
            return false;
        };

        let next_occurrence = if !task.completed && task.is_recurring() {
            Some(Task {
                id: new_entity_id(),
                completed: false,
                created_at,
                ..task.clone()
            })
        } else {
            None
        };
        task.completed = !task.completed;

        if let Some(next) = next_occurrence {
            self.data.tasks.push(next);
        }
        self.commit(Collection::Tasks, true)
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        let removed = remove_by_id(&mut self.data.tasks, id);
        self.commit(Collection::Tasks, removed)
    }

    pub fn update_task_quadrant(&mut self, id: &str, quadrant: Quadrant) -> bool {
        let changed = match find_mut(&mut self.data.tasks, id) {
            Some(task) => {
                task.quadrant = quadrant;
                true
            }
            None => false,
        };
        self.commit(Collection::Tasks, changed)
    }

    /// Appends an incomplete subtask. Returns `None` when the task is unknown.
    pub fn add_subtask(&mut self, task_id: &str, title: impl Into<String>) -> Option<Subtask> {
        let task = find_mut(&mut self.data.tasks, task_id)?;
        let subtask = Subtask {
            id: new_entity_id(),
            title: title.into(),
            completed: false,
        };
        task.subtasks
            .get_or_insert_with(Vec::new)
            .push(subtask.clone());
        self.persist(Collection::Tasks);
        Some(subtask)
    }

    pub fn toggle_subtask(&mut self, task_id: &str, subtask_id: &str) -> bool {
        let subtask = find_mut(&mut self.data.tasks, task_id)
            .and_then(|task| task.subtasks.as_mut())
            .and_then(|subtasks| find_mut(subtasks, subtask_id));
        let changed = match subtask {
            Some(subtask) => {
                subtask.completed = !subtask.completed;
                true
            }
            None => false,
        };
        self.commit(Collection::Tasks, changed)
    }

    pub fn delete_subtask(&mut self, task_id: &str, subtask_id: &str) -> bool {
        let changed = find_mut(&mut self.data.tasks, task_id)
            .and_then(|task| task.subtasks.as_mut())
            .is_some_and(|subtasks| remove_by_id(subtasks, subtask_id));
        self.commit(Collection::Tasks, changed)
    }
}
