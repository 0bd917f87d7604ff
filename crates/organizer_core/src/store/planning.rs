//! Project and goal mutations.

use super::{find_mut, remove_by_id, Collection, OrganizerStore};
use crate::clock::Clock;
use crate::kv::KvStore;
use crate::model::new_entity_id;
use crate::model::planning::{Goal, NewGoal, NewProject, Project, ProjectStatus};

impl<K: KvStore, C: Clock> OrganizerStore<K, C> {
    pub fn add_project(&mut self, new_project: NewProject) -> Project {
        let project = Project {
            id: new_entity_id(),
            name: new_project.name,
            status: new_project.status,
            tech_stack: new_project.tech_stack,
            deadline: new_project.deadline.filter(|date| !date.is_empty()),
            description: new_project.description,
        };
        self.data.projects.push(project.clone());
        self.persist(Collection::Projects);
        project
    }

    pub fn update_project_status(&mut self, id: &str, status: ProjectStatus) -> bool {
        let changed = match find_mut(&mut self.data.projects, id) {
            Some(project) => {
                project.status = status;
                true
            }
            None => false,
        };
        self.commit(Collection::Projects, changed)
    }

    pub fn delete_project(&mut self, id: &str) -> bool {
        let removed = remove_by_id(&mut self.data.projects, id);
        self.commit(Collection::Projects, removed)
    }

    /// Adds a goal with `current = 0`.
    pub fn add_goal(&mut self, new_goal: NewGoal) -> Goal {
        let goal = Goal {
            id: new_entity_id(),
            title: new_goal.title,
            target: new_goal.target,
            current: 0.0,
            unit: new_goal.unit,
            deadline: new_goal.deadline,
            category: new_goal.category,
        };
        self.data.goals.push(goal.clone());
        self.persist(Collection::Goals);
        goal
    }

    /// Stores `current` as given; display-time progress caps at 100%.
    pub fn update_goal_progress(&mut self, id: &str, current: f64) -> bool {
        let changed = match find_mut(&mut self.data.goals, id) {
            Some(goal) => {
                goal.current = current;
                true
            }
            None => false,
        };
        self.commit(Collection::Goals, changed)
    }

    pub fn delete_goal(&mut self, id: &str) -> bool {
        let removed = remove_by_id(&mut self.data.goals, id);
        self.commit(Collection::Goals, removed)
    }
}
