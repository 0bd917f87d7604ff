//! Core data layer for the student organizer.
//! This crate owns every collection, its invariants and its persistence.

pub mod backup;
pub mod clock;
pub mod config;
pub mod db;
pub mod insights;
pub mod kv;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod store;

pub use backup::{BackupError, ImportSummary};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, StorageConfig};
pub use kv::{KvError, KvResult, KvStore, MemoryKvStore, SqliteKvStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::academics::{
    Assignment, AssignmentStatus, Attendance, Course, CourseResource, Exam, NewAssignment,
    NewCourse, NewExam, ResourceKind,
};
pub use model::content::{CodeSnippet, FocusSession, NewCodeSnippet, NewNote, Note};
pub use model::files::{FileKind, FileResource, Folder};
pub use model::habit::{Habit, HabitCategory, HabitFrequency};
pub use model::planning::{Goal, GoalCategory, NewGoal, NewProject, Project, ProjectStatus};
pub use model::task::{Priority, Quadrant, Subtask, Task};
pub use model::{EntityId, ModelError};
pub use prefs::{Preferences, Theme, View};
pub use store::{Collection, Collections, LoadReport, OrganizerStore, StoreState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
