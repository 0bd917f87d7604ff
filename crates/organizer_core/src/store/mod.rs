//! In-memory organizer store with write-through persistence.
//!
//! # Responsibility
//! - Own the twelve domain collections for the lifetime of the app.
//! - Apply CRUD mutations and write the affected collection through to the
//!   backing `KvStore` immediately afterwards.
//!
//! # Invariants
//! - Lifecycle is `Uninitialized -> Loading -> Loaded`; only a `Loaded`
//!   store writes, so empty startup state never clobbers persisted data.
//! - Mutations referencing unknown ids are silent no-ops (they return
//!   `false`), never errors.
//! - Write failures are logged and do not roll back memory.
//! - A collection that fails to load falls back to empty; others still load.

use crate::backup::{self, BackupError, ImportSummary};
use crate::clock::{Clock, SystemClock};
use crate::kv::{KvResult, KvStore};
use crate::model::academics::{Assignment, Course, Exam};
use crate::model::content::{CodeSnippet, FocusSession, Note};
use crate::model::files::{FileResource, Folder};
use crate::model::habit::Habit;
use crate::model::planning::{Goal, Project};
use crate::model::task::Task;
use crate::model::Identified;
use crate::prefs::Preferences;
use log::{debug, error, info};
use serde::de::DeserializeOwned;
use std::time::Instant;

mod academics;
mod content;
mod files;
mod habits;
mod planning;
mod tasks;

pub use academics::UNKNOWN_COURSE_LABEL;

/// Persisted collection, one backing-store key each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Tasks,
    Habits,
    Courses,
    Folders,
    Files,
    Projects,
    Goals,
    Exams,
    CodeSnippets,
    Notes,
    Assignments,
    FocusSessions,
}

impl Collection {
    pub const ALL: [Self; 12] = [
        Self::Tasks,
        Self::Habits,
        Self::Courses,
        Self::Folders,
        Self::Files,
        Self::Projects,
        Self::Goals,
        Self::Exams,
        Self::CodeSnippets,
        Self::Notes,
        Self::Assignments,
        Self::FocusSessions,
    ];

    /// Backing-store key holding this collection's JSON array.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Tasks => "cs-organizer-tasks",
            Self::Habits => "cs-organizer-habits",
            Self::Courses => "cs-organizer-courses",
            Self::Folders => "cs-organizer-folders",
            Self::Files => "cs-organizer-files",
            Self::Projects => "cs-organizer-projects",
            Self::Goals => "cs-organizer-goals",
            Self::Exams => "cs-organizer-exams",
            Self::CodeSnippets => "cs-organizer-code",
            Self::Notes => "cs-organizer-notes",
            Self::Assignments => "cs-organizer-assignments",
            Self::FocusSessions => "cs-organizer-sessions",
        }
    }
}

/// Store lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Uninitialized,
    Loading,
    Loaded,
}

/// Every domain collection, in stored order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    /// Newest first.
    pub tasks: Vec<Task>,
    pub habits: Vec<Habit>,
    pub courses: Vec<Course>,
    pub folders: Vec<Folder>,
    pub files: Vec<FileResource>,
    pub projects: Vec<Project>,
    pub goals: Vec<Goal>,
    pub exams: Vec<Exam>,
    pub code_snippets: Vec<CodeSnippet>,
    pub notes: Vec<Note>,
    pub assignments: Vec<Assignment>,
    /// Newest first.
    pub focus_sessions: Vec<FocusSession>,
}

/// Outcome of one `load()` pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Collections read from a stored value.
    pub restored: Vec<Collection>,
    /// Collections with no stored value.
    pub missing: Vec<Collection>,
    /// Collections whose stored value could not be read or parsed.
    pub failed: Vec<Collection>,
}

/// The organizer's single source of truth.
///
/// Construct once at startup, call [`OrganizerStore::load`], then hand the
/// store by reference to whatever needs it.
pub struct OrganizerStore<K: KvStore, C: Clock = SystemClock> {
    backend: K,
    clock: C,
    state: StoreState,
    data: Collections,
}

impl<K: KvStore> OrganizerStore<K, SystemClock> {
    /// Creates an unloaded store using the wall clock.
    pub fn new(backend: K) -> Self {
        Self::with_clock(backend, SystemClock)
    }
}

impl<K: KvStore, C: Clock> OrganizerStore<K, C> {
    /// Creates an unloaded store with an explicit time source.
    pub fn with_clock(backend: K, clock: C) -> Self {
        Self {
            backend,
            clock,
            state: StoreState::Uninitialized,
            data: Collections::default(),
        }
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == StoreState::Loaded
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_backend(self) -> K {
        self.backend
    }

    /// Reads every collection from the backing store and enables writes.
    ///
    /// Absent keys load as empty collections. Unreadable or malformed values
    /// are logged and load as empty without affecting other collections.
    pub fn load(&mut self) -> LoadReport {
        let started_at = Instant::now();
        self.state = StoreState::Loading;
        info!("event=store_load module=store status=start");

        let mut report = LoadReport::default();
        self.data = Collections {
            tasks: self.read_collection(Collection::Tasks, &mut report),
            habits: self.read_collection(Collection::Habits, &mut report),
            courses: self.read_collection(Collection::Courses, &mut report),
            folders: self.read_collection(Collection::Folders, &mut report),
            files: self.read_collection(Collection::Files, &mut report),
            projects: self.read_collection(Collection::Projects, &mut report),
            goals: self.read_collection(Collection::Goals, &mut report),
            exams: self.read_collection(Collection::Exams, &mut report),
            code_snippets: self.read_collection(Collection::CodeSnippets, &mut report),
            notes: self.read_collection(Collection::Notes, &mut report),
            assignments: self.read_collection(Collection::Assignments, &mut report),
            focus_sessions: self.read_collection(Collection::FocusSessions, &mut report),
        };

        self.state = StoreState::Loaded;
        info!(
            "event=store_load module=store status=ok duration_ms={} restored={} missing={} failed={}",
            started_at.elapsed().as_millis(),
            report.restored.len(),
            report.missing.len(),
            report.failed.len()
        );
        report
    }

    /// Discards memory state and loads again from the backing store.
    pub fn reload(&mut self) -> LoadReport {
        self.load()
    }

    /// All collections at once.
    pub fn collections(&self) -> &Collections {
        &self.data
    }

    pub fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }

    pub fn habits(&self) -> &[Habit] {
        &self.data.habits
    }

    pub fn courses(&self) -> &[Course] {
        &self.data.courses
    }

    pub fn folders(&self) -> &[Folder] {
        &self.data.folders
    }

    pub fn files(&self) -> &[FileResource] {
        &self.data.files
    }

    pub fn projects(&self) -> &[Project] {
        &self.data.projects
    }

    pub fn goals(&self) -> &[Goal] {
        &self.data.goals
    }

    pub fn exams(&self) -> &[Exam] {
        &self.data.exams
    }

    pub fn code_snippets(&self) -> &[CodeSnippet] {
        &self.data.code_snippets
    }

    pub fn notes(&self) -> &[Note] {
        &self.data.notes
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.data.assignments
    }

    pub fn focus_sessions(&self) -> &[FocusSession] {
        &self.data.focus_sessions
    }

    /// Scalar preferences (theme, display name, last view).
    pub fn preferences(&mut self) -> Preferences<'_, K> {
        Preferences::new(&mut self.backend)
    }

    /// Serializes every organizer key into one JSON object.
    pub fn export_backup(&self) -> Result<String, BackupError> {
        backup::export_snapshot(&self.backend)
    }

    /// Writes a previously exported payload and reloads all collections.
    ///
    /// A payload that is not a JSON object is rejected before any write.
    pub fn import_backup(&mut self, payload: &str) -> Result<ImportSummary, BackupError> {
        let result = backup::import_snapshot(&mut self.backend, payload);
        if !matches!(result, Err(BackupError::InvalidPayload(_))) {
            self.reload();
        }
        result
    }

    /// Wipes the backing store and reloads to empty collections.
    ///
    /// Returns the number of keys removed.
    pub fn clear_all(&mut self) -> KvResult<usize> {
        let result = backup::clear_all(&mut self.backend);
        self.reload();
        result
    }

    fn read_collection<T: DeserializeOwned>(
        &self,
        collection: Collection,
        report: &mut LoadReport,
    ) -> Vec<T> {
        let key = collection.storage_key();
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                report.missing.push(collection);
                return Vec::new();
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error key={key} error_code=read_failed error={err}"
                );
                report.failed.push(collection);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => {
                report.restored.push(collection);
                items
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error key={key} error_code=parse_failed error={err}"
                );
                report.failed.push(collection);
                Vec::new()
            }
        }
    }

    /// Writes `collection` through when `changed`, and passes `changed` on.
    fn commit(&mut self, collection: Collection, changed: bool) -> bool {
        if changed {
            self.persist(collection);
        }
        changed
    }

    fn persist(&mut self, collection: Collection) {
        let key = collection.storage_key();
        if self.state != StoreState::Loaded {
            debug!("event=store_write module=store status=skipped key={key} reason=not_loaded");
            return;
        }

        let serialized = match collection {
            Collection::Tasks => serde_json::to_string(&self.data.tasks),
            Collection::Habits => serde_json::to_string(&self.data.habits),
            Collection::Courses => serde_json::to_string(&self.data.courses),
            Collection::Folders => serde_json::to_string(&self.data.folders),
            Collection::Files => serde_json::to_string(&self.data.files),
            Collection::Projects => serde_json::to_string(&self.data.projects),
            Collection::Goals => serde_json::to_string(&self.data.goals),
            Collection::Exams => serde_json::to_string(&self.data.exams),
            Collection::CodeSnippets => serde_json::to_string(&self.data.code_snippets),
            Collection::Notes => serde_json::to_string(&self.data.notes),
            Collection::Assignments => serde_json::to_string(&self.data.assignments),
            Collection::FocusSessions => serde_json::to_string(&self.data.focus_sessions),
        };

        let value = match serialized {
            Ok(value) => value,
            Err(err) => {
                error!(
                    "event=store_write module=store status=error key={key} error_code=serialize_failed error={err}"
                );
                return;
            }
        };

        match self.backend.set_item(key, &value) {
            Ok(()) => debug!(
                "event=store_write module=store status=ok key={key} bytes={}",
                value.len()
            ),
            Err(err) => error!(
                "event=store_write module=store status=error key={key} error_code=write_failed error={err}"
            ),
        }
    }
}

fn find_mut<'a, T: Identified>(items: &'a mut [T], id: &str) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

fn find<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
