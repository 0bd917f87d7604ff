use chrono::NaiveDate;
use organizer_core::{
    Collection, Course, FixedClock, KvStore, MemoryKvStore, NewNote, OrganizerStore, Priority,
    Quadrant, SqliteKvStore, StoreState, Task,
};

fn clock() -> FixedClock {
    FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap())
}

#[test]
fn lifecycle_moves_from_uninitialized_to_loaded() {
    let mut store = OrganizerStore::with_clock(MemoryKvStore::new(), clock());
    assert_eq!(store.state(), StoreState::Uninitialized);
    assert!(!store.is_loaded());

    let report = store.load();
    assert_eq!(store.state(), StoreState::Loaded);
    assert_eq!(report.missing.len(), Collection::ALL.len());
    assert!(report.failed.is_empty());
}

#[test]
fn mutations_before_load_never_overwrite_persisted_data() {
    let mut seeded = OrganizerStore::with_clock(MemoryKvStore::new(), clock());
    seeded.load();
    let kept = seeded.add_task("persisted", Quadrant::SCHEDULE, Priority::DEFAULT, None);
    let backend = seeded.into_backend();
    let persisted_raw = backend.get_item("cs-organizer-tasks").unwrap();

    let mut store = OrganizerStore::with_clock(backend, clock());
    store.add_task("early", Quadrant::DO_FIRST, Priority::DEFAULT, None);
    assert_eq!(
        store.backend().get_item("cs-organizer-tasks").unwrap(),
        persisted_raw
    );

    store.load();
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].id, kept.id);
}

#[test]
fn corrupt_collection_falls_back_to_empty_without_blocking_others() {
    let mut backend = MemoryKvStore::new();
    backend.set_item("cs-organizer-tasks", "{not json").unwrap();
    backend
        .set_item(
            "cs-organizer-habits",
            r#"[{"id":"h1","name":"Gym","category":"Health","streak":2,"completedDates":["2024-09-01","2024-09-02"],"frequency":"daily"}]"#,
        )
        .unwrap();

    let mut store = OrganizerStore::with_clock(backend, clock());
    let report = store.load();

    assert!(store.tasks().is_empty());
    assert_eq!(store.habits().len(), 1);
    assert_eq!(store.habits()[0].streak, 2);
    assert_eq!(report.failed, vec![Collection::Tasks]);
    assert_eq!(report.restored, vec![Collection::Habits]);
    assert!(store.is_loaded());
}

#[test]
fn out_of_range_quadrant_in_storage_counts_as_parse_failure() {
    let mut backend = MemoryKvStore::new();
    backend
        .set_item(
            "cs-organizer-tasks",
            r#"[{"id":"t1","title":"x","completed":false,"priority":3,"quadrant":7,"createdAt":""}]"#,
        )
        .unwrap();

    let mut store = OrganizerStore::with_clock(backend, clock());
    let report = store.load();
    assert!(store.tasks().is_empty());
    assert_eq!(report.failed, vec![Collection::Tasks]);
}

#[test]
fn every_mutation_writes_its_collection_through() {
    let mut store = OrganizerStore::with_clock(MemoryKvStore::new(), clock());
    store.load();

    store.add_task("a", Quadrant::DO_FIRST, Priority::DEFAULT, None);
    let course = store.add_course(organizer_core::NewCourse {
        code: "CS201".to_string(),
        name: "Data Structures".to_string(),
        semester: "3".to_string(),
        credits: 4.0,
        color: None,
        grade: None,
    });
    store.record_attendance(&course.id, true);

    let tasks: Vec<Task> =
        serde_json::from_str(&store.backend().get_item("cs-organizer-tasks").unwrap().unwrap())
            .unwrap();
    let courses: Vec<Course> = serde_json::from_str(
        &store
            .backend()
            .get_item("cs-organizer-courses")
            .unwrap()
            .unwrap(),
    )
    .unwrap();

    assert_eq!(tasks, store.tasks());
    assert_eq!(courses, store.courses());
    assert_eq!(courses[0].attendance.attended, 1);
}

#[test]
fn unknown_ids_are_silent_no_ops() {
    let mut store = OrganizerStore::with_clock(MemoryKvStore::new(), clock());
    store.load();

    assert!(!store.toggle_task("missing"));
    assert!(!store.delete_task("missing"));
    assert!(!store.update_task_quadrant("missing", Quadrant::ELIMINATE));
    assert!(store.add_subtask("missing", "sub").is_none());
    assert!(!store.toggle_subtask("missing", "sub"));
    assert!(!store.toggle_habit_for_today("missing"));
    assert!(!store.update_course_attendance("missing", 1, 1));
    assert!(!store.delete_folder("missing"));
    assert!(!store.update_goal_progress("missing", 3.0));

    assert!(store.backend().is_empty());
}

#[test]
fn write_failure_keeps_memory_state() {
    let mut store = OrganizerStore::with_clock(MemoryKvStore::with_quota(64), clock());
    store.load();

    let note = store.add_note(NewNote {
        title: "Lecture".to_string(),
        content: "x".repeat(200),
        category: "CS".to_string(),
        tags: Vec::new(),
        color: "bg-yellow-100".to_string(),
    });

    assert_eq!(store.notes().len(), 1);
    assert_eq!(store.notes()[0].id, note.id);
    assert!(store.backend().get_item("cs-organizer-notes").unwrap().is_none());
}

#[test]
fn sqlite_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("organizer.sqlite3");

    let created = {
        let mut store = OrganizerStore::with_clock(SqliteKvStore::open(&path).unwrap(), clock());
        store.load();
        let task = store.add_task(
            "Finish lab",
            Quadrant::DO_FIRST,
            Priority::new(5).unwrap(),
            Some("2024-09-10".to_string()),
        );
        store.add_focus_session(25, "lab");
        task
    };

    let mut reopened = OrganizerStore::with_clock(SqliteKvStore::open(&path).unwrap(), clock());
    let report = reopened.load();

    assert_eq!(reopened.tasks(), &[created]);
    assert_eq!(reopened.focus_sessions().len(), 1);
    assert!(report.restored.contains(&Collection::FocusSessions));
}
