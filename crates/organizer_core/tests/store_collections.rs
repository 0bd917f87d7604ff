use chrono::{Duration, NaiveDate};
use organizer_core::insights::grades::{attendance_percentage, goal_progress};
use organizer_core::{
    AssignmentStatus, FileKind, FixedClock, GoalCategory, HabitCategory, HabitFrequency,
    MemoryKvStore, NewAssignment, NewCodeSnippet, NewCourse, NewExam, NewGoal, NewNote,
    NewProject, OrganizerStore, ProjectStatus, ResourceKind,
};

fn loaded_store() -> OrganizerStore<MemoryKvStore, FixedClock> {
    let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    let mut store = OrganizerStore::with_clock(MemoryKvStore::new(), clock);
    store.load();
    store
}

fn new_course(code: &str, credits: f64, grade: Option<&str>) -> NewCourse {
    NewCourse {
        code: code.to_string(),
        name: format!("{code} course"),
        semester: "4".to_string(),
        credits,
        color: None,
        grade: grade.map(str::to_string),
    }
}

#[test]
fn habit_check_in_toggles_today() {
    let mut store = loaded_store();
    let habit = store.add_habit(
        "Read",
        HabitCategory::Academic,
        HabitFrequency::Daily,
        None,
        None,
    );

    assert!(store.toggle_habit_for_today(&habit.id));
    let checked = store.habit(&habit.id).unwrap();
    assert_eq!(checked.completed_dates, vec!["2024-03-10".to_string()]);
    assert_eq!(checked.streak, 1);

    assert!(store.toggle_habit_for_today(&habit.id));
    let unchecked = store.habit(&habit.id).unwrap();
    assert!(unchecked.completed_dates.is_empty());
    assert_eq!(unchecked.streak, 0);
}

#[test]
fn habit_streak_counts_total_check_ins() {
    let mut store = loaded_store();
    let habit = store.add_habit(
        "Run",
        HabitCategory::Health,
        HabitFrequency::Daily,
        Some("07:00".to_string()),
        None,
    );

    store.toggle_habit_for_today(&habit.id);
    store.clock().advance(Duration::days(1));
    store.toggle_habit_for_today(&habit.id);
    store.clock().advance(Duration::days(3));
    store.toggle_habit_for_today(&habit.id);

    let habit = store.habit(&habit.id).unwrap();
    assert_eq!(habit.streak, 3);
    assert_eq!(habit.reminder_time.as_deref(), Some("07:00"));
}

#[test]
fn chained_habit_resolves_by_name() {
    let mut store = loaded_store();
    store.add_habit(
        "Wake up",
        HabitCategory::Productivity,
        HabitFrequency::Daily,
        None,
        None,
    );
    let chained = store.add_habit(
        "Stretch",
        HabitCategory::Health,
        HabitFrequency::Daily,
        None,
        Some("Wake up".to_string()),
    );
    let dangling = store.add_habit(
        "Journal",
        HabitCategory::Productivity,
        HabitFrequency::Weekly,
        None,
        Some("Meditate".to_string()),
    );

    assert_eq!(store.chained_after(&chained).unwrap().name, "Wake up");
    assert!(store.chained_after(&dangling).is_none());

    assert!(store.delete_habit(&chained.id));
    assert_eq!(store.habits().len(), 2);
}

#[test]
fn new_course_starts_with_empty_attendance_and_resources() {
    let mut store = loaded_store();
    let course = store.add_course(new_course("CS301", 4.0, None));

    assert_eq!(course.attendance.attended, 0);
    assert_eq!(course.attendance.total, 0);
    assert!(course.resources.is_empty());
    assert_eq!(attendance_percentage(&course), 0);
}

#[test]
fn attendance_updates_and_records() {
    let mut store = loaded_store();
    let course = store.add_course(new_course("MA201", 3.0, None));

    assert!(store.record_attendance(&course.id, true));
    assert!(store.record_attendance(&course.id, false));
    let stored = store.course(&course.id).unwrap();
    assert_eq!((stored.attendance.attended, stored.attendance.total), (1, 2));
    assert_eq!(attendance_percentage(stored), 50);

    assert!(store.update_course_attendance(&course.id, 2, 3));
    assert_eq!(attendance_percentage(store.course(&course.id).unwrap()), 67);
}

#[test]
fn course_grade_can_be_set_and_cleared() {
    let mut store = loaded_store();
    let course = store.add_course(new_course("PH101", 2.0, Some("B")));

    assert!(store.update_course_grade(&course.id, "A+"));
    assert_eq!(store.course(&course.id).unwrap().grade.as_deref(), Some("A+"));
    assert!(store.update_course_grade(&course.id, ""));
    assert!(store.course(&course.id).unwrap().grade.is_none());
}

#[test]
fn course_resources_are_nested_in_course() {
    let mut store = loaded_store();
    let course = store.add_course(new_course("CS310", 4.0, None));

    let slides = store
        .add_course_resource(
            &course.id,
            "Slides",
            "https://example.org/s.pdf",
            ResourceKind::Pdf,
        )
        .unwrap();
    assert!(store
        .add_course_resource("missing", "x", "y", ResourceKind::Link)
        .is_none());
    assert_eq!(store.course(&course.id).unwrap().resources.len(), 1);

    assert!(store.delete_course_resource(&course.id, &slides.id));
    assert!(store.course(&course.id).unwrap().resources.is_empty());
}

#[test]
fn deleting_course_keeps_assignments_with_unknown_label() {
    let mut store = loaded_store();
    let course = store.add_course(new_course("CS401", 4.0, None));
    let assignment = store.add_assignment(NewAssignment {
        title: "Lab 3".to_string(),
        course_id: course.id.clone(),
        due_date: "2024-03-20".to_string(),
        description: None,
    });
    assert_eq!(assignment.status, AssignmentStatus::Pending);
    assert_eq!(store.assignment_course_name(&assignment), "CS401 course");

    assert!(store.delete_course(&course.id));
    assert_eq!(store.assignments().len(), 1);
    assert_eq!(
        store.assignment_course_name(&store.assignments()[0]),
        organizer_core::store::UNKNOWN_COURSE_LABEL
    );

    assert!(store.update_assignment_status(&assignment.id, AssignmentStatus::Submitted));
    assert_eq!(store.assignments()[0].status, AssignmentStatus::Submitted);
    assert!(store.delete_assignment(&assignment.id));
}

#[test]
fn exams_start_incomplete() {
    let mut store = loaded_store();
    let exam = store.add_exam(NewExam {
        name: "Midterm".to_string(),
        course_name: "Algorithms".to_string(),
        date: "2024-04-02".to_string(),
        syllabus: "Graphs".to_string(),
    });
    assert!(!exam.completed);
    assert!(store.delete_exam(&exam.id));
    assert!(store.exams().is_empty());
}

#[test]
fn deleting_folder_removes_only_its_direct_files() {
    let mut store = loaded_store();
    let root = store.add_folder("Semester 4", None);
    let child = store.add_folder("Labs", Some(root.id.clone()));
    let other = store.add_folder("Personal", None);

    store.add_file("syllabus", FileKind::Link, "https://x", Some(root.id.clone()));
    let nested = store.add_file("lab1", FileKind::Snippet, "fn main() {}", Some(child.id.clone()));
    let loose = store.add_file("loose", FileKind::Link, "https://y", None);
    let elsewhere = store.add_file("cv", FileKind::Link, "https://z", Some(other.id.clone()));

    assert!(store.delete_folder(&root.id));

    let folder_ids: Vec<_> = store.folders().iter().map(|f| f.id.clone()).collect();
    assert_eq!(folder_ids, vec![child.id.clone(), other.id]);
    assert_eq!(child.parent_id.as_deref(), Some(root.id.as_str()));

    let file_ids: Vec<_> = store.files().iter().map(|f| f.id.clone()).collect();
    assert_eq!(file_ids, vec![nested.id, loose.id.clone(), elsewhere.id]);

    assert!(store.delete_file(&loose.id));
    assert_eq!(store.files().len(), 2);
}

#[test]
fn goal_progress_is_stored_raw_and_capped_for_display() {
    let mut store = loaded_store();
    let goal = store.add_goal(NewGoal {
        title: "LeetCode".to_string(),
        target: 10.0,
        unit: "problems".to_string(),
        deadline: "2024-05-01".to_string(),
        category: GoalCategory::Skill,
    });
    assert_eq!(goal.current, 0.0);

    assert!(store.update_goal_progress(&goal.id, 4.0));
    assert_eq!(goal_progress(&store.goals()[0]), 40);

    assert!(store.update_goal_progress(&goal.id, 500.0));
    assert_eq!(store.goals()[0].current, 500.0);
    assert_eq!(goal_progress(&store.goals()[0]), 100);

    assert!(store.delete_goal(&goal.id));
}

#[test]
fn project_status_moves_through_pipeline() {
    let mut store = loaded_store();
    let project = store.add_project(NewProject {
        name: "Compiler".to_string(),
        status: ProjectStatus::Idea,
        tech_stack: vec!["Rust".to_string(), "LLVM".to_string()],
        deadline: None,
        description: "Toy language".to_string(),
    });

    assert!(store.update_project_status(&project.id, ProjectStatus::Development));
    assert_eq!(store.projects()[0].status, ProjectStatus::Development);
    assert!(!store.update_project_status("missing", ProjectStatus::Done));
    assert!(store.delete_project(&project.id));
}

#[test]
fn notes_snippets_and_sessions_are_recorded() {
    let mut store = loaded_store();
    let note = store.add_note(NewNote {
        title: "Lecture 5".to_string(),
        content: "Heaps".to_string(),
        category: "DSA".to_string(),
        tags: vec!["exam".to_string()],
        color: "bg-blue-100".to_string(),
    });
    assert_eq!(note.created_at, "2024-03-10T12:00:00.000Z");

    let snippet = store.add_code_snippet(NewCodeSnippet {
        title: "Binary search".to_string(),
        language: "rust".to_string(),
        code: "fn search() {}".to_string(),
        tags: Vec::new(),
    });

    let first = store.add_focus_session(25, "Read chapter");
    store.clock().advance(Duration::minutes(30));
    let second = store.add_focus_session(50, "");

    assert!(first.completed);
    assert_eq!(second.start_time - first.start_time, 30 * 60 * 1000);
    assert_eq!(store.focus_sessions()[0].id, second.id);

    assert!(store.delete_note(&note.id));
    assert!(store.delete_code_snippet(&snippet.id));
    assert!(store.notes().is_empty());
    assert!(store.code_snippets().is_empty());
}
