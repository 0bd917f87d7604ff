use chrono::{Duration, NaiveDate};
use organizer_core::clock::Clock;
use organizer_core::insights::analytics::{analytics, dashboard};
use organizer_core::insights::calendar::{calendar_events, events_on, EventKind};
use organizer_core::insights::grades::{attendance_percentage, sgpa};
use organizer_core::insights::matrix::{
    pending_assignments_by_due, quadrant_time_estimate, stale_eliminate_candidates,
};
use organizer_core::{
    AssignmentStatus, FixedClock, GoalCategory, HabitCategory, HabitFrequency, KvStore,
    MemoryKvStore, NewAssignment, NewCourse, NewExam, NewGoal, OrganizerStore, Priority, Quadrant,
};

fn loaded_store() -> OrganizerStore<MemoryKvStore, FixedClock> {
    let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    let mut store = OrganizerStore::with_clock(MemoryKvStore::new(), clock);
    store.load();
    store
}

fn course(store: &mut OrganizerStore<MemoryKvStore, FixedClock>, credits: f64, grade: Option<&str>) {
    store.add_course(NewCourse {
        code: "C".to_string(),
        name: "Course".to_string(),
        semester: "2".to_string(),
        credits,
        color: None,
        grade: grade.map(str::to_string),
    });
}

#[test]
fn sgpa_weights_grades_by_credits() {
    let mut store = loaded_store();
    course(&mut store, 4.0, Some("A"));
    course(&mut store, 2.0, Some("B"));
    course(&mut store, 3.0, None);
    course(&mut store, 3.0, Some("Z"));

    let summary = sgpa(store.courses());
    assert_eq!(summary.total_credits, 6.0);
    assert_eq!(summary.graded_courses, 2);
    assert_eq!(summary.display(), "7.33");
}

#[test]
fn sgpa_is_zero_without_graded_courses() {
    let mut store = loaded_store();
    course(&mut store, 4.0, None);
    assert_eq!(sgpa(store.courses()).display(), "0.00");
}

#[test]
fn attendance_rounds_to_nearest_percent() {
    let mut store = loaded_store();
    course(&mut store, 4.0, None);
    let id = store.courses()[0].id.clone();

    assert_eq!(attendance_percentage(&store.courses()[0]), 0);
    store.update_course_attendance(&id, 1, 3);
    assert_eq!(attendance_percentage(&store.courses()[0]), 33);
    store.update_course_attendance(&id, 3, 3);
    assert_eq!(attendance_percentage(&store.courses()[0]), 100);
}

#[test]
fn calendar_collects_dated_records() {
    let mut store = loaded_store();
    course(&mut store, 4.0, None);
    let course_id = store.courses()[0].id.clone();

    store.add_exam(NewExam {
        name: "Final".to_string(),
        course_name: "Networks".to_string(),
        date: "2024-03-15".to_string(),
        syllabus: String::new(),
    });
    store.add_assignment(NewAssignment {
        title: "Lab 2".to_string(),
        course_id,
        due_date: "2024-03-15".to_string(),
        description: None,
    });
    store.add_goal(NewGoal {
        title: "Open goal".to_string(),
        target: 1.0,
        unit: "x".to_string(),
        deadline: String::new(),
        category: GoalCategory::Personal,
    });
    let open = store.add_task(
        "Revise",
        Quadrant::DO_FIRST,
        Priority::DEFAULT,
        Some("2024-03-14".to_string()),
    );
    let done = store.add_task(
        "Done already",
        Quadrant::DO_FIRST,
        Priority::DEFAULT,
        Some("2024-03-14".to_string()),
    );
    store.toggle_task(&done.id);

    let events = calendar_events(store.exams(), store.assignments(), store.goals(), store.tasks());
    let kinds: Vec<_> = events.iter().map(|event| event.kind).collect();
    assert_eq!(kinds, vec![EventKind::Exam, EventKind::Assignment, EventKind::Task]);
    assert_eq!(events[0].title, "Exam: Networks");
    assert_eq!(events[1].title, "Due: Lab 2");

    let on_15th = events_on(&events, "2024-03-15");
    assert_eq!(on_15th.len(), 2);
    let on_14th = events_on(&events, "2024-03-14");
    assert_eq!(on_14th[0].id, open.id);
}

#[test]
fn analytics_summarize_tasks_habits_and_focus() {
    let mut store = loaded_store();
    let a = store.add_task("a", Quadrant::DO_FIRST, Priority::DEFAULT, None);
    store.add_task("b", Quadrant::SCHEDULE, Priority::DEFAULT, None);
    store.add_task("c", Quadrant::SCHEDULE, Priority::DEFAULT, None);
    store.toggle_task(&a.id);

    let read = store.add_habit("Read", HabitCategory::Academic, HabitFrequency::Daily, None, None);
    store.add_habit("Run", HabitCategory::Health, HabitFrequency::Daily, None, None);
    store.toggle_habit_for_today(&read.id);

    store.add_focus_session(25, "");
    store.add_focus_session(50, "");

    let stats = analytics(store.tasks(), store.habits(), store.focus_sessions());
    assert_eq!(stats.total_tasks, 3);
    assert_eq!(stats.completed_tasks, 1);
    assert_eq!(stats.pending_tasks, 2);
    assert_eq!(stats.completion_rate, 33);
    assert_eq!(stats.quadrant_counts, [1, 2, 0, 0]);
    assert_eq!(stats.average_streak, 1);
    assert_eq!(
        stats.habits_by_category,
        vec![
            (HabitCategory::Academic, 1),
            (HabitCategory::Health, 1),
            (HabitCategory::Productivity, 0),
        ]
    );
    assert_eq!(stats.focus_minutes, 75);
    assert_eq!(stats.focus_hours, 1.3);
    assert_eq!(stats.average_session_minutes, 38);
}

#[test]
fn analytics_on_empty_store_are_zero() {
    let store = loaded_store();
    let stats = analytics(store.tasks(), store.habits(), store.focus_sessions());
    assert_eq!(stats.completion_rate, 0);
    assert_eq!(stats.average_streak, 0);
    assert_eq!(stats.average_session_minutes, 0);
}

#[test]
fn dashboard_highlights_priorities_and_upcoming_exams() {
    let mut store = loaded_store();
    store.add_task("low", Quadrant::SCHEDULE, Priority::new(1).unwrap(), None);
    store.add_task("high one", Quadrant::DO_FIRST, Priority::new(4).unwrap(), None);
    store.add_task("high two", Quadrant::DO_FIRST, Priority::new(5).unwrap(), None);
    store.add_task("high three", Quadrant::DELEGATE, Priority::new(5).unwrap(), None);

    for (name, date) in [("Past", "2024-03-01"), ("Today", "2024-03-10"), ("Soon", "2024-03-20")] {
        store.add_exam(NewExam {
            name: name.to_string(),
            course_name: name.to_string(),
            date: date.to_string(),
            syllabus: String::new(),
        });
    }

    let today = store.clock().today();
    let view = dashboard(
        store.tasks(),
        store.habits(),
        store.courses(),
        store.exams(),
        today,
    );
    assert_eq!(view.pending_tasks, 4);
    let titles: Vec<_> = view.top_priority.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, vec!["high three", "high two"]);
    assert_eq!(view.pending_do_first, 2);
    assert!(view.top_habit.is_none());
    assert_eq!(view.upcoming_exams, 1);
}

#[test]
fn exam_dated_today_is_not_upcoming() {
    let mut store = loaded_store();
    let today = store.clock().today();
    store.add_exam(NewExam {
        name: "Midterm".to_string(),
        course_name: "DSA".to_string(),
        date: today.format("%Y-%m-%d").to_string(),
        syllabus: String::new(),
    });
    let on_the_day = dashboard(
        store.tasks(),
        store.habits(),
        store.courses(),
        store.exams(),
        today,
    );
    assert_eq!(on_the_day.upcoming_exams, 0);

    let day_before = dashboard(
        store.tasks(),
        store.habits(),
        store.courses(),
        store.exams(),
        today - Duration::days(1),
    );
    assert_eq!(day_before.upcoming_exams, 1);
}

#[test]
fn stale_quadrant_four_tasks_are_flagged_after_a_week() {
    let mut store = loaded_store();
    let old = store.add_task("someday", Quadrant::ELIMINATE, Priority::new(1).unwrap(), None);
    store.clock().advance(Duration::days(6));
    store.add_task("recent", Quadrant::ELIMINATE, Priority::new(1).unwrap(), None);
    store.clock().advance(Duration::days(2));

    let stale = stale_eliminate_candidates(store.tasks(), store.clock().now());
    assert_eq!(stale.len(), 1);
    assert_eq!(stale[0].id, old.id);
}

#[test]
fn quadrant_estimate_sums_open_tasks() {
    let mut store = loaded_store();
    store.add_task("a", Quadrant::SCHEDULE, Priority::DEFAULT, None);
    assert_eq!(quadrant_time_estimate(store.tasks(), Quadrant::SCHEDULE), 0);
}

#[test]
fn quadrant_estimate_does_not_overflow_on_large_estimates() {
    let task = |id: &str| {
        format!(
            r#"{{"id":"{id}","title":"{id}","completed":false,"priority":3,"quadrant":1,"timeEstimate":4000000000,"createdAt":"2024-03-10T00:00:00Z"}}"#
        )
    };
    let mut backend = MemoryKvStore::new();
    backend
        .set_item("cs-organizer-tasks", &format!("[{},{}]", task("a"), task("b")))
        .unwrap();
    let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    let mut store = OrganizerStore::with_clock(backend, clock);
    store.load();

    assert_eq!(store.tasks().len(), 2);
    assert_eq!(
        quadrant_time_estimate(store.tasks(), Quadrant::DO_FIRST),
        8_000_000_000
    );
}

#[test]
fn pending_assignments_sort_by_due_date() {
    let mut store = loaded_store();
    for (title, due) in [("late", "2024-04-01"), ("bad", "someday"), ("early", "2024-03-12")] {
        store.add_assignment(NewAssignment {
            title: title.to_string(),
            course_id: "c1".to_string(),
            due_date: due.to_string(),
            description: None,
        });
    }
    let submitted = store.add_assignment(NewAssignment {
        title: "submitted".to_string(),
        course_id: "c1".to_string(),
        due_date: "2024-03-11".to_string(),
        description: None,
    });
    store.update_assignment_status(&submitted.id, AssignmentStatus::Submitted);

    let titles: Vec<_> = pending_assignments_by_due(store.assignments())
        .into_iter()
        .map(|assignment| assignment.title.as_str())
        .collect();
    assert_eq!(titles, vec!["early", "late", "bad"]);
}
