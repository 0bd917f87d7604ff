//! Productivity summaries for the analytics and dashboard screens.

use super::grades::{sgpa, GradeSummary};
use super::{percentage, rounded_mean};
use crate::clock::parse_date;
use crate::model::academics::{Course, Exam};
use crate::model::content::FocusSession;
use crate::model::habit::{Habit, HabitCategory};
use crate::model::task::{Quadrant, Task};
use chrono::NaiveDate;

/// Pending tasks at or above this priority are surfaced on the dashboard.
const TOP_PRIORITY_THRESHOLD: u8 = 4;
const TOP_PRIORITY_LIMIT: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub completion_rate: u32,
    /// Counts for quadrants 1..=4, completed tasks included.
    pub quadrant_counts: [usize; 4],
    pub average_streak: u32,
    /// `(category, habit count)` in `HabitCategory::ALL` order.
    pub habits_by_category: Vec<(HabitCategory, usize)>,
    pub focus_minutes: u64,
    pub focus_hours: f64,
    pub focus_sessions: usize,
    pub average_session_minutes: u32,
}

pub fn analytics(tasks: &[Task], habits: &[Habit], sessions: &[FocusSession]) -> Analytics {
    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|task| task.completed).count();

    let mut quadrant_counts = [0usize; 4];
    for task in tasks {
        quadrant_counts[usize::from(task.quadrant.get() - 1)] += 1;
    }

    let total_streak: u64 = habits.iter().map(|habit| u64::from(habit.streak)).sum();
    let habits_by_category = HabitCategory::ALL
        .into_iter()
        .map(|category| {
            let count = habits.iter().filter(|habit| habit.category == category).count();
            (category, count)
        })
        .collect();

    let focus_minutes: u64 = sessions.iter().map(|session| u64::from(session.duration)).sum();

    Analytics {
        total_tasks,
        completed_tasks,
        pending_tasks: total_tasks - completed_tasks,
        completion_rate: percentage(completed_tasks as f64, total_tasks as f64),
        quadrant_counts,
        average_streak: rounded_mean(total_streak as f64, habits.len()),
        habits_by_category,
        focus_minutes,
        focus_hours: (focus_minutes as f64 / 60.0 * 10.0).round() / 10.0,
        focus_sessions: sessions.len(),
        average_session_minutes: rounded_mean(focus_minutes as f64, sessions.len()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard<'a> {
    pub pending_tasks: usize,
    /// Up to two pending tasks with priority >= 4, in list order.
    pub top_priority: Vec<&'a Task>,
    pub pending_do_first: usize,
    /// First habit holding the highest streak.
    pub top_habit: Option<&'a Habit>,
    pub grades: GradeSummary,
    /// Incomplete exams dated after `today`.
    pub upcoming_exams: usize,
}

pub fn dashboard<'a>(
    tasks: &'a [Task],
    habits: &'a [Habit],
    courses: &[Course],
    exams: &[Exam],
    today: NaiveDate,
) -> Dashboard<'a> {
    let pending: Vec<&Task> = tasks.iter().filter(|task| !task.completed).collect();
    let top_priority = pending
        .iter()
        .copied()
        .filter(|task| task.priority.get() >= TOP_PRIORITY_THRESHOLD)
        .take(TOP_PRIORITY_LIMIT)
        .collect();
    let pending_do_first = pending
        .iter()
        .filter(|task| task.quadrant == Quadrant::DO_FIRST)
        .count();

    let max_streak = habits.iter().map(|habit| habit.streak).max();
    let top_habit = max_streak.and_then(|max| habits.iter().find(|habit| habit.streak == max));

    let upcoming_exams = exams
        .iter()
        .filter(|exam| !exam.completed)
        .filter(|exam| parse_date(&exam.date).is_some_and(|date| date > today))
        .count();

    Dashboard {
        pending_tasks: pending.len(),
        top_priority,
        pending_do_first,
        top_habit,
        grades: sgpa(courses),
        upcoming_exams,
    }
}
