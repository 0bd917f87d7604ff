//! Eisenhower-matrix review and due-date orderings.

use crate::clock::{parse_date, parse_timestamp};
use crate::model::academics::{Assignment, AssignmentStatus, Exam};
use crate::model::task::{Quadrant, Task};
use chrono::{DateTime, Duration, Utc};

/// Quadrant-4 tasks older than this are suggested for removal.
pub const STALE_AFTER_DAYS: i64 = 7;

/// Open tasks placed in `quadrant`, in list order.
pub fn tasks_in_quadrant(tasks: &[Task], quadrant: Quadrant) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| !task.completed && task.quadrant == quadrant)
        .collect()
}

/// Open quadrant-4 tasks created more than seven days before `now`.
pub fn stale_eliminate_candidates(tasks: &[Task], now: DateTime<Utc>) -> Vec<&Task> {
    let cutoff = now - Duration::days(STALE_AFTER_DAYS);
    tasks_in_quadrant(tasks, Quadrant::ELIMINATE)
        .into_iter()
        .filter(|task| parse_timestamp(&task.created_at).is_some_and(|created| created < cutoff))
        .collect()
}

/// Sum of time estimates (minutes) of open tasks in `quadrant`.
pub fn quadrant_time_estimate(tasks: &[Task], quadrant: Quadrant) -> u64 {
    tasks_in_quadrant(tasks, quadrant)
        .into_iter()
        .map(|task| u64::from(task.time_estimate.unwrap_or(0)))
        .sum()
}

/// Pending assignments, earliest due first. Unparseable dates sort last.
pub fn pending_assignments_by_due(assignments: &[Assignment]) -> Vec<&Assignment> {
    let mut pending: Vec<&Assignment> = assignments
        .iter()
        .filter(|assignment| assignment.status == AssignmentStatus::Pending)
        .collect();
    pending.sort_by_key(|assignment| {
        let due = parse_date(&assignment.due_date);
        (due.is_none(), due)
    });
    pending
}

/// Exams, earliest first. Unparseable dates sort last.
pub fn exams_by_date(exams: &[Exam]) -> Vec<&Exam> {
    let mut sorted: Vec<&Exam> = exams.iter().collect();
    sorted.sort_by_key(|exam| {
        let date = parse_date(&exam.date);
        (date.is_none(), date)
    });
    sorted
}
