//! Date-keyed aggregation of everything with a deadline.

use crate::model::academics::{Assignment, Exam};
use crate::model::planning::Goal;
use crate::model::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Exam,
    Assignment,
    Goal,
    Task,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Id of the source record.
    pub id: String,
    pub title: String,
    pub kind: EventKind,
    /// Date string as stored on the source record.
    pub date: String,
}

/// Collects exams, assignments, goals with a deadline and open tasks with a
/// due date, in that order.
pub fn calendar_events(
    exams: &[Exam],
    assignments: &[Assignment],
    goals: &[Goal],
    tasks: &[Task],
) -> Vec<CalendarEvent> {
    let exam_events = exams.iter().map(|exam| CalendarEvent {
        id: exam.id.clone(),
        title: format!("Exam: {}", exam.course_name),
        kind: EventKind::Exam,
        date: exam.date.clone(),
    });

    let assignment_events = assignments.iter().map(|assignment| CalendarEvent {
        id: assignment.id.clone(),
        title: format!("Due: {}", assignment.title),
        kind: EventKind::Assignment,
        date: assignment.due_date.clone(),
    });

    let goal_events = goals
        .iter()
        .filter(|goal| !goal.deadline.is_empty())
        .map(|goal| CalendarEvent {
            id: goal.id.clone(),
            title: format!("Goal: {}", goal.title),
            kind: EventKind::Goal,
            date: goal.deadline.clone(),
        });

    let task_events = tasks
        .iter()
        .filter(|task| !task.completed)
        .filter_map(|task| {
            let due = task.due_date.as_deref().filter(|due| !due.is_empty())?;
            Some(CalendarEvent {
                id: task.id.clone(),
                title: task.title.clone(),
                kind: EventKind::Task,
                date: due.to_string(),
            })
        });

    exam_events
        .chain(assignment_events)
        .chain(goal_events)
        .chain(task_events)
        .collect()
}

/// Events whose date equals `date` exactly (`YYYY-MM-DD`).
pub fn events_on<'a>(events: &'a [CalendarEvent], date: &str) -> Vec<&'a CalendarEvent> {
    events.iter().filter(|event| event.date == date).collect()
}
