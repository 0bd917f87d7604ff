//! Grade points, SGPA, attendance and goal progress.

use super::percentage;
use crate::model::academics::Course;
use crate::model::planning::Goal;

/// Letter grades accepted for SGPA, best first.
pub const GRADE_SCALE: [(&str, f64); 8] = [
    ("O", 10.0),
    ("A+", 9.0),
    ("A", 8.0),
    ("B+", 7.0),
    ("B", 6.0),
    ("C", 5.0),
    ("P", 4.0),
    ("F", 0.0),
];

/// Point value of a letter grade, or `None` when unrecognized.
pub fn grade_points(grade: &str) -> Option<f64> {
    GRADE_SCALE
        .iter()
        .find(|(letter, _)| *letter == grade)
        .map(|(_, points)| *points)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GradeSummary {
    /// Credit-weighted average; 0 when nothing is graded.
    pub sgpa: f64,
    pub total_credits: f64,
    pub graded_courses: usize,
}

impl GradeSummary {
    /// Two-decimal display form, e.g. `7.33`.
    pub fn display(&self) -> String {
        format!("{:.2}", self.sgpa)
    }
}

/// Σ(points × credits) / Σ(credits) over courses with a recognized grade.
pub fn sgpa(courses: &[Course]) -> GradeSummary {
    let mut summary = GradeSummary::default();
    let mut total_points = 0.0;

    for course in courses {
        let Some(points) = course.grade.as_deref().and_then(grade_points) else {
            continue;
        };
        summary.total_credits += course.credits;
        total_points += points * course.credits;
        summary.graded_courses += 1;
    }

    if summary.total_credits > 0.0 {
        summary.sgpa = total_points / summary.total_credits;
    }
    summary
}

/// `round(attended / total * 100)`, 0 when no classes were held.
pub fn attendance_percentage(course: &Course) -> u32 {
    percentage(
        f64::from(course.attendance.attended),
        f64::from(course.attendance.total),
    )
}

/// Completion percent capped at 100 and floored at 0.
pub fn goal_progress(goal: &Goal) -> u32 {
    percentage(goal.current, goal.target).min(100)
}
