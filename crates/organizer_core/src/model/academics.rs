//! Courses, their resources, assignments and exams.

use super::{impl_identified, EntityId, ModelError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Attended vs. held class sessions. Callers keep `attended <= total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    pub attended: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Pdf,
    Link,
    Doc,
}

impl FromStr for ResourceKind {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "link" => Ok(Self::Link),
            "doc" => Ok(Self::Doc),
            _ => Err(ModelError::UnknownVariant {
                field: "resource type",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseResource {
    pub id: EntityId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: EntityId,
    pub code: String,
    pub name: String,
    pub semester: String,
    pub credits: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    /// Letter grade such as `A+`; see `insights::grades`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default)]
    pub attendance: Attendance,
    #[serde(default)]
    pub resources: Vec<CourseResource>,
}

/// Caller-supplied fields for a new course.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub code: String,
    pub name: String,
    pub semester: String,
    pub credits: f64,
    pub color: Option<String>,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStatus {
    #[default]
    Pending,
    #[serde(rename = "submitted")]
    Submitted,
    #[serde(rename = "graded")]
    Graded,
}

impl FromStr for AssignmentStatus {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "submitted" => Ok(Self::Submitted),
            "graded" => Ok(Self::Graded),
            _ => Err(ModelError::UnknownVariant {
                field: "assignment status",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: EntityId,
    pub title: String,
    /// Soft reference to `Course::id`; may dangle after course deletion.
    pub course_id: EntityId,
    pub due_date: String,
    pub status: AssignmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    pub title: String,
    pub course_id: EntityId,
    pub due_date: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: EntityId,
    pub name: String,
    pub course_name: String,
    pub date: String,
    pub syllabus: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExam {
    pub name: String,
    pub course_name: String,
    pub date: String,
    pub syllabus: String,
}

impl_identified!(Course, CourseResource, Assignment, Exam);

#[cfg(test)]
mod tests {
    use super::{Assignment, AssignmentStatus, Course};

    #[test]
    fn assignment_status_keeps_mixed_case_wire_names() {
        let pending = serde_json::to_string(&AssignmentStatus::Pending).unwrap();
        let graded = serde_json::to_string(&AssignmentStatus::Graded).unwrap();
        assert_eq!(pending, "\"Pending\"");
        assert_eq!(graded, "\"graded\"");

        let raw = r#"{"id":"a","title":"Lab 1","courseId":"c","dueDate":"2024-02-02","status":"submitted"}"#;
        let assignment: Assignment = serde_json::from_str(raw).unwrap();
        assert_eq!(assignment.status, AssignmentStatus::Submitted);
    }

    #[test]
    fn course_without_attendance_defaults_to_zero() {
        let raw = r#"{"id":"c","code":"CS101","name":"Intro","semester":"1","credits":4}"#;
        let course: Course = serde_json::from_str(raw).unwrap();
        assert_eq!(course.attendance.total, 0);
        assert!(course.resources.is_empty());
    }
}
