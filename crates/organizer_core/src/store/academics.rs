//! Course, resource, assignment and exam mutations.

use super::{find, find_mut, remove_by_id, Collection, OrganizerStore};
use crate::clock::Clock;
use crate::kv::KvStore;
use crate::model::academics::{
    Assignment, AssignmentStatus, Attendance, Course, CourseResource, Exam, NewAssignment,
    NewCourse, NewExam, ResourceKind,
};
use crate::model::new_entity_id;

/// Label shown for assignments whose course no longer exists.
pub const UNKNOWN_COURSE_LABEL: &str = "Unknown Course";

impl<K: KvStore, C: Clock> OrganizerStore<K, C> {
    pub fn course(&self, id: &str) -> Option<&Course> {
        find(&self.data.courses, id)
    }

    /// Course name for an assignment, or a placeholder when it dangles.
    pub fn assignment_course_name(&self, assignment: &Assignment) -> &str {
        self.course(&assignment.course_id)
            .map_or(UNKNOWN_COURSE_LABEL, |course| course.name.as_str())
    }

    /// Adds a course with empty attendance and no resources.
    pub fn add_course(&mut self, new_course: NewCourse) -> Course {
        let course = Course {
            id: new_entity_id(),
            code: new_course.code,
            name: new_course.name,
            semester: new_course.semester,
            credits: new_course.credits,
            color: new_course.color,
            progress: None,
            grade: new_course.grade.filter(|grade| !grade.is_empty()),
            attendance: Attendance::default(),
            resources: Vec::new(),
        };
        self.data.courses.push(course.clone());
        self.persist(Collection::Courses);
        course
    }

    /// Removes a course. Assignments that reference it are left in place.
    pub fn delete_course(&mut self, id: &str) -> bool {
        let removed = remove_by_id(&mut self.data.courses, id);
        self.commit(Collection::Courses, removed)
    }

    /// Sets the letter grade. An empty grade clears it.
    pub fn update_course_grade(&mut self, id: &str, grade: impl Into<String>) -> bool {
        let grade = grade.into();
        let changed = match find_mut(&mut self.data.courses, id) {
            Some(course) => {
                course.grade = Some(grade).filter(|grade| !grade.is_empty());
                true
            }
            None => false,
        };
        self.commit(Collection::Courses, changed)
    }

    /// Overwrites attendance counters as given.
    pub fn update_course_attendance(&mut self, id: &str, attended: u32, total: u32) -> bool {
        let changed = match find_mut(&mut self.data.courses, id) {
            Some(course) => {
                course.attendance = Attendance { attended, total };
                true
            }
            None => false,
        };
        self.commit(Collection::Courses, changed)
    }

    /// Counts one more class, attended when `present`.
    pub fn record_attendance(&mut self, id: &str, present: bool) -> bool {
        let Some(current) = self.course(id).map(|course| course.attendance) else {
            return false;
        };
        let attended = if present {
            current.attended.saturating_add(1)
        } else {
            current.attended
        };
        self.update_course_attendance(id, attended, current.total.saturating_add(1))
    }

    pub fn add_course_resource(
        &mut self,
        course_id: &str,
        title: impl Into<String>,
        url: impl Into<String>,
        kind: ResourceKind,
    ) -> Option<CourseResource> {
        let course = find_mut(&mut self.data.courses, course_id)?;
        let resource = CourseResource {
            id: new_entity_id(),
            title: title.into(),
            kind,
            url: url.into(),
        };
        course.resources.push(resource.clone());
        self.persist(Collection::Courses);
        Some(resource)
    }

    pub fn delete_course_resource(&mut self, course_id: &str, resource_id: &str) -> bool {
        let changed = find_mut(&mut self.data.courses, course_id)
            .is_some_and(|course| remove_by_id(&mut course.resources, resource_id));
        self.commit(Collection::Courses, changed)
    }

    /// Adds a pending assignment. `course_id` is not checked.
    pub fn add_assignment(&mut self, new_assignment: NewAssignment) -> Assignment {
        let assignment = Assignment {
            id: new_entity_id(),
            title: new_assignment.title,
            course_id: new_assignment.course_id,
            due_date: new_assignment.due_date,
            status: AssignmentStatus::Pending,
            description: new_assignment.description,
        };
        self.data.assignments.push(assignment.clone());
        self.persist(Collection::Assignments);
        assignment
    }

    pub fn update_assignment_status(&mut self, id: &str, status: AssignmentStatus) -> bool {
        let changed = match find_mut(&mut self.data.assignments, id) {
            Some(assignment) => {
                assignment.status = status;
                true
            }
            None => false,
        };
        self.commit(Collection::Assignments, changed)
    }

    pub fn delete_assignment(&mut self, id: &str) -> bool {
        let removed = remove_by_id(&mut self.data.assignments, id);
        self.commit(Collection::Assignments, removed)
    }

    pub fn add_exam(&mut self, new_exam: NewExam) -> Exam {
        let exam = Exam {
            id: new_entity_id(),
            name: new_exam.name,
            course_name: new_exam.course_name,
            date: new_exam.date,
            syllabus: new_exam.syllabus,
            completed: false,
        };
        self.data.exams.push(exam.clone());
        self.persist(Collection::Exams);
        exam
    }

    pub fn delete_exam(&mut self, id: &str) -> bool {
        let removed = remove_by_id(&mut self.data.exams, id);
        self.commit(Collection::Exams, removed)
    }
}
