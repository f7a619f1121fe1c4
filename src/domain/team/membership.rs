//! Existing team memberships, keyed by course then student
//!
//! Supplied by the team registry (backend listings); read-only to the
//! validator.

use std::collections::HashMap;

use crate::domain::course::CourseId;
use crate::domain::student::StudentId;

/// Which team each student currently belongs to, per course.
#[derive(Debug, Clone, Default)]
pub struct MembershipIndex {
    by_course: HashMap<CourseId, HashMap<StudentId, String>>,
}

impl MembershipIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a student belongs to `team_name` in a course.
    pub fn assign(
        &mut self,
        course_id: CourseId,
        student_id: StudentId,
        team_name: impl Into<String>,
    ) {
        self.by_course
            .entry(course_id)
            .or_default()
            .insert(student_id, team_name.into());
    }

    /// The team a student currently holds in a course, if any.
    pub fn team_of(&self, course_id: &CourseId, student_id: &StudentId) -> Option<&str> {
        self.by_course
            .get(course_id)?
            .get(student_id)
            .map(String::as_str)
    }

    pub fn is_assigned(&self, course_id: &CourseId, student_id: &StudentId) -> bool {
        self.team_of(course_id, student_id).is_some()
    }
}
