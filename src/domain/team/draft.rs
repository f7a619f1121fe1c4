//! Team draft being assembled before submission

use serde::{Deserialize, Serialize};

use crate::domain::course::CourseId;
use crate::domain::student::StudentId;

/// A prospective team: creator plus invited members, not yet submitted.
///
/// The creator is counted toward the size bounds but never appears in
/// `members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamDraft {
    pub name: String,
    pub creator_id: StudentId,
    pub course_id: CourseId,
    members: Vec<StudentId>,
}

impl TeamDraft {
    pub fn new(name: impl Into<String>, creator_id: StudentId, course_id: CourseId) -> Self {
        Self {
            name: name.into(),
            creator_id,
            course_id,
            members: Vec::new(),
        }
    }

    pub fn members(&self) -> &[StudentId] {
        &self.members
    }

    /// Head count including the creator.
    pub fn total_members(&self) -> usize {
        1 + self.members.len()
    }

    pub fn contains(&self, student_id: &StudentId) -> bool {
        self.members.contains(student_id)
    }

    /// Toggle a member in or out of the draft.
    ///
    /// Removing always succeeds. Adding is refused once the draft has
    /// reached `max_team_size` (selection-time guard; the submit-time
    /// validator independently re-checks the bound).
    pub fn toggle_member(&mut self, student_id: StudentId, max_team_size: usize) -> bool {
        if let Some(pos) = self.members.iter().position(|m| *m == student_id) {
            self.members.remove(pos);
            return true;
        }

        if self.total_members() >= max_team_size {
            return false;
        }

        self.members.push(student_id);
        true
    }

    /// Build a draft with a preselected member list, deduplicating while
    /// preserving order. The submit-time validator still reports duplicates
    /// arriving through other channels.
    pub fn with_members(mut self, members: Vec<StudentId>) -> Self {
        for m in members {
            if !self.members.contains(&m) {
                self.members.push(m);
            }
        }
        self
    }

    /// Raw member list, bypassing deduplication. Test and wire-ingestion
    /// seam for the duplicate-membership check.
    pub fn with_raw_members(mut self, members: Vec<StudentId>) -> Self {
        self.members = members;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TeamDraft {
        TeamDraft::new(
            "Team Alpha",
            StudentId::from("A"),
            CourseId::new("is1").unwrap(),
        )
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut d = draft();
        assert!(d.toggle_member(StudentId::from("B"), 3));
        assert_eq!(d.total_members(), 2);

        assert!(d.toggle_member(StudentId::from("B"), 3));
        assert_eq!(d.total_members(), 1);
        assert!(!d.contains(&StudentId::from("B")));
    }

    #[test]
    fn test_toggle_on_rejected_at_max() {
        let mut d = draft();
        assert!(d.toggle_member(StudentId::from("B"), 3));
        assert!(d.toggle_member(StudentId::from("C"), 3));
        // Draft is at 3 of 3; a fourth member would overflow.
        assert!(!d.toggle_member(StudentId::from("D"), 3));
        assert_eq!(d.total_members(), 3);
    }

    #[test]
    fn test_toggle_off_permitted_at_max() {
        let mut d = draft().with_members(vec![StudentId::from("B"), StudentId::from("C")]);
        assert!(d.toggle_member(StudentId::from("C"), 3));
        assert_eq!(d.total_members(), 2);
    }

    #[test]
    fn test_with_members_deduplicates() {
        let d = draft().with_members(vec![
            StudentId::from("B"),
            StudentId::from("B"),
            StudentId::from("C"),
        ]);
        assert_eq!(d.members().len(), 2);
    }
}
