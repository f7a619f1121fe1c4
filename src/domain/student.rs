//! Student records referenced by drafts and memberships

use serde::{Deserialize, Serialize};

/// Student identifier (the backend keys students by email, but opaque
/// string IDs pass through unchanged)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(String);

impl StudentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
}

impl Student {
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_round_trip() {
        let id = StudentId::from("b@uni.edu");
        assert_eq!(id.as_str(), "b@uni.edu");
        assert_eq!(id.to_string(), "b@uni.edu");
    }

    #[test]
    fn test_student_record() {
        let student = Student::new("b@uni.edu", "B", "b@uni.edu");
        assert_eq!(student.id, StudentId::from("b@uni.edu"));
        assert_eq!(student.name, "B");
    }
}
