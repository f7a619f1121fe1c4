//! Team entity and lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::course::CourseId;
use crate::domain::error::DomainError;
use crate::domain::student::StudentId;

/// Team identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("Team ID cannot be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a team.
///
/// Allowed transitions:
/// - `Forming -> Active` (reached the minimum size and was confirmed)
/// - `Forming -> Incomplete` (count dropped below the minimum)
/// - `Active -> Completed` (external event)
/// - any state `-> Dissolved` (terminal)
///
/// Everything else is rejected with a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TeamStatus {
    #[default]
    Forming,
    Incomplete,
    Active,
    Completed,
    Dissolved,
}

impl TeamStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Dissolved)
    }

    /// Check whether moving to `next` is a legal transition.
    pub fn can_transition_to(&self, next: TeamStatus) -> bool {
        matches!(
            (self, next),
            (Self::Forming, Self::Active)
                | (Self::Forming, Self::Incomplete)
                | (Self::Active, Self::Completed)
        ) || (next == Self::Dissolved && *self != Self::Dissolved)
    }
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forming => write!(f, "forming"),
            Self::Incomplete => write!(f, "incomplete"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
            Self::Dissolved => write!(f, "dissolved"),
        }
    }
}

/// Team entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    course_id: CourseId,
    creator_id: StudentId,
    /// Members excluding the creator
    members: Vec<StudentId>,
    /// Backend project this team works on, once assigned
    project_id: Option<u64>,
    status: TeamStatus,
    created_at: DateTime<Utc>,
}

impl Team {
    pub fn new(
        id: TeamId,
        name: impl Into<String>,
        course_id: CourseId,
        creator_id: StudentId,
        members: Vec<StudentId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            course_id,
            creator_id,
            members,
            project_id: None,
            status: TeamStatus::Forming,
            created_at: Utc::now(),
        }
    }

    pub fn with_project(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    pub fn creator_id(&self) -> &StudentId {
        &self.creator_id
    }

    pub fn members(&self) -> &[StudentId] {
        &self.members
    }

    pub fn project_id(&self) -> Option<u64> {
        self.project_id
    }

    /// Head count including the creator.
    pub fn total_members(&self) -> usize {
        1 + self.members.len()
    }

    pub fn status(&self) -> TeamStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Move the team to a new lifecycle state, rejecting illegal jumps.
    pub fn transition(&mut self, next: TeamStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::validation(format!(
                "Illegal team transition: {} -> {}",
                self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }
}
