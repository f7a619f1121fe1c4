//! Course entity and team size bounds

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Course identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("Course ID cannot be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team size bounds a course imposes on its teams.
///
/// Both bounds are positive and `min <= max`, enforced at construction so
/// the validator never sees an inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBounds {
    pub min_team_size: usize,
    pub max_team_size: usize,
}

impl TeamBounds {
    pub fn new(min_team_size: usize, max_team_size: usize) -> Result<Self, DomainError> {
        if min_team_size == 0 {
            return Err(DomainError::validation(
                "Minimum team size must be positive",
            ));
        }
        if min_team_size > max_team_size {
            return Err(DomainError::validation(format!(
                "Minimum team size {} exceeds maximum {}",
                min_team_size, max_team_size
            )));
        }
        Ok(Self {
            min_team_size,
            max_team_size,
        })
    }
}

/// Course entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    name: String,
    semester: u8,
    active: bool,
    bounds: TeamBounds,
}

impl Course {
    pub fn new(
        id: CourseId,
        name: impl Into<String>,
        semester: u8,
        bounds: TeamBounds,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            semester,
            active: true,
            bounds,
        }
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn semester(&self) -> u8 {
        self.semester
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn bounds(&self) -> &TeamBounds {
        &self.bounds
    }
}
