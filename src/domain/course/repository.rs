//! Course repository trait

use async_trait::async_trait;

use super::entity::{Course, CourseId};
use crate::domain::DomainError;

/// Course registry: the external collaborator that owns course metadata,
/// including the team size bounds.
#[async_trait]
pub trait CourseRepository: Send + Sync + std::fmt::Debug {
    /// Get a course by ID
    async fn get(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;

    /// List all courses
    async fn list(&self) -> Result<Vec<Course>, DomainError>;
}
