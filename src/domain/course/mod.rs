//! Course registry types

mod entity;
mod repository;

pub use entity::{Course, CourseId, TeamBounds};
pub use repository::CourseRepository;

#[cfg(test)]
pub use repository::mock::MockCourseRepository;
