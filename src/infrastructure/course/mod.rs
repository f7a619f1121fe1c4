//! In-memory course registry seeded with the software-engineering catalog

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::course::{Course, CourseId, CourseRepository, TeamBounds};
use crate::domain::DomainError;

/// Default team size bounds applied to catalog courses.
const DEFAULT_BOUNDS: (usize, usize) = (2, 3);

/// Course registry backed by the static curriculum catalog.
///
/// The backend does not yet expose course metadata, so the gateway ships
/// the known catalog. Swapping in a backend-driven repository only needs
/// another `CourseRepository` impl.
#[derive(Debug)]
pub struct CatalogCourseRepository {
    courses: HashMap<String, Course>,
}

impl CatalogCourseRepository {
    /// Registry with the software-engineering curriculum.
    pub fn new() -> Self {
        let catalog: [(&str, &str, u8); 8] = [
            ("1", "Fundamentos de Programación", 1),
            ("2", "Estructuras de Datos", 2),
            ("3", "Algoritmos y Complejidad", 3),
            ("4", "Ingeniería de Software I", 4),
            ("5", "Bases de Datos", 4),
            ("6", "Ingeniería de Software II", 5),
            ("7", "Arquitectura de Software", 6),
            ("8", "Proyecto de Grado", 8),
        ];

        let bounds = TeamBounds::new(DEFAULT_BOUNDS.0, DEFAULT_BOUNDS.1)
            .expect("default bounds are valid");

        let courses = catalog
            .into_iter()
            .map(|(id, name, semester)| {
                let course_id = CourseId::new(id).expect("catalog ids are non-empty");
                (
                    id.to_string(),
                    Course::new(course_id, name, semester, bounds),
                )
            })
            .collect();

        Self { courses }
    }

    /// Registry with explicit courses (tests, alternative catalogs).
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: courses
                .into_iter()
                .map(|c| (c.id().as_str().to_string(), c))
                .collect(),
        }
    }
}

impl Default for CatalogCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseRepository for CatalogCourseRepository {
    async fn get(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        Ok(self.courses.get(id.as_str()).cloned())
    }

    async fn list(&self) -> Result<Vec<Course>, DomainError> {
        let mut courses: Vec<Course> = self.courses.values().cloned().collect();
        courses.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_is_seeded() {
        let repo = CatalogCourseRepository::new();
        let courses = repo.list().await.unwrap();
        assert_eq!(courses.len(), 8);

        let is1 = repo
            .get(&CourseId::new("4").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(is1.name(), "Ingeniería de Software I");
        assert_eq!(is1.bounds().min_team_size, 2);
        assert_eq!(is1.bounds().max_team_size, 3);
    }

    #[tokio::test]
    async fn test_unknown_course_is_none() {
        let repo = CatalogCourseRepository::new();
        let missing = repo.get(&CourseId::new("99").unwrap()).await.unwrap();
        assert!(missing.is_none());
    }
}
