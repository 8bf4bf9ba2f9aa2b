//! In-memory grade book

use std::collections::HashMap;

use crate::core::ports::GradeBook;

/// Grades keyed by student, then by course
#[derive(Debug, Clone, Default)]
pub struct InMemoryGradeBook {
    grades: HashMap<String, HashMap<String, f64>>,
}

impl InMemoryGradeBook {
    /// Create an empty grade book
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One course grade
    #[must_use]
    pub fn grade(&self, student_id: &str, course: &str) -> Option<f64> {
        self.grades.get(student_id)?.get(course).copied()
    }
}

impl GradeBook for InMemoryGradeBook {
    fn add_grade(&mut self, student_id: &str, course: &str, grade: f64) -> bool {
        self.grades
            .entry(student_id.to_string())
            .or_default()
            .insert(course.to_string(), grade);
        true
    }

    #[allow(clippy::cast_precision_loss)]
    fn get_average(&self, student_id: &str) -> Option<f64> {
        let courses = self.grades.get(student_id).filter(|c| !c.is_empty())?;
        let total: f64 = courses.values().sum();
        Some(total / courses.len() as f64)
    }
}
