//! Student registry
//!
//! Only registered students may receive grades; everything else about
//! grades is the [`GradeBook`]'s business.

use std::collections::HashMap;

use log::debug;

use crate::core::ports::GradeBook;

/// Student enrolment in front of a grade book
#[derive(Debug)]
pub struct StudentRegistry<G> {
    grade_book: G,
    students: HashMap<String, String>,
}

impl<G: GradeBook> StudentRegistry<G> {
    /// Create a registry with nobody enrolled
    pub fn new(grade_book: G) -> Self {
        Self {
            grade_book,
            students: HashMap::new(),
        }
    }

    /// Enrol a student
    ///
    /// Returns `false` if the ID is taken; the existing name is kept.
    pub fn register_student(&mut self, student_id: &str, name: &str) -> bool {
        if self.students.contains_key(student_id) {
            return false;
        }
        self.students.insert(student_id.to_string(), name.to_string());
        true
    }

    /// Record a grade for a registered student
    pub fn add_course_grade(&mut self, student_id: &str, course: &str, grade: f64) -> bool {
        if !self.students.contains_key(student_id) {
            debug!("Grade for unregistered student {student_id} dropped");
            return false;
        }
        self.grade_book.add_grade(student_id, course, grade)
    }

    /// Name of a registered student
    #[must_use]
    pub fn student_name(&self, student_id: &str) -> Option<&str> {
        self.students.get(student_id).map(String::as_str)
    }

    /// The grade book
    pub const fn grade_book(&self) -> &G {
        &self.grade_book
    }
}
