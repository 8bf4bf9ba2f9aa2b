//! Grade book port

/// Per-student course grades
#[cfg_attr(test, mockall::automock)]
pub trait GradeBook {
    /// Set the grade for one course, replacing any earlier grade
    fn add_grade(&mut self, student_id: &str, course: &str, grade: f64) -> bool;

    /// Mean of all grades recorded for the student
    fn get_average(&self, student_id: &str) -> Option<f64>;
}
