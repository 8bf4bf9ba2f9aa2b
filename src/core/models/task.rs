//! Scheduled task model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A task tracked by the scheduler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs to be done
    pub description: String,
    /// When it is due
    pub due_date: NaiveDate,
    /// Whether the task has been completed
    pub completed: bool,
}

impl Task {
    /// Create an open task
    #[must_use]
    pub fn new(description: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            due_date,
            completed: false,
        }
    }
}
