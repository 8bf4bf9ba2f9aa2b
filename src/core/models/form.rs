//! Form submission results

use serde::{Deserialize, Serialize};

/// Data accepted by the last successful form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Submitted email
    pub email: String,
    /// Submitted password
    pub password: String,
}

/// Outcome of submitting a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOutcome {
    /// Whether the submission was accepted
    pub success: bool,
    /// Validation messages explaining a rejection
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl FormOutcome {
    /// An accepted submission
    #[must_use]
    pub const fn accepted() -> Self {
        Self {
            success: true,
            errors: Vec::new(),
        }
    }

    /// A rejected submission with the validator's messages
    #[must_use]
    pub const fn rejected(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
        }
    }
}
