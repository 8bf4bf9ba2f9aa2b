//! Page content and outgoing email

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named fields substituted into a page template
///
/// Usually `title` and `body`, but any field name may be used.
pub type PageContent = BTreeMap<String, String>;

/// An email handed to the email service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    /// Recipient address
    pub to: String,
    /// Message body
    pub message: String,
}
