//! Game world location

use serde::{Deserialize, Serialize};

/// A location and the items lying around in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Text shown when looking around
    pub description: String,
    /// Items that can be picked up, in placement order
    pub items: Vec<String>,
}

impl Location {
    /// Create a location with the given items
    #[must_use]
    pub fn new<I, S>(description: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            description: description.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `item` is present here
    #[must_use]
    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }
}
