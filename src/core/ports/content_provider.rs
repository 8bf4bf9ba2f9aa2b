//! Content provider port

use crate::core::models::PageContent;

/// Source of page fields for templates
#[cfg_attr(test, mockall::automock)]
pub trait ContentProvider {
    /// Fields for `page_name`
    fn get_content(&self, page_name: &str) -> Option<PageContent>;
}
