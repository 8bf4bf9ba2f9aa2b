//! Static page content

use std::collections::HashMap;

use crate::core::models::PageContent;
use crate::core::ports::ContentProvider;

/// Page content held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticContentProvider {
    pages: HashMap<String, PageContent>,
}

impl StaticContentProvider {
    /// Create a provider with no pages
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with the homepage and about pages
    #[must_use]
    pub fn seeded() -> Self {
        let mut provider = Self::new();
        provider.set_page("homepage", [
            ("title", "Welcome to our site"),
            ("body", "This is the homepage content"),
        ]);
        provider.set_page("about", [
            ("title", "About Us"),
            ("body", "We are a company that does things"),
        ]);
        provider
    }

    /// Add or replace a page's fields
    pub fn set_page<I, K, V>(&mut self, page_name: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let content = fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.pages.insert(page_name.into(), content);
    }
}

impl ContentProvider for StaticContentProvider {
    fn get_content(&self, page_name: &str) -> Option<PageContent> {
        self.pages.get(page_name).cloned()
    }
}
