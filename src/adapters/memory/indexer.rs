//! Inverted word index
//!
//! Words are lower-cased and split on whitespace; punctuation stays part
//! of the word. Re-adding a document only adds words, it never forgets
//! the old ones.

use std::collections::HashMap;

use crate::core::ports::DocumentIndexer;

/// Word to document-ID index
#[derive(Debug, Clone, Default)]
pub struct InvertedIndexer {
    index: HashMap<String, Vec<String>>,
}

impl InvertedIndexer {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct indexed words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.index.len()
    }
}

impl DocumentIndexer for InvertedIndexer {
    fn add_document(&mut self, doc_id: &str, content: &str) -> bool {
        for word in content.to_lowercase().split_whitespace() {
            let docs = self.index.entry(word.to_string()).or_default();
            if !docs.iter().any(|d| d == doc_id) {
                docs.push(doc_id.to_string());
            }
        }
        true
    }

    fn get_documents_with_word(&self, word: &str) -> Vec<String> {
        self.index.get(&word.to_lowercase()).cloned().unwrap_or_default()
    }
}
