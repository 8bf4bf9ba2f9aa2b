//! Search engine
//!
//! Scores documents by how many query words they contain (repeated query
//! words count again) and ranks by score. Ties keep the order in which
//! documents first turned up while scanning the query.

use std::collections::HashMap;

use crate::core::ports::DocumentIndexer;

/// Keyword search over a [`DocumentIndexer`]
#[derive(Debug)]
pub struct SearchEngine<I> {
    indexer: I,
    documents: HashMap<String, String>,
}

impl<I: DocumentIndexer> SearchEngine<I> {
    /// Create an engine with no documents
    pub fn new(indexer: I) -> Self {
        Self {
            indexer,
            documents: HashMap::new(),
        }
    }

    /// Store and index a document
    pub fn add_document(&mut self, doc_id: &str, content: &str) -> bool {
        self.documents.insert(doc_id.to_string(), content.to_string());
        self.indexer.add_document(doc_id, content);
        true
    }

    /// Rank document IDs against `query`
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<String> {
        let mut ranked: Vec<(String, usize)> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();

        for word in query.to_lowercase().split_whitespace() {
            for doc_id in self.indexer.get_documents_with_word(word) {
                if let Some(&slot) = slots.get(&doc_id) {
                    ranked[slot].1 += 1;
                } else {
                    slots.insert(doc_id.clone(), ranked.len());
                    ranked.push((doc_id, 1));
                }
            }
        }

        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().map(|(doc_id, _)| doc_id).collect()
    }

    /// Stored content of a document
    #[must_use]
    pub fn document(&self, doc_id: &str) -> Option<&str> {
        self.documents.get(doc_id).map(String::as_str)
    }

    /// The indexer
    pub const fn indexer(&self) -> &I {
        &self.indexer
    }
}
