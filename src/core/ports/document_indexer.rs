//! Document indexer port

/// Word-to-document index
#[cfg_attr(test, mockall::automock)]
pub trait DocumentIndexer {
    /// Index every word of `content` under `doc_id`
    fn add_document(&mut self, doc_id: &str, content: &str) -> bool;

    /// IDs of documents containing `word`, case-insensitively
    fn get_documents_with_word(&self, word: &str) -> Vec<String>;
}
