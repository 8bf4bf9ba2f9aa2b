//! Search over documents given on the command line

use duet::adapters::InvertedIndexer;
use duet::core::services::SearchEngine;
use duet::output::{OutputMode, Report, SearchResult};

/// Index `docs` and print the IDs matching `query`, best first
pub fn search(query: &str, docs: &[(String, String)], mode: OutputMode) {
    let mut engine = SearchEngine::new(InvertedIndexer::new());
    for (id, content) in docs {
        engine.add_document(id, content);
    }

    SearchResult {
        query: query.to_string(),
        results: engine.search(query),
    }
    .render(mode);
}
