//! Content pairs: formatting, templates, search, images

use duet::Error;
use duet::adapters::{CsvFormatter, InMemoryImageStorage, InvertedIndexer, StaticContentProvider};
use duet::core::ports::{DataFormatter, DocumentIndexer};
use duet::core::services::{
    ImageProcessor, PAGE_NOT_FOUND, SearchEngine, TemplateError, TemplateRenderer,
};
use serde_json::json;

use crate::common::{people, record};

// =============================================================================
// CSV FORMATTING
// =============================================================================

#[test]
fn test_csv_header_and_rows() {
    let csv = CsvFormatter::new().format_to_csv(&people());
    assert_eq!(
        csv,
        "name,age,city\nAlice,30,New York\nBob,25,San Francisco"
    );
}

#[test]
fn test_csv_of_nothing_is_empty() {
    assert_eq!(CsvFormatter::new().format_to_csv(&[]), "");
}

#[test]
fn test_csv_rows_keep_their_own_key_order() {
    let data = vec![
        record(json!({"a": 1, "b": 2})),
        record(json!({"b": 3, "a": 4})),
    ];
    assert_eq!(CsvFormatter::new().format_to_csv(&data), "a,b\n1,2\n3,4");
}

#[test]
fn test_csv_renders_non_string_values_as_json() {
    let data = vec![record(json!({"ok": true, "tags": ["x"], "none": null}))];
    assert_eq!(
        CsvFormatter::new().format_to_csv(&data),
        "ok,tags,none\ntrue,[\"x\"],null"
    );
}

// =============================================================================
// TEMPLATES
// =============================================================================

#[test]
fn test_render_seeded_pages() {
    let renderer = TemplateRenderer::new(StaticContentProvider::seeded());

    assert_eq!(
        renderer.render("homepage").unwrap(),
        "<h1>Welcome to our site</h1><p>This is the homepage content</p>"
    );
    assert_eq!(
        renderer.render("about").unwrap(),
        "<div class='about'><h2>About Us</h2><div>We are a company that does things</div></div>"
    );
}

#[test]
fn test_render_unknown_page() {
    let renderer = TemplateRenderer::new(StaticContentProvider::seeded());
    assert_eq!(renderer.render("contact").unwrap(), PAGE_NOT_FOUND);
}

#[test]
fn test_render_page_without_template() {
    let mut provider = StaticContentProvider::seeded();
    provider.set_page("contact", [("title", "Contact")]);

    let renderer = TemplateRenderer::new(provider);
    assert_eq!(renderer.render("contact").unwrap(), PAGE_NOT_FOUND);
}

#[test]
fn test_render_page_with_empty_content() {
    let mut provider = StaticContentProvider::seeded();
    provider.set_page("homepage", std::iter::empty::<(String, String)>());

    let renderer = TemplateRenderer::new(provider);
    assert_eq!(renderer.render("homepage").unwrap(), PAGE_NOT_FOUND);
}

#[test]
fn test_render_custom_template_with_escaped_braces() {
    let mut renderer = TemplateRenderer::new(StaticContentProvider::seeded());
    renderer.set_template("about", "{{{title}}}");

    assert_eq!(renderer.render("about").unwrap(), "{About Us}");
}

#[test]
fn test_render_missing_field_is_an_error() {
    let mut renderer = TemplateRenderer::new(StaticContentProvider::seeded());
    renderer.set_template("homepage", "<p>{footer}</p>");

    let err = renderer.render("homepage").unwrap_err();
    assert!(matches!(
        err,
        Error::Template(TemplateError::MissingField { ref field, .. }) if field == "footer"
    ));
}

#[test]
fn test_render_unmatched_brace_is_an_error() {
    let mut renderer = TemplateRenderer::new(StaticContentProvider::seeded());
    renderer.set_template("homepage", "<p>{title</p>");

    let err = renderer.render("homepage").unwrap_err();
    assert!(matches!(
        err,
        Error::Template(TemplateError::UnmatchedBrace { brace: '{', offset: 3, .. })
    ));
}

// =============================================================================
// SEARCH
// =============================================================================

fn engine() -> SearchEngine<InvertedIndexer> {
    let mut engine = SearchEngine::new(InvertedIndexer::new());
    engine.add_document("doc1", "Rust is a programming language");
    engine.add_document("doc2", "Java is another programming language");
    engine.add_document("doc3", "Rust programming is fun");
    engine
}

#[test]
fn test_search_ranks_by_matching_words() {
    let engine = engine();
    assert_eq!(engine.search("rust programming"), vec!["doc1", "doc3", "doc2"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let engine = engine();
    assert_eq!(engine.search("JAVA"), vec!["doc2"]);
}

#[test]
fn test_search_without_matches() {
    let engine = engine();
    assert!(engine.search("haskell").is_empty());
    assert!(engine.search("").is_empty());
}

#[test]
fn test_search_counts_repeated_query_words() {
    let engine = engine();
    // "fun" only appears in doc3, but "rust rust" gives doc1 two points too
    assert_eq!(engine.search("fun rust rust"), vec!["doc3", "doc1"]);
}

#[test]
fn test_engine_keeps_documents() {
    let engine = engine();
    assert_eq!(engine.document("doc3"), Some("Rust programming is fun"));
    assert_eq!(engine.document("doc9"), None);
    assert_eq!(engine.indexer().word_count(), 8);
}

#[test]
fn test_indexer_lists_a_document_once_per_word() {
    let mut indexer = InvertedIndexer::new();
    indexer.add_document("d1", "rust Rust RUST is fast");

    assert_eq!(indexer.get_documents_with_word("rust"), vec!["d1"]);
    assert_eq!(indexer.word_count(), 3);
}

#[test]
fn test_reindexing_a_document_keeps_earlier_words() {
    let mut indexer = InvertedIndexer::new();
    indexer.add_document("d1", "old words");
    indexer.add_document("d1", "new words");

    assert_eq!(indexer.get_documents_with_word("old"), vec!["d1"]);
    assert_eq!(indexer.get_documents_with_word("new"), vec!["d1"]);
    assert_eq!(indexer.get_documents_with_word("words"), vec!["d1"]);
}

#[test]
fn test_readded_document_is_ranked_once() {
    let mut engine = SearchEngine::new(InvertedIndexer::new());
    engine.add_document("d1", "rust tips");
    engine.add_document("d1", "rust again");

    assert_eq!(engine.search("rust"), vec!["d1"]);
    assert_eq!(engine.document("d1"), Some("rust again"));
}

// =============================================================================
// IMAGES
// =============================================================================

#[test]
fn test_process_then_enhance() {
    let mut processor = ImageProcessor::new(InMemoryImageStorage::new());

    assert!(processor.process_and_save("img1", "pixels"));
    assert_eq!(
        processor.retrieve_and_enhance("img1").as_deref(),
        Some("enhanced_processed_pixels")
    );
    assert_eq!(processor.storage().len(), 1);
}

#[test]
fn test_enhance_missing_image() {
    let processor = ImageProcessor::new(InMemoryImageStorage::new());
    assert_eq!(processor.retrieve_and_enhance("nope"), None);
}

#[test]
fn test_processing_empty_data_still_stores_prefix() {
    let mut processor = ImageProcessor::new(InMemoryImageStorage::new());
    processor.process_and_save("blank", "");
    assert_eq!(
        processor.retrieve_and_enhance("blank").as_deref(),
        Some("enhanced_processed_")
    );
}

#[test]
fn test_saving_same_id_overwrites() {
    let mut processor = ImageProcessor::new(InMemoryImageStorage::new());

    assert!(processor.process_and_save("img1", "first"));
    assert!(processor.process_and_save("img1", "second"));

    assert_eq!(processor.storage().len(), 1);
    assert_eq!(
        processor.retrieve_and_enhance("img1").as_deref(),
        Some("enhanced_processed_second")
    );
}
