/// Offline render and export tests
use folio_core::{record, CategoryFilter, ProjectCategory};
use folio_server::export;
use tempfile::TempDir;

#[test]
fn test_write_page_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("index.html");

    export::write_page(
        record::portfolio(),
        CategoryFilter::Only(ProjectCategory::DataScience),
        &path,
    )
    .unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("Analysis of Earthquake Data"));
    assert!(!html.contains("Quantum Machine Learning for Image Classification"));
}

#[test]
fn test_write_page_to_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("index.html");

    assert!(export::write_page(record::portfolio(), CategoryFilter::All, &path).is_err());
}

#[test]
fn test_record_json_round_trips() {
    let json = export::record_json(record::portfolio()).unwrap();
    let parsed: folio_core::PortfolioRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(&parsed, record::portfolio());
}
