//! Shared fixtures for catalog integration tests

/// A two-paper catalog in the on-disk JSON format.
pub const SMALL_CATALOG_JSON: &str = r#"[
  {
    "id": "a",
    "title": "Neural Networks in Medicine",
    "authors": ["Jennifer Brown"],
    "abstract": "Clinical deployments of diagnostic models.",
    "year": 2022,
    "journal": "The Lancet Digital Health",
    "citations": 98,
    "keywords": ["Machine Learning"],
    "category": "Medicine",
    "doi": "10.1000/a",
    "pdf_url": "https://example.org/a.pdf",
    "rating": 4.3
  },
  {
    "id": "b",
    "title": "Photosynthesis",
    "authors": ["Mei Lin"],
    "year": 2020,
    "keywords": ["Bio"],
    "category": "Biology"
  }
]"#;

/// Write `contents` to a fresh temporary file and return its handle.
pub fn write_temp_catalog(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("create temp catalog");
    file.write_all(contents.as_bytes())
        .expect("write temp catalog");
    file
}
