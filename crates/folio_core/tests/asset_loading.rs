use folio_core::{Catalog, CatalogError, ConfigError, PageConfig};
use std::io::Write;

#[test]
fn catalog_loads_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let catalog = folio_core::default_catalog();
    let raw = serde_json::to_string(&catalog).expect("serialize catalog");
    file.write_all(raw.as_bytes()).expect("write catalog");

    let loaded = Catalog::load(file.path()).expect("load catalog");
    assert_eq!(loaded.projects(), catalog.as_slice());

    let json = serde_json::to_value(&catalog[0]).expect("to value");
    assert_eq!(json["demoLink"], "#");
    assert_eq!(json["codeLink"], "#");
}

#[test]
fn catalog_missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.json");
    let err = Catalog::load(&path).expect_err("missing file");
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn catalog_file_with_script_link_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let mut catalog = folio_core::default_catalog();
    catalog[2].demo_link = "javascript:alert(document.cookie)".to_string();
    let raw = serde_json::to_string(&catalog).expect("serialize catalog");
    file.write_all(raw.as_bytes()).expect("write catalog");

    let err = Catalog::load(file.path()).expect_err("unsafe link");
    match err {
        CatalogError::UnsafeLink { title, .. } => assert_eq!(title, "Mobile Application"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_loads_overrides_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(br##"{"header_clearance": 64, "nav_links": ["#top"]}"##)
        .expect("write config");

    let config = PageConfig::load(file.path()).expect("load config");
    assert_eq!(config.header_clearance, 64.0);
    assert_eq!(config.nav_links, vec!["#top".to_string()]);
    assert_eq!(config.scrolled_threshold, 50.0);
}

#[test]
fn config_rejects_malformed_json() {
    let err = PageConfig::from_json_str("{not json").expect_err("malformed");
    assert!(matches!(err, ConfigError::Parse(_)));
}
