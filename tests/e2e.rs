//! End-to-end tests against the real pdfium and tesseract backends.
//!
//! These need both native libraries installed plus sample documents in
//! `./test_cases/`, so they are gated behind the `E2E_ENABLED` environment
//! variable and skip themselves when a prerequisite is missing.
//!
//! Run with:
//!   E2E_ENABLED=1 cargo test --test e2e -- --nocapture

use doc2text::{run, ErrorResult, RunConfig, RunError};
use std::io::Write;
use std::path::PathBuf;

fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_cases")
}

/// Skip this test unless E2E_ENABLED is set *and* the file at `path` exists.
macro_rules! e2e_skip_unless_ready {
    ($path:expr) => {{
        if std::env::var("E2E_ENABLED").is_err() {
            println!("SKIP — set E2E_ENABLED=1 to run e2e tests");
            return;
        }
        let p: PathBuf = $path;
        if !p.exists() {
            println!("SKIP — test file not found: {}", p.display());
            return;
        }
        p
    }};
}

#[test]
fn pdf_smoke_test() {
    let path = e2e_skip_unless_ready!(test_cases_dir().join("sample.pdf"));

    let pages = run(&path, &RunConfig::default()).expect("run should succeed");

    assert!(!pages.is_empty(), "sample.pdf must yield at least one page");
    for (i, page) in pages.iter().enumerate() {
        assert_eq!(page.page, i + 1, "page numbers must be 1..N in order");
    }

    println!(
        "[pdf-smoke] {} pages, {} bytes of text total",
        pages.len(),
        pages.iter().map(|p| p.text.len()).sum::<usize>()
    );
}

#[test]
fn image_smoke_test() {
    let path = e2e_skip_unless_ready!(test_cases_dir().join("page.png"));

    let pages = run(&path, &RunConfig::default()).expect("run should succeed");

    assert_eq!(pages.len(), 1, "a still image is exactly one page");
    assert_eq!(pages[0].page, 1);

    println!("[image-smoke] {} bytes of text", pages[0].text.len());
}

#[test]
fn garbage_pdf_produces_an_error_document() {
    if std::env::var("E2E_ENABLED").is_err() {
        println!("SKIP — set E2E_ENABLED=1 to run e2e tests");
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("garbage.pdf");
    let mut f = std::fs::File::create(&path).expect("create garbage file");
    f.write_all(b"this is not a pdf at all").expect("write");
    drop(f);

    let err = run(&path, &RunConfig::default()).expect_err("pdfium must reject garbage");

    assert!(matches!(err, RunError::Rasterize { .. }));
    let doc = ErrorResult::from(&err);
    assert!(!doc.error.is_empty(), "error message must not be empty");
    println!("[garbage-pdf] error: {}", doc.error);
}

#[test]
fn runs_are_deterministic_on_unchanged_input() {
    let path = e2e_skip_unless_ready!(test_cases_dir().join("sample.pdf"));

    let config = RunConfig::default();
    let first = run(&path, &config).expect("first run");
    let second = run(&path, &config).expect("second run");

    assert_eq!(first, second, "same input, same config, same output");
}
