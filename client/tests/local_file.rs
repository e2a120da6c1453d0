//! Loading files from disk for the CLI.

#![cfg(feature = "native")]

use imgpredict::{validate_file, FileError, LocalFile, UploadWidget, ValidationError};
use tempfile::tempdir;

#[tokio::test]
async fn test_load_png_from_disk() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("cat.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

    let file = LocalFile::load(&path).await.unwrap();
    assert_eq!(file.name, "cat.png");
    assert_eq!(file.mime_type, "image/png");
    assert_eq!(file.bytes.len(), 4);
    assert_eq!(file.origin.as_deref(), path.to_str());
    assert!(validate_file(&file).is_ok());
}

#[tokio::test]
async fn test_unknown_extension_is_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let file = LocalFile::load(&path).await.unwrap();
    let mut widget = UploadWidget::new();
    let err = widget.accept_file(Some(file)).unwrap_err();
    assert!(matches!(err, ValidationError::UnsupportedType(_)));
    assert!(widget.selected().is_none());
}

#[tokio::test]
async fn test_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = LocalFile::load(&dir.path().join("nope.png")).await.unwrap_err();
    assert!(matches!(err, FileError::Io { .. }));
    assert!(err.to_string().contains("nope.png"));
}

#[tokio::test]
async fn test_preview_is_source_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("owl.webp");
    std::fs::write(&path, [0u8; 16]).unwrap();

    let mut widget = UploadWidget::new();
    widget.accept_file(Some(LocalFile::load(&path).await.unwrap())).unwrap();

    let file = widget.view().file.unwrap();
    assert_eq!(file.preview_url.as_deref(), path.to_str());
    assert_eq!(file.size_text, "• 16.0 B");
    assert_eq!(file.type_text, "• image/webp");
}
