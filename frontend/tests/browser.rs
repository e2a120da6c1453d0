//! Browser tests, run with `wasm-pack test --headless --firefox frontend`.

#![cfg(target_arch = "wasm32")]

use imgpredict::{FileLike, UiState, UploadWidget};
use imgpredict_frontend::BrowserFile;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{File, FilePropertyBag};

wasm_bindgen_test_configure!(run_in_browser);

fn make_file(name: &str, mime: &str, bytes: &[u8]) -> BrowserFile {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = FilePropertyBag::new();
    options.set_type(mime);
    let file = File::new_with_u8_array_sequence_and_options(&JsValue::from(parts), name, &options)
        .expect("File constructor");
    BrowserFile::new(file)
}

#[wasm_bindgen_test]
fn browser_file_metadata() {
    let file = make_file("cat.png", "image/png", &[1, 2, 3, 4]);
    assert_eq!(file.name(), "cat.png");
    assert_eq!(file.mime_type(), "image/png");
    assert_eq!(file.size(), 4);
    assert!(file.preview_url().map(|url| url.starts_with("blob:")).unwrap_or(false));
}

#[wasm_bindgen_test]
fn widget_accepts_browser_file() {
    let mut widget = UploadWidget::new();
    widget.accept_file(Some(make_file("cat.webp", "image/webp", &[0; 1536]))).unwrap();

    assert_eq!(widget.state(), &UiState::FilePreviewed);
    let view = widget.view();
    let file = view.file.unwrap();
    assert_eq!(file.size_text, "• 1.5 KB");
    assert!(file.preview_url.is_some());
    assert!(view.predict_enabled);
}

#[wasm_bindgen_test]
fn widget_rejects_gif() {
    let mut widget = UploadWidget::new();
    assert!(widget.accept_file(Some(make_file("a.gif", "image/gif", &[0]))).is_err());
    assert_eq!(widget.view().error.as_deref(), Some("Only PNG, JPG/JPEG, WEBP are allowed."));
    assert!(!widget.predict_enabled());
}
