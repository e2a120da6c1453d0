//! Domain models for the upload widget.
//!
//! - [`FileLike`] - what the widget needs to know about a candidate file
//! - [`SelectedFile`] - the single file currently staged for upload
//! - [`LocalFile`] - an in-memory file (CLI, tests)
//! - [`PredictionResult`] - the classification returned by `/predict`

use serde_json::Value;

use crate::error::{PredictError, PredictResult};

// =============================================================================
// Files
// =============================================================================

/// A file as seen by the widget.
///
/// Implemented by the browser's `File` wrapper in the frontend and by
/// [`LocalFile`] here.
pub trait FileLike: Clone {
    /// File name, without directories.
    fn name(&self) -> String;

    /// Declared MIME type (may be empty).
    fn mime_type(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;

    /// Display-only reference to the content (object URL, path, ...).
    fn preview_url(&self) -> Option<String> {
        None
    }
}

/// The file staged for upload, with its metadata captured at acceptance.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<F> {
    /// Underlying file handle, sent as the multipart payload.
    pub file: F,
    /// File name
    pub name: String,
    /// MIME type
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
    /// Preview reference, if the platform can produce one
    pub preview_url: Option<String>,
}

impl<F: FileLike> SelectedFile<F> {
    /// Capture metadata from an accepted file.
    pub fn new(file: F) -> Self {
        Self {
            name: file.name(),
            mime_type: file.mime_type(),
            size: file.size(),
            preview_url: file.preview_url(),
            file,
        }
    }
}

/// A file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    /// Where the file came from, used as preview reference
    pub origin: Option<String>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
            origin: None,
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    #[cfg(feature = "native")]
    pub async fn load(path: &std::path::Path) -> crate::error::FileResult<Self> {
        use crate::error::FileError;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| FileError::NoFileName(path.display().to_string()))?
            .to_string();
        let bytes = tokio::fs::read(path).await.map_err(|source| FileError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self {
            mime_type: mime_from_name(&name).to_string(),
            name,
            bytes,
            origin: Some(path.display().to_string()),
        })
    }
}

impl FileLike for LocalFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn preview_url(&self) -> Option<String> {
        self.origin.clone()
    }
}

/// MIME type for a file name, by extension.
///
/// Unknown extensions map to `application/octet-stream`.
pub fn mime_from_name(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

// =============================================================================
// Prediction Result
// =============================================================================

/// Classification outcome parsed from `payload.result`.
///
/// Scalar fields are lenient: a wrong type shows as text or as absent.
/// `alternatives` must be a list (or missing/null). `raw` keeps the value
/// exactly as received, extra fields included.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub label: Option<String>,
    /// Only set when the server sent a JSON number
    pub confidence: Option<f64>,
    pub alternatives: Vec<String>,
    pub rationale: Option<String>,
    pub raw: Value,
}

impl PredictionResult {
    pub fn from_value(raw: Value) -> PredictResult<Self> {
        let label = raw.get("label").and_then(text_of);
        let confidence = raw.get("confidence").and_then(Value::as_f64);
        let alternatives = match raw.get("alternatives") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| text_of(item).unwrap_or_default())
                .collect(),
            Some(other) => {
                return Err(PredictError::InvalidResult(format!(
                    "alternatives must be a list, got {}",
                    other
                )))
            }
        };
        let rationale = raw.get("rationale").and_then(text_of);

        Ok(Self {
            label,
            confidence,
            alternatives,
            rationale,
            raw,
        })
    }

    /// The full result as 2-space indented JSON.
    pub fn raw_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

/// Text a value would show in a text node; `None` for null.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
