//! Error types for the upload widget.
//!
//! - [`ValidationError`] - client-side file gating (type, size)
//! - [`PredictError`] - everything that can go wrong with one `/predict` call
//! - [`FileError`] - loading a local file for the CLI
//! - [`CliError`] - top-level error for the `imgpredict` binary
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

use crate::config::MAX_FILE_SIZE;

// =============================================================================
// Validation Errors
// =============================================================================

/// A candidate file was refused before any request was made.
///
/// The `Display` text is exactly what the error region shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// MIME type is not one of the accepted image types.
    #[error("Only PNG, JPG/JPEG, WEBP are allowed.")]
    UnsupportedType(String),

    /// File is larger than [`MAX_FILE_SIZE`].
    #[error("File too large (max {}MB).", MAX_FILE_SIZE / (1024 * 1024))]
    TooLarge(u64),
}

// =============================================================================
// Prediction Errors
// =============================================================================

/// Failure of a single prediction request.
///
/// None of these are retried; each one ends the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    /// The endpoint answered with a non-2xx status.
    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },

    /// 2xx answer whose `ok` field is missing or falsy.
    #[error("Unexpected response.")]
    UnexpectedResponse,

    /// 2xx answer whose body is not JSON.
    #[error("Invalid JSON in response: {0}")]
    InvalidJson(String),

    /// `ok` was truthy but there is no `result` to render.
    #[error("Response is missing a result.")]
    MissingResult,

    /// `result` is present but a field has the wrong shape.
    #[error("Invalid result: {0}")]
    InvalidResult(String),

    /// The request failed before any response arrived.
    #[error("{0}")]
    Network(String),
}

impl PredictError {
    /// Text shown in the error region for a failed request.
    pub fn display_message(&self) -> String {
        format!("Error: {}", self)
    }
}

// =============================================================================
// Local File Errors
// =============================================================================

/// Errors while loading a file from disk.
#[derive(Debug, Error)]
pub enum FileError {
    /// Failed to read file.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Path has no usable file name.
    #[error("Not a file path: {0}")]
    NoFileName(String),
}

// =============================================================================
// CLI Errors (top-level)
// =============================================================================

/// Top-level error for the command line tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// Local file could not be loaded.
    #[error(transparent)]
    File(#[from] FileError),

    /// File was refused by client-side validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The prediction request failed.
    #[error("{}", .0.display_message())]
    Predict(#[from] PredictError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for file validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for prediction requests.
pub type PredictResult<T> = Result<T, PredictError>;

/// Result type for local file loading.
pub type FileResult<T> = Result<T, FileError>;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
