//! # imgpredict - image upload widget core
//!
//! Pick or drop an image, validate it locally, upload it to `/predict`,
//! render the classification (label, confidence, alternatives, rationale).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  File pick  │────▶│ Validation  │────▶│  /predict   │────▶│ WidgetView  │
//! │  / drop     │     │ (type,size) │     │ (multipart) │     │ (render)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!                 all state held by UploadWidget (UiState enum)
//! ```
//!
//! This crate has no DOM code. The Leptos frontend and the `imgpredict`
//! CLI both drive an [`UploadWidget`] and draw its [`WidgetView`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use imgpredict::{predict, HttpTransport, LocalFile, UploadWidget};
//!
//! #[tokio::main]
//! async fn main() {
//!     let file = LocalFile::load("cat.png".as_ref()).await.unwrap();
//!     let mut widget = UploadWidget::new();
//!     widget.accept_file(Some(file)).unwrap();
//!
//!     let file = widget.begin_predict(0.0).unwrap();
//!     let outcome = predict(&HttpTransport::new("http://localhost:8000/predict"), &file).await;
//!     widget.finish_predict(outcome, 0.0);
//!     println!("{:?}", widget.view().result);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Limits, UI strings, endpoint configuration
//! - [`models`] - Files and prediction results
//! - [`validation`] - MIME type / size gating
//! - [`format`] - Byte size formatting
//! - [`widget`] - State machine and display model
//! - [`api`] - `/predict` transport and response handling

// Core modules
pub mod config;
pub mod error;
pub mod models;

pub mod format;
pub mod validation;

// Widget
pub mod widget;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Config, ACCEPTED_MIME_TYPES, MAX_FILE_SIZE};

pub use error::{
    CliError, CliResult, FileError, FileResult, PredictError, PredictResult, ValidationError,
    ValidationResult,
};

pub use models::{mime_from_name, FileLike, LocalFile, PredictionResult, SelectedFile};

pub use format::bytes_to_size;

pub use validation::{is_accepted_type, validate_file};

pub use widget::{FileView, ResultView, UiEvent, UiState, UploadWidget, WidgetView};

pub use api::{interpret_reply, predict, HttpReply, PredictTransport};

#[cfg(feature = "native")]
pub use api::HttpTransport;
