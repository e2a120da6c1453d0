//! Application configuration.
//!
//! Centralized configuration for the upload widget. Validation limits and
//! UI strings come from `imgpredict::config`; only browser concerns live
//! here.

/// Prediction endpoint.
///
/// Relative, so the widget talks to whatever origin served it.
pub const PREDICT_URL: &str = "/predict";

/// Page title.
pub const APP_NAME: &str = "Image Classifier";

/// `accept` attribute of the file picker.
pub const FILE_ACCEPT: &str = "image/png,image/jpeg,image/webp";

/// CSS classes of one alternative chip.
pub const CHIP_CLASS: &str = "px-2 py-1 rounded-full bg-gray-900 text-white text-xs";

/// Drop target classes: idle, while a file is dragged over it, and while
/// a prediction is running.
pub const DROPZONE_CLASS: &str = "dropzone";
pub const DROPZONE_ACTIVE_CLASS: &str = "dropzone ring-2 ring-blue-500";
pub const DROPZONE_DISABLED_CLASS: &str = "dropzone opacity-50 cursor-not-allowed";
