//! UI Components for the image classifier page.
//!
//! # Layout Components
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`PredictWidget`] - Drop zone, buttons and request orchestration
//! - [`FilePreview`] - Selected image with name, size and type
//! - [`ResultPanel`] - Label, confidence bar, alternative chips, rationale, raw JSON
//! - [`ErrorPanel`] - Error region

mod hero;
mod footer;
mod upload;
mod file_preview;
mod result;
mod error_panel;

pub use hero::*;
pub use footer::*;
pub use upload::*;
pub use file_preview::*;
pub use result::*;
pub use error_panel::*;
