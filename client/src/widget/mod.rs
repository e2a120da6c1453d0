//! The upload widget.
//!
//! [`UploadWidget`] owns the selected file, the [`UiState`] and the status
//! line. Platform code feeds it user gestures and request outcomes, then
//! draws whatever [`UploadWidget::view`] returns.
//!
//! Timestamps are passed in as milliseconds so the widget stays free of
//! any clock (`Date.now()` in the browser, `Instant` in the CLI).

pub mod state;
pub mod view;

pub use state::{UiEvent, UiState};
pub use view::{FileView, ResultView, WidgetView};

use crate::config::STATUS_UPLOADING;
use crate::error::{PredictResult, ValidationResult};
use crate::format::round_half_up;
use crate::models::{FileLike, PredictionResult, SelectedFile};
use crate::validation::validate_file;

/// Upload widget state.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadWidget<F> {
    selected: Option<SelectedFile<F>>,
    state: UiState,
    status: String,
    started_at: Option<f64>,
}

impl<F: FileLike> UploadWidget<F> {
    pub fn new() -> Self {
        Self {
            selected: None,
            state: UiState::Idle,
            status: String::new(),
            started_at: None,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn selected(&self) -> Option<&SelectedFile<F>> {
        self.selected.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Predict is possible iff a file is staged and nothing is in flight.
    pub fn predict_enabled(&self) -> bool {
        self.selected.is_some() && !self.is_loading()
    }

    /// New files can be offered (picker, drop) iff nothing is in flight.
    pub fn picker_enabled(&self) -> bool {
        !self.is_loading()
    }

    fn apply(&mut self, event: UiEvent) {
        let from = self.state.name();
        self.state = std::mem::take(&mut self.state).transition(event);
        log::debug!("widget: {} -> {}", from, self.state.name());
    }

    // =========================================================================
    // User gestures
    // =========================================================================

    /// Stage a candidate file (from the picker or a drop).
    ///
    /// `None` is a no-op. A refused file leaves the current selection in
    /// place and shows the reason in the error region. Ignored while a
    /// request is in flight.
    pub fn accept_file(&mut self, candidate: Option<F>) -> ValidationResult<()> {
        let Some(file) = candidate else {
            return Ok(());
        };
        if self.is_loading() {
            log::warn!("Ignoring {} while a prediction is running", file.name());
            return Ok(());
        }

        if let Err(err) = validate_file(&file) {
            log::warn!("Rejected {}: {}", file.name(), err);
            self.apply(UiEvent::FileRejected(err.to_string()));
            return Err(err);
        }

        let selected = SelectedFile::new(file);
        log::info!("Selected {} ({}, {} bytes)", selected.name, selected.mime_type, selected.size);
        self.selected = Some(selected);
        self.apply(UiEvent::FileAccepted);
        Ok(())
    }

    /// Clear error, status and result; with `full`, drop the file as well.
    ///
    /// Ignored while a request is in flight.
    pub fn reset_ui(&mut self, full: bool) {
        if self.is_loading() {
            log::warn!("Ignoring reset while a prediction is running");
            return;
        }
        self.status.clear();
        if full {
            self.selected = None;
        }
        self.apply(UiEvent::Reset {
            file_selected: self.selected.is_some(),
        });
    }

    // =========================================================================
    // Prediction request
    // =========================================================================

    /// Enter `Loading` and hand back the file to upload.
    ///
    /// Returns `None` (and changes nothing) when predict is disabled.
    pub fn begin_predict(&mut self, now_ms: f64) -> Option<F> {
        if !self.predict_enabled() {
            return None;
        }
        self.reset_ui(false);

        let file = self.selected.as_ref()?.file.clone();
        self.status = STATUS_UPLOADING.to_string();
        self.started_at = Some(now_ms);
        self.apply(UiEvent::PredictStarted);
        log::info!("Uploading {}", file.name());
        Some(file)
    }

    /// Apply the outcome of the request started by [`Self::begin_predict`].
    pub fn finish_predict(&mut self, outcome: PredictResult<PredictionResult>, now_ms: f64) {
        if !self.is_loading() {
            log::warn!("Dropping prediction outcome: no request in flight");
            return;
        }

        let elapsed = (now_ms - self.started_at.take().unwrap_or(now_ms)).max(0.0);
        self.status = format!("Done in {:.0} ms", round_half_up(elapsed, 0));

        match outcome {
            Ok(result) => {
                log::info!(
                    "Prediction: {} ({})",
                    result.label.as_deref().unwrap_or("no label"),
                    self.status
                );
                self.apply(UiEvent::PredictSucceeded(result));
            }
            Err(err) => {
                log::warn!("Prediction failed: {}", err);
                self.apply(UiEvent::PredictFailed(err.display_message()));
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Every display field for the current state.
    pub fn view(&self) -> WidgetView {
        WidgetView {
            predict_enabled: self.predict_enabled(),
            loading: self.is_loading(),
            picker_enabled: self.picker_enabled(),
            status: self.status.clone(),
            file: self.selected.as_ref().map(FileView::from),
            result: self.state.result().map(ResultView::from),
            error: self.state.error().map(str::to_string),
        }
    }
}

impl<F: FileLike> Default for UploadWidget<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictError;
    use crate::models::LocalFile;
    use serde_json::json;

    fn png(name: &str) -> LocalFile {
        LocalFile::new(name, "image/png", vec![0; 2048])
    }

    #[test]
    fn test_accept_none_is_noop() {
        let mut widget = UploadWidget::<LocalFile>::new();
        assert!(widget.accept_file(None).is_ok());
        assert_eq!(widget.state(), &UiState::Idle);
        assert_eq!(widget.view(), WidgetView::default());
    }

    #[test]
    fn test_rejection_keeps_previous_file() {
        let mut widget = UploadWidget::new();
        widget.accept_file(Some(png("cat.png"))).unwrap();

        let gif = LocalFile::new("anim.gif", "image/gif", vec![0; 10]);
        assert!(widget.accept_file(Some(gif)).is_err());

        assert_eq!(widget.selected().map(|s| s.name.as_str()), Some("cat.png"));
        assert!(widget.predict_enabled());
        let view = widget.view();
        assert_eq!(view.error.as_deref(), Some("Only PNG, JPG/JPEG, WEBP are allowed."));
        assert_eq!(view.result, None);
    }

    #[test]
    fn test_accept_clears_error() {
        let mut widget = UploadWidget::new();
        let _ = widget.accept_file(Some(LocalFile::new("a.txt", "text/plain", vec![])));
        assert!(widget.view().error.is_some());

        widget.accept_file(Some(png("cat.png"))).unwrap();
        assert_eq!(widget.state(), &UiState::FilePreviewed);
        assert_eq!(widget.view().error, None);
    }

    #[test]
    fn test_begin_requires_file() {
        let mut widget = UploadWidget::<LocalFile>::new();
        assert_eq!(widget.begin_predict(0.0), None);
        assert_eq!(widget.state(), &UiState::Idle);
    }

    #[test]
    fn test_request_lifecycle() {
        let mut widget = UploadWidget::new();
        widget.accept_file(Some(png("cat.png"))).unwrap();

        let file = widget.begin_predict(1_000.0).unwrap();
        assert_eq!(file.name, "cat.png");
        assert!(widget.is_loading());
        assert!(!widget.predict_enabled());
        assert_eq!(widget.status(), STATUS_UPLOADING);
        // One request at a time
        assert_eq!(widget.begin_predict(1_001.0), None);

        let result = PredictionResult::from_value(json!({ "label": "cat" })).unwrap();
        widget.finish_predict(Ok(result), 1_234.4);

        assert_eq!(widget.status(), "Done in 234 ms");
        assert!(widget.predict_enabled());
        assert_eq!(widget.view().result.map(|r| r.label), Some("cat".to_string()));
    }

    #[test]
    fn test_new_request_clears_previous_outcome() {
        let mut widget = UploadWidget::new();
        widget.accept_file(Some(png("cat.png"))).unwrap();
        widget.begin_predict(0.0);
        widget.finish_predict(Err(PredictError::UnexpectedResponse), 5.0);
        assert!(widget.view().error.is_some());

        widget.begin_predict(10.0);
        let view = widget.view();
        assert_eq!(view.error, None);
        assert_eq!(view.result, None);
        assert!(view.file.is_some());
    }

    #[test]
    fn test_user_edits_ignored_while_loading() {
        let mut widget = UploadWidget::new();
        widget.accept_file(Some(png("cat.png"))).unwrap();
        widget.begin_predict(0.0);

        widget.accept_file(Some(png("dog.png"))).unwrap();
        widget.reset_ui(true);

        assert!(widget.is_loading());
        assert_eq!(widget.selected().map(|s| s.name.as_str()), Some("cat.png"));
    }

    #[test]
    fn test_picker_disabled_while_loading() {
        let mut widget = UploadWidget::new();
        assert!(widget.view().picker_enabled);

        widget.accept_file(Some(png("cat.png"))).unwrap();
        widget.begin_predict(0.0);
        assert!(!widget.view().picker_enabled);

        widget.finish_predict(Err(PredictError::UnexpectedResponse), 1.0);
        assert!(widget.view().picker_enabled);

        // The same file can be offered again once the request is over
        widget.accept_file(Some(png("dog.png"))).unwrap();
        assert_eq!(widget.selected().map(|s| s.name.as_str()), Some("dog.png"));
    }

    #[test]
    fn test_outcome_without_request_is_dropped() {
        let mut widget = UploadWidget::new();
        widget.accept_file(Some(png("cat.png"))).unwrap();
        widget.finish_predict(Err(PredictError::UnexpectedResponse), 5.0);
        assert_eq!(widget.state(), &UiState::FilePreviewed);
        assert_eq!(widget.status(), "");
    }

    #[test]
    fn test_partial_reset_keeps_file() {
        let mut widget = UploadWidget::new();
        widget.accept_file(Some(png("cat.png"))).unwrap();
        widget.begin_predict(0.0);
        widget.finish_predict(Err(PredictError::MissingResult), 1.0);

        widget.reset_ui(false);
        let view = widget.view();
        assert_eq!(view.status, "");
        assert_eq!(view.error, None);
        assert!(view.file.is_some());
        assert!(view.predict_enabled);
    }
}
