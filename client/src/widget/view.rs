//! Display model.
//!
//! Everything the widget puts on screen, as plain data. Renderers (the
//! Leptos component, the CLI) read a [`WidgetView`] and nothing else.

use crate::config::{NO_LABEL, PLACEHOLDER};
use crate::format::{bytes_to_size, round_half_up};
use crate::models::{PredictionResult, SelectedFile};

/// Full set of display fields for one widget state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidgetView {
    /// Predict button enabled
    pub predict_enabled: bool,
    /// Spinner visible; browse/clear disabled
    pub loading: bool,
    /// Drop zone and picker take new files
    pub picker_enabled: bool,
    /// Status line (empty when nothing to say)
    pub status: String,
    /// Preview block, present iff a file is selected
    pub file: Option<FileView>,
    /// Result region, present iff visible
    pub result: Option<ResultView>,
    /// Error region text, present iff visible
    pub error: Option<String>,
}

/// Preview and metadata of the selected file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileView {
    pub preview_url: Option<String>,
    pub name: String,
    /// e.g. `• 1.5 KB`
    pub size_text: String,
    /// e.g. `• image/png`
    pub type_text: String,
}

impl<F> From<&SelectedFile<F>> for FileView {
    fn from(selected: &SelectedFile<F>) -> Self {
        Self {
            preview_url: selected.preview_url.clone(),
            name: selected.name.clone(),
            size_text: format!("• {}", bytes_to_size(selected.size)),
            type_text: format!("• {}", selected.mime_type),
        }
    }
}

/// Rendered prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub label: String,
    /// Whole percent (`87%`) or placeholder
    pub confidence_text: String,
    /// Bar width in percent, 0 to 100, unrounded
    pub confidence_percent: f64,
    /// One chip per entry, in order
    pub alternatives: Vec<String>,
    pub rationale: String,
    /// Pretty-printed result
    pub raw_json: String,
}

impl ResultView {
    /// CSS width for the confidence bar.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.confidence_percent)
    }
}

impl From<&PredictionResult> for ResultView {
    fn from(result: &PredictionResult) -> Self {
        let (confidence_text, confidence_percent) = match result.confidence {
            Some(confidence) => {
                // `+ 0.0` turns a clamped -0.0 into 0.0
                let percent = confidence.clamp(0.0, 1.0) * 100.0 + 0.0;
                (format!("{:.0}%", round_half_up(percent, 0)), percent)
            }
            None => (PLACEHOLDER.to_string(), 0.0),
        };

        Self {
            label: result.label.clone().unwrap_or_else(|| NO_LABEL.to_string()),
            confidence_text,
            confidence_percent,
            alternatives: result.alternatives.clone(),
            rationale: result.rationale.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
            raw_json: result.raw_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalFile;
    use serde_json::json;

    fn render(value: serde_json::Value) -> ResultView {
        ResultView::from(&PredictionResult::from_value(value).unwrap())
    }

    #[test]
    fn test_render_full_result() {
        let view = render(json!({
            "label": "cat",
            "confidence": 0.87,
            "alternatives": ["dog", "fox"],
            "rationale": "fur pattern"
        }));

        assert_eq!(view.label, "cat");
        assert_eq!(view.confidence_text, "87%");
        assert_eq!(view.bar_width(), "87%");
        assert_eq!(view.alternatives, vec!["dog", "fox"]);
        assert_eq!(view.rationale, "fur pattern");
        assert!(view.raw_json.contains("\"label\": \"cat\""));
    }

    #[test]
    fn test_render_placeholders() {
        let view = render(json!({}));
        assert_eq!(view.label, NO_LABEL);
        assert_eq!(view.confidence_text, PLACEHOLDER);
        assert_eq!(view.bar_width(), "0%");
        assert!(view.alternatives.is_empty());
        assert_eq!(view.rationale, PLACEHOLDER);
        assert_eq!(view.raw_json, "{}");
    }

    #[test]
    fn test_confidence_is_clamped() {
        let view = render(json!({ "confidence": 1.7 }));
        assert_eq!(view.confidence_text, "100%");
        assert_eq!(view.bar_width(), "100%");

        let view = render(json!({ "confidence": -0.2 }));
        assert_eq!(view.confidence_text, "0%");
        assert_eq!(view.bar_width(), "0%");

        for zero in [r#"{"confidence":-0.0}"#, r#"{"confidence":-0}"#] {
            let view = render(serde_json::from_str(zero).unwrap());
            assert_eq!(view.confidence_text, "0%", "{zero}");
            assert_eq!(view.bar_width(), "0%", "{zero}");
        }
    }

    #[test]
    fn test_confidence_text_rounds_bar_does_not() {
        let view = render(json!({ "confidence": 0.125 }));
        assert_eq!(view.confidence_text, "13%");
        assert!((view.confidence_percent - 12.5).abs() < 1e-9);

        let view = render(json!({ "confidence": 0.5 }));
        assert_eq!(view.bar_width(), "50%");
    }

    #[test]
    fn test_file_view_metadata() {
        let selected = SelectedFile::new(LocalFile::new("cat.png", "image/png", vec![0; 1536]));
        let view = FileView::from(&selected);
        assert_eq!(view.name, "cat.png");
        assert_eq!(view.size_text, "• 1.5 KB");
        assert_eq!(view.type_text, "• image/png");
    }
}
