//! UI state machine.
//!
//! ```text
//!            accept                 predict
//!   Idle ──────────▶ FilePreviewed ─────────▶ Loading
//!    ▲                 ▲   │ reject               │
//!    │ clear           │   ▼                      ├─ ok ──▶ ResultShown
//!    └──────────── ErrorShown ◀──── failure ──────┘
//! ```
//!
//! Result and error live inside the variants, so only one of them can
//! ever be on screen.

use crate::models::PredictionResult;

/// Current state of the widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    /// Nothing selected
    #[default]
    Idle,
    /// A file is staged, nothing else shown
    FilePreviewed,
    /// A request is in flight
    Loading,
    /// Last request succeeded
    ResultShown(PredictionResult),
    /// Message for the error region
    ErrorShown(String),
}

/// Something that happened to the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    FileAccepted,
    FileRejected(String),
    /// Display cleared; `file_selected` tells whether a file survives it.
    Reset { file_selected: bool },
    PredictStarted,
    PredictSucceeded(PredictionResult),
    PredictFailed(String),
}

impl UiState {
    /// Apply an event.
    ///
    /// While `Loading`, only the request outcome moves the state. Outcomes
    /// arriving in any other state are stale and dropped.
    pub fn transition(self, event: UiEvent) -> UiState {
        match (self, event) {
            (UiState::Loading, UiEvent::PredictSucceeded(result)) => UiState::ResultShown(result),
            (UiState::Loading, UiEvent::PredictFailed(message)) => UiState::ErrorShown(message),
            (UiState::Loading, _) => UiState::Loading,

            (state, UiEvent::PredictSucceeded(_)) | (state, UiEvent::PredictFailed(_)) => state,

            (_, UiEvent::FileAccepted) => UiState::FilePreviewed,
            (_, UiEvent::FileRejected(message)) => UiState::ErrorShown(message),
            (_, UiEvent::Reset { file_selected: true }) => UiState::FilePreviewed,
            (_, UiEvent::Reset { file_selected: false }) => UiState::Idle,
            (_, UiEvent::PredictStarted) => UiState::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            UiState::ResultShown(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::ErrorShown(message) => Some(message),
            _ => None,
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::FilePreviewed => "file-previewed",
            UiState::Loading => "loading",
            UiState::ResultShown(_) => "result-shown",
            UiState::ErrorShown(_) => "error-shown",
        }
    }
}
