use crate::classifier::Prediction;
use crate::source::ImageRef;

/// Where the workflow is in its select → predict cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    ImageSelected,
    Predicting,
    Result,
    Failed,
}

/// Snapshot of the workflow, as rendered by the presentation layer. `result`
/// is present only in `Result`, `error` only in `Failed`; never both.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    pub image: Option<ImageRef>,
    pub status: Status,
    pub result: Option<Prediction>,
    pub error: Option<String>,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self {
            image: None,
            status: Status::Idle,
            result: None,
            error: None,
        }
    }
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events flowing through the workflow loop: user intents from the
/// presentation layer plus completions of the async work they trigger.
#[derive(Debug)]
pub enum WorkflowEvent {
    // Intents
    SelectFromGallery,
    CaptureFromCamera,
    Predict,

    // Completions
    ImagePicked(ImageRef),
    PickCancelled { source: &'static str },
    PickFailed { notice: &'static str, message: String },
    PredictionComplete(Prediction),
    PredictionFailed(String),
}

/// Pushed to the presentation layer after every state change.
#[derive(Debug, Clone)]
pub enum StateUpdate {
    Changed(WorkflowState),
    /// Transient notice that does not alter workflow state.
    Notice(String),
}
