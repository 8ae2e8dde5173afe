use std::sync::Arc;

use super::state::{StateUpdate, Status, WorkflowEvent, WorkflowState};
use crate::classifier::PredictionService;
use crate::encode;
use crate::error::PredictError;
use crate::source::ImageSource;

const PICK_FAILED_NOTICE: &str = "No se pudo seleccionar la imagen";
const CAPTURE_FAILED_NOTICE: &str = "No se pudo tomar la foto";
const NO_IMAGE_NOTICE: &str = "Por favor selecciona una imagen primero";

/// Drives the select → predict state machine and owns the single outstanding
/// request. Intents and task completions arrive on one event channel; every
/// state change is pushed to the presentation layer as a `StateUpdate`.
pub struct ClassificationWorkflow {
    state: WorkflowState,
    gallery: Arc<dyn ImageSource>,
    camera: Arc<dyn ImageSource>,
    service: Arc<dyn PredictionService>,
    events: async_channel::Sender<WorkflowEvent>,
    updates: async_channel::Sender<StateUpdate>,
}

impl ClassificationWorkflow {
    pub fn new(
        gallery: Arc<dyn ImageSource>,
        camera: Arc<dyn ImageSource>,
        service: Arc<dyn PredictionService>,
        events: async_channel::Sender<WorkflowEvent>,
        updates: async_channel::Sender<StateUpdate>,
    ) -> Self {
        Self {
            state: WorkflowState::new(),
            gallery,
            camera,
            service,
            events,
            updates,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Process events until the channel closes.
    pub async fn run(mut self, rx: async_channel::Receiver<WorkflowEvent>) {
        while let Ok(event) = rx.recv().await {
            self.handle_event(event).await;
        }
    }

    /// Core state machine.
    pub async fn handle_event(&mut self, event: WorkflowEvent) {
        match event {
            WorkflowEvent::SelectFromGallery => {
                self.dispatch_pick(self.gallery.clone(), PICK_FAILED_NOTICE);
            }
            WorkflowEvent::CaptureFromCamera => {
                self.dispatch_pick(self.camera.clone(), CAPTURE_FAILED_NOTICE);
            }
            WorkflowEvent::Predict => self.dispatch_predict().await,
            WorkflowEvent::ImagePicked(image) => {
                log::info!("Image selected: {}", image.path().display());
                self.state.image = Some(image);
                self.state.result = None;
                self.state.error = None;
                self.state.status = Status::ImageSelected;
                self.push_state().await;
            }
            WorkflowEvent::PickCancelled { source } => {
                log::debug!("{source} pick cancelled");
            }
            WorkflowEvent::PickFailed { notice, message } => {
                // The prior image and result stay as they were.
                log::error!("Image pick failed: {message}");
                self.notify(notice).await;
            }
            WorkflowEvent::PredictionComplete(prediction) => {
                self.state.result = Some(prediction);
                self.state.error = None;
                self.state.status = Status::Result;
                self.push_state().await;
            }
            WorkflowEvent::PredictionFailed(message) => {
                self.state.result = None;
                self.state.error = Some(message);
                self.state.status = Status::Failed;
                self.push_state().await;
            }
        }
    }

    fn dispatch_pick(&self, source: Arc<dyn ImageSource>, notice: &'static str) {
        if self.state.status == Status::Predicting {
            log::info!("Ignoring {} pick while a request is in flight", source.name());
            return;
        }

        let events = self.events.clone();
        tokio::spawn(async move {
            let name = source.name();
            let event = match source.pick().await {
                Ok(Some(image)) => WorkflowEvent::ImagePicked(image),
                Ok(None) => WorkflowEvent::PickCancelled { source: name },
                Err(e) => WorkflowEvent::PickFailed {
                    notice,
                    message: format!("{name}: {e}"),
                },
            };
            let _ = events.send(event).await;
        });
    }

    async fn dispatch_predict(&mut self) {
        if self.state.status == Status::Predicting {
            log::info!("Ignoring predict while a request is in flight");
            return;
        }

        let image = match &self.state.image {
            Some(image) => image.clone(),
            None => {
                self.notify(NO_IMAGE_NOTICE).await;
                return;
            }
        };

        self.state.result = None;
        self.state.error = None;
        self.state.status = Status::Predicting;
        self.push_state().await;

        let service = self.service.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome: Result<_, PredictError> = async {
                let payload = encode::image_to_base64(&image).await?;
                service.predict(&payload).await
            }
            .await;

            let event = match outcome {
                Ok(prediction) => WorkflowEvent::PredictionComplete(prediction),
                Err(e) => {
                    log::error!("Prediction failed: {e}");
                    WorkflowEvent::PredictionFailed(e.user_message())
                }
            };
            let _ = events.send(event).await;
        });
    }

    async fn push_state(&self) {
        let _ = self
            .updates
            .send(StateUpdate::Changed(self.state.clone()))
            .await;
    }

    async fn notify(&self, message: &str) {
        let _ = self
            .updates
            .send(StateUpdate::Notice(message.to_string()))
            .await;
    }
}
