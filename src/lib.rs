//! Banana ripeness checker core.
//!
//! Modules:
//! - `app`: the classification workflow state machine and its events.
//! - `classifier`: reqwest client for the remote ripeness model.
//! - `gallery` / `camera`: image sources backed by external picker/capture tools.
//! - `source`: the opaque image handle and the `ImageSource` seam.
//! - `encode`: image-to-base64 payload encoding.
//! - `label`: prediction codes and their Spanish display strings.
//! - `config`: JSON configuration under the user config dir.
//! - `error`: shared error types.
//!
//! Re-exports are provided for the common types: `Config`,
//! `ClassificationWorkflow`, `RemoteClassifier`, and the state vocabulary.

pub mod app;
pub mod camera;
pub mod classifier;
pub mod config;
pub mod encode;
pub mod error;
pub mod gallery;
pub mod label;
pub mod source;

pub use app::{ClassificationWorkflow, StateUpdate, Status, WorkflowEvent, WorkflowState};
pub use camera::CameraCapture;
pub use classifier::{Prediction, PredictionService, RemoteClassifier};
pub use config::Config;
pub use gallery::GalleryPicker;
pub use source::{ImageRef, ImageSource};
