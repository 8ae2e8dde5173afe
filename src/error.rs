use thiserror::Error;

/// Fallback shown when a prediction fails without a usable service message.
pub const GENERIC_PREDICT_ERROR: &str = "Error al predecir la imagen";

/// Errors raised by the gallery and camera image sources.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("permission denied for {0}")]
    PermissionDenied(String),
    #[error("{0}")]
    Tool(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised while classifying an image against the remote service.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("could not read image: {0}")]
    Image(#[from] std::io::Error),
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("service returned {status}: {message}")]
    Service { status: u16, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl PredictError {
    /// Message suitable for the presentation layer. Service-provided error
    /// text is passed along; everything else collapses to the generic
    /// fallback so transport details never reach the user.
    pub fn user_message(&self) -> String {
        match self {
            PredictError::Service { message, .. } => message.clone(),
            _ => GENERIC_PREDICT_ERROR.to_string(),
        }
    }
}
