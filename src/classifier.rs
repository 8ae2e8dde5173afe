use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{PredictError, GENERIC_PREDICT_ERROR};
use crate::label;

/// Classification returned by the prediction service.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Raw prediction code (e.g. "ripe"); translated only for display.
    pub code: String,
    pub confidence: Option<f64>,
}

impl Prediction {
    /// One-line summary: translated label plus formatted confidence.
    pub fn display(&self) -> String {
        let name = label::translate(&self.code);
        let confidence = label::format_confidence(self.confidence);
        if confidence.is_empty() {
            name
        } else {
            format!("{name} ({confidence})")
        }
    }
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    image: &'a str,
}

#[derive(Deserialize)]
struct PredictResponse {
    prediction: Option<String>,
    confidence: Option<f64>,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    error: Option<String>,
}

/// A remote endpoint that classifies one base64-encoded image at a time.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, image_b64: &str) -> Result<Prediction, PredictError>;
}

/// reqwest-backed client for the ripeness model endpoint.
pub struct RemoteClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteClassifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PredictionService for RemoteClassifier {
    async fn predict(&self, image_b64: &str) -> Result<Prediction, PredictError> {
        log::info!("Sending image to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { image: image_b64 })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body: ErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .error
                .unwrap_or_else(|| GENERIC_PREDICT_ERROR.to_string());
            log::error!("Service error {status}: {message}");
            return Err(PredictError::Service { status, message });
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| PredictError::MalformedResponse(e.to_string()))?;

        let code = body
            .prediction
            .ok_or_else(|| PredictError::MalformedResponse("missing 'prediction' field".into()))?;

        log::info!(
            "Prediction: {code} (confidence {:?})",
            body.confidence
        );
        Ok(Prediction {
            code,
            confidence: body.confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on an ephemeral port and return
    /// the endpoint URL. Reads the whole request (headers plus body, per
    /// Content-Length) before answering.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if let Some(header_end) = request
                    .windows(4)
                    .position(|w| w == b"\r\n\r\n")
                    .map(|p| p + 4)
                {
                    let head = String::from_utf8_lossy(&request[..header_end]).to_lowercase();
                    let content_length = head
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if request.len() >= header_end + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{addr}/predict")
    }

    #[tokio::test]
    async fn parses_successful_prediction() {
        let endpoint = serve_once("200 OK", r#"{"prediction":"ripe","confidence":0.87}"#).await;
        let prediction = RemoteClassifier::new(endpoint)
            .predict("aGVsbG8=")
            .await
            .unwrap();

        assert_eq!(prediction.code, "ripe");
        assert_eq!(prediction.confidence, Some(0.87));
        assert_eq!(prediction.display(), "Maduro (87% de confianza)");
    }

    #[tokio::test]
    async fn confidence_may_be_absent() {
        let endpoint = serve_once("200 OK", r#"{"prediction":"unripe"}"#).await;
        let prediction = RemoteClassifier::new(endpoint)
            .predict("aGVsbG8=")
            .await
            .unwrap();

        assert_eq!(prediction.confidence, None);
        assert_eq!(prediction.display(), "Verde");
    }

    #[tokio::test]
    async fn error_field_becomes_service_message() {
        let endpoint = serve_once("400 Bad Request", r#"{"error":"imagen no valida"}"#).await;
        let err = RemoteClassifier::new(endpoint)
            .predict("aGVsbG8=")
            .await
            .unwrap_err();

        match err {
            PredictError::Service { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "imagen no valida");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_falls_back_to_generic() {
        let endpoint = serve_once("500 Internal Server Error", "boom").await;
        let err = RemoteClassifier::new(endpoint)
            .predict("aGVsbG8=")
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), GENERIC_PREDICT_ERROR);
    }

    #[tokio::test]
    async fn missing_prediction_field_is_malformed() {
        let endpoint = serve_once("200 OK", r#"{"confidence":0.5}"#).await;
        let err = RemoteClassifier::new(endpoint)
            .predict("aGVsbG8=")
            .await
            .unwrap_err();

        assert!(matches!(err, PredictError::MalformedResponse(_)));
        assert_eq!(err.user_message(), GENERIC_PREDICT_ERROR);
    }
}
