//! HTTP classifier backend.
//!
//! Talks to the remote inference service: one `POST` per attempt with the
//! image as the sole field of a multipart/form-data body, JSON prediction
//! back. The service's own diagnostic text is preferred over a generic
//! message when a request fails with a non-success status.

use std::time::Duration;

use rand::Rng;

use crate::classify::backend::ClassifierBackend;
use crate::classify::error::{ClassifyError, GENERIC_FAILURE_MESSAGE};
use crate::classify::response::RawPrediction;
use crate::image::ImageInput;

/// Multipart field name the inference service expects.
const UPLOAD_FIELD: &str = "file";

#[derive(Clone, Debug)]
pub struct HttpClassifierConfig {
    /// Prediction endpoint URL.
    pub url: String,
    /// Overall request timeout.
    pub timeout: Duration,
}

impl Default for HttpClassifierConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:5000/predict".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

pub struct HttpClassifier {
    config: HttpClassifierConfig,
    agent: ureq::Agent,
}

impl HttpClassifier {
    pub fn new(config: HttpClassifierConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self { config, agent }
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

impl ClassifierBackend for HttpClassifier {
    fn name(&self) -> &'static str {
        "http"
    }

    fn classify(&mut self, image: &ImageInput) -> Result<RawPrediction, ClassifyError> {
        let boundary = multipart_boundary();
        let body = encode_multipart(&boundary, image);

        log::info!(
            "HttpClassifier: POST {} ({} bytes, {})",
            self.config.url,
            image.len(),
            image.mime()
        );

        let response = self
            .agent
            .post(&self.config.url)
            .set(
                "Content-Type",
                &format!("multipart/form-data; boundary={}", boundary),
            )
            .send_bytes(&body);

        let text = match response {
            Ok(response) => response
                .into_string()
                .map_err(|e| ClassifyError::Network(e.to_string()))?,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                let message = if body.trim().is_empty() {
                    GENERIC_FAILURE_MESSAGE.to_string()
                } else {
                    body
                };
                log::warn!("HttpClassifier: status {} from endpoint", status);
                return Err(ClassifyError::Server { status, message });
            }
            Err(err) => return Err(ClassifyError::Network(err.to_string())),
        };

        let raw: RawPrediction = serde_json::from_str(&text).map_err(|e| {
            log::warn!("HttpClassifier: unparseable prediction body: {}", e);
            ClassifyError::Parse(e.to_string())
        })?;

        log::info!(
            "HttpClassifier: predicted {} ({:.3})",
            raw.class,
            raw.confidence
        );
        Ok(raw)
    }
}

fn multipart_boundary() -> String {
    format!("heritage-{:016x}", rand::thread_rng().gen::<u64>())
}

/// Encode the image as the sole multipart/form-data field.
fn encode_multipart(boundary: &str, image: &ImageInput) -> Vec<u8> {
    let mut body = Vec::with_capacity(image.len() + 256);
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            UPLOAD_FIELD,
            image.file_name()
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", image.mime()).as_bytes());
    body.extend_from_slice(image.bytes());
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}
