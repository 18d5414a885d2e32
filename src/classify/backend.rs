use crate::classify::error::ClassifyError;
use crate::classify::response::RawPrediction;
use crate::image::ImageInput;

/// Classifier backend trait.
///
/// This is the seam between the workflow and the opaque inference service.
/// Implementations issue exactly one classification per `classify` call (no
/// automatic retry, no backoff) and must not retain the image beyond the
/// call.
pub trait ClassifierBackend: Send {
    /// Backend identifier.
    fn name(&self) -> &'static str;

    /// Classify a single image payload.
    fn classify(&mut self, image: &ImageInput) -> Result<RawPrediction, ClassifyError>;
}
