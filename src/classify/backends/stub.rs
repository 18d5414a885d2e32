use crate::classify::backend::ClassifierBackend;
use crate::classify::error::ClassifyError;
use crate::classify::response::{RankedEntry, RawPrediction};
use crate::image::ImageInput;
use crate::labels::CraftLabel;

/// Stub backend for tests and offline demos. Returns a fixed prediction
/// regardless of input and counts how often it was invoked.
pub struct StubClassifier {
    class: CraftLabel,
    confidence: f32,
    top3: Option<Vec<RankedEntry>>,
    calls: usize,
}

impl StubClassifier {
    pub fn new(class: CraftLabel, confidence: f32) -> Self {
        Self {
            class,
            confidence,
            top3: None,
            calls: 0,
        }
    }

    /// Have the stub return a server-provided ranking instead of top-1 only.
    pub fn with_top3(mut self, top3: Vec<RankedEntry>) -> Self {
        self.top3 = Some(top3);
        self
    }

    /// Number of classifications issued so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Default for StubClassifier {
    fn default() -> Self {
        Self::new(CraftLabel::Poterie, 0.92)
    }
}

impl ClassifierBackend for StubClassifier {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn classify(&mut self, _image: &ImageInput) -> Result<RawPrediction, ClassifyError> {
        self.calls += 1;
        Ok(RawPrediction {
            class: self.class,
            confidence: self.confidence,
            top3: self.top3.clone(),
        })
    }
}
