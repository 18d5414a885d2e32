//! Wire and display types for prediction results.

use serde::{Deserialize, Serialize};

use crate::labels::CraftLabel;

/// One `{class, confidence}` pair of a ranking.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub class: CraftLabel,
    pub confidence: f32,
}

impl RankedEntry {
    pub fn new(class: CraftLabel, confidence: f32) -> Self {
        Self { class, confidence }
    }
}

/// Untrusted payload returned by the inference service.
///
/// The service is only contractually required to return the top label and
/// its confidence. `top3` is optional, may be shorter than 3 entries, is not
/// guaranteed sorted, and its confidences need not sum to 1.
#[derive(Clone, Debug, Deserialize)]
pub struct RawPrediction {
    pub class: CraftLabel,
    pub confidence: f32,
    #[serde(default)]
    pub top3: Option<Vec<RankedEntry>>,
}

/// Display-ready ranked result the workflow guarantees to produce.
///
/// `ranking[0]` always equals `top`. When the result was synthesized from a
/// top-1-only response, the second and third confidences are a fixed decay of
/// the top confidence, a presentation affordance with no statistical meaning.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedResult {
    pub top: RankedEntry,
    pub ranking: Vec<RankedEntry>,
}

impl NormalizedResult {
    pub fn top_label(&self) -> CraftLabel {
        self.top.class
    }

    pub fn top_confidence(&self) -> f32 {
        self.top.confidence
    }
}

/// Confidence as a one-decimal percent string (`0.8` -> `"80.0"`), the same
/// formatting the result card always used.
pub fn percent(confidence: f32) -> String {
    format!("{:.1}", confidence * 100.0)
}
