//! Prediction workflow state machine.
//!
//! Exactly one classification attempt exists at a time. The front-end's old
//! independent flags (`loading`, `result`, `error`, `preview`) could drift
//! out of sync; here the whole attempt lives in one tagged union, so illegal
//! combinations ("loading" with a result, an error next to a fresh
//! selection) are unrepresentable.
//!
//! Completions are generation-tagged: selecting a new image or resetting
//! while a request is in flight abandons that request, and its late outcome
//! is discarded instead of clobbering newer state.

use crate::classify::{normalize_full, ClassifierBackend, ClassifyError, NormalizedResult, RawPrediction};
use crate::image::ImageInput;

/// Where one classification attempt stands. `Result` and `Failed` are
/// resting states awaiting the next user action; there is no terminal state.
#[derive(Clone, Debug)]
pub enum WorkflowState {
    Idle,
    ImageSelected(ImageInput),
    Predicting(ImageInput),
    Result {
        image: ImageInput,
        result: NormalizedResult,
    },
    Failed {
        image: ImageInput,
        message: String,
    },
}

impl WorkflowState {
    pub fn is_predicting(&self) -> bool {
        matches!(self, WorkflowState::Predicting(_))
    }
}

/// Ticket for one in-flight attempt. Carries the image to submit and the
/// generation the attempt was issued under; `complete` refuses outcomes
/// whose generation no longer matches.
#[derive(Debug)]
pub struct Attempt {
    pub image: ImageInput,
    generation: u64,
}

impl Attempt {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct Workflow {
    state: WorkflowState,
    generation: u64,
}

impl Workflow {
    pub fn new() -> Self {
        Self {
            state: WorkflowState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Select a new image. Discards any previous result or error immediately
    /// and abandons an in-flight attempt (its late outcome will be stale).
    pub fn select_image(&mut self, image: ImageInput) {
        self.generation += 1;
        self.state = WorkflowState::ImageSelected(image);
    }

    /// Explicit reset: back to `Idle` with no retained image, result, or
    /// error. Any camera resource release is the image source's job.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = WorkflowState::Idle;
    }

    /// Start a classification attempt.
    ///
    /// Requires an active image; rejected from `Idle` without changing
    /// state, and rejected while another attempt is in flight. Allowed from
    /// `Result`/`Failed` so the user can retry without re-selecting.
    pub fn begin(&mut self) -> Result<Attempt, ClassifyError> {
        let image = match &self.state {
            WorkflowState::Idle => return Err(ClassifyError::NoImage),
            WorkflowState::Predicting(_) => return Err(ClassifyError::InFlight),
            WorkflowState::ImageSelected(image) => image.clone(),
            WorkflowState::Result { image, .. } => image.clone(),
            WorkflowState::Failed { image, .. } => image.clone(),
        };
        self.state = WorkflowState::Predicting(image.clone());
        Ok(Attempt {
            image,
            generation: self.generation,
        })
    }

    /// Commit the outcome of an attempt.
    ///
    /// Stale outcomes (generation mismatch, or the machine already moved out
    /// of `Predicting`) are discarded without touching the current state.
    pub fn complete(&mut self, attempt: Attempt, outcome: Result<RawPrediction, ClassifyError>) {
        if attempt.generation != self.generation || !self.state.is_predicting() {
            log::info!(
                "workflow: discarding stale outcome (attempt generation {}, current {})",
                attempt.generation,
                self.generation
            );
            return;
        }
        self.state = match outcome {
            Ok(raw) => WorkflowState::Result {
                image: attempt.image,
                result: normalize_full(&raw),
            },
            Err(err) => {
                if let ClassifyError::Parse(detail) = &err {
                    log::warn!("workflow: prediction response unparseable: {}", detail);
                }
                WorkflowState::Failed {
                    image: attempt.image,
                    message: err.user_message().to_string(),
                }
            }
        };
    }

    /// Run one attempt to completion against a backend: begin, classify,
    /// commit. This is the synchronous path the CLI drives.
    pub fn submit(
        &mut self,
        backend: &mut dyn ClassifierBackend,
    ) -> Result<NormalizedResult, ClassifyError> {
        let attempt = self.begin()?;
        let outcome = backend.classify(&attempt.image);
        let returned = outcome.clone();
        self.complete(attempt, outcome);
        returned.map(|raw| normalize_full(&raw))
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}
