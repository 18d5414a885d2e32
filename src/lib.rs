//! Heritage AI classification workflow.
//!
//! This crate drives one classification attempt for the Moroccan handicraft
//! classifier: acquire an image, submit it to the remote inference service,
//! and normalize the untrusted response into a fully-populated three-entry
//! ranking safe to display.
//!
//! # Architecture
//!
//! - `labels`: the closed set of craft categories and their display metadata
//! - `image` / `acquire`: image payloads and their sources (file, gallery)
//! - `classify`: backend trait, HTTP and stub backends, the normalization
//!   contract
//! - `workflow`: the single state machine owning one attempt at a time,
//!   with generation-tagged completions so stale responses are discarded
//! - `feedback`: the email relay client, independent of classification
//! - `config`: file + env configuration for the binaries
//!
//! The inference model itself is an opaque external service; this crate
//! only depends on its wire contract.

pub mod acquire;
pub mod classify;
pub mod config;
pub mod feedback;
pub mod image;
pub mod labels;
pub mod workflow;

pub use acquire::{FileSource, GallerySource, ImageSource};
pub use classify::{
    normalize, normalize_full, percent, ClassifierBackend, ClassifyError, HttpClassifier,
    HttpClassifierConfig, NormalizedResult, RankedEntry, RawPrediction, StubClassifier,
    GENERIC_FAILURE_MESSAGE, NO_IMAGE_MESSAGE,
};
pub use config::ClassifierConfig;
pub use feedback::FeedbackClient;
pub use image::{ImageInput, Origin};
pub use labels::CraftLabel;
pub use workflow::{Attempt, Workflow, WorkflowState};
