mod backend;
mod backends;
mod error;
mod normalize;
mod response;

pub use backend::ClassifierBackend;
pub use backends::{HttpClassifier, HttpClassifierConfig, StubClassifier};
pub use error::{ClassifyError, GENERIC_FAILURE_MESSAGE, NO_IMAGE_MESSAGE};
pub use normalize::{normalize, normalize_full};
pub use response::{percent, NormalizedResult, RankedEntry, RawPrediction};
