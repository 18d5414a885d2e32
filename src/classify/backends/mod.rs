mod http;
mod stub;

pub use http::{HttpClassifier, HttpClassifierConfig};
pub use stub::StubClassifier;
