//! Error taxonomy for one classification attempt.
//!
//! Every variant is recovered at the workflow boundary and converted into a
//! user-visible message plus a `Failed` state; none of them should crash the
//! hosting application.

use std::fmt;

/// Generic retry-suggesting message shown when the failure carries no
/// server-provided diagnostic.
pub const GENERIC_FAILURE_MESSAGE: &str = "Erreur lors de la prédiction. Veuillez réessayer.";

/// Shown when classification is requested with no active image.
pub const NO_IMAGE_MESSAGE: &str = "Sélectionnez une image";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassifyError {
    /// Classification requested with no active image. Recovered locally;
    /// the workflow state is unchanged.
    NoImage,
    /// An attempt is already in flight; re-triggering is rejected until it
    /// resolves or is abandoned.
    InFlight,
    /// Transport failure reaching the endpoint.
    Network(String),
    /// Non-success HTTP status. `message` is the server's own diagnostic
    /// text when the body was non-empty, otherwise a generic fallback.
    Server { status: u16, message: String },
    /// Response body was not valid JSON or was missing required fields.
    Parse(String),
}

impl ClassifyError {
    /// Message safe to show the user directly.
    ///
    /// Server diagnostics are surfaced verbatim; transport and parse
    /// failures collapse to the generic retry message (parse failures are
    /// logged distinctly by the caller for diagnosis).
    pub fn user_message(&self) -> &str {
        match self {
            ClassifyError::NoImage => NO_IMAGE_MESSAGE,
            ClassifyError::InFlight => "Analyse en cours…",
            ClassifyError::Network(_) => GENERIC_FAILURE_MESSAGE,
            ClassifyError::Server { message, .. } => message,
            ClassifyError::Parse(_) => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::NoImage => write!(f, "no image selected"),
            ClassifyError::InFlight => write!(f, "classification already in progress"),
            ClassifyError::Network(detail) => write!(f, "network error: {}", detail),
            ClassifyError::Server { status, message } => {
                write!(f, "server error (status {}): {}", status, message)
            }
            ClassifyError::Parse(detail) => write!(f, "unparseable response: {}", detail),
        }
    }
}

impl std::error::Error for ClassifyError {}
