use matchday_core::outcome::{classify_failure, Outcome};

/// Failure of a single football-data.org request
#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("HTTP {status} from {path}: {body}")]
    Status {
        status: u16,
        path: String,
        body: String,
    },

    #[error("Network error on {path}: {message}")]
    Network { path: String, message: String },

    #[error("Failed to parse response from {path}: {message}")]
    Decode { path: String, message: String },
}

impl GatewayError {
    /// HTTP status, when the server answered with a non-2xx response
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify the failure into the outcome reported for `subject`
    pub fn into_outcome(self, subject: &str) -> Outcome {
        classify_failure(self.status(), subject)
    }
}
