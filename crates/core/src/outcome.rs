//! Tagged result of a football operation
//!
//! Operations never surface structured errors to their callers. They return an
//! [`Outcome`], and the MCP or CLI boundary flattens it to text with
//! [`std::fmt::Display`].

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum Outcome {
    /// Formatted report
    Ok(String),
    /// Input rejected before any request was made
    ValidationError(String),
    /// Request succeeded but there was nothing to report
    NotFound(String),
    /// HTTP 401
    AuthError,
    /// HTTP 429
    RateLimited,
    /// HTTP 5xx
    UpstreamError,
    /// Anything else: other statuses, network faults, malformed bodies
    UnknownError { subject: String },
}

impl Outcome {
    /// Build an unknown-failure outcome for a report subject such as "standings"
    pub fn unknown(subject: impl Into<String>) -> Self {
        Outcome::UnknownError {
            subject: subject.into(),
        }
    }

    /// Whether the outcome should be flagged as an error to MCP clients
    ///
    /// `NotFound` is a successful lookup with an empty answer, so it is not.
    pub fn is_error(&self) -> bool {
        !matches!(self, Outcome::Ok(_) | Outcome::NotFound(_))
    }

    pub fn into_text(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ok(text) | Outcome::ValidationError(text) | Outcome::NotFound(text) => {
                write!(f, "{text}")
            }
            Outcome::AuthError => write!(f, "Authentication error: Please check your API key"),
            Outcome::RateLimited => write!(f, "Rate limit exceeded: Please try again later"),
            Outcome::UpstreamError => {
                write!(f, "Server error: Football API is temporarily unavailable")
            }
            Outcome::UnknownError { subject } => write!(f, "Error fetching {subject} from API"),
        }
    }
}

/// Map a failed request to an outcome
///
/// `status` is `None` for failures that never produced an HTTP response, or
/// whose body could not be decoded.
pub fn classify_failure(status: Option<u16>, subject: &str) -> Outcome {
    match status {
        Some(401) => Outcome::AuthError,
        Some(429) => Outcome::RateLimited,
        Some(s) if s >= 500 => Outcome::UpstreamError,
        _ => Outcome::unknown(subject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_failure_auth() {
        assert_eq!(classify_failure(Some(401), "standings"), Outcome::AuthError);
    }

    #[test]
    fn test_classify_failure_rate_limit() {
        assert_eq!(classify_failure(Some(429), "standings"), Outcome::RateLimited);
    }

    #[test]
    fn test_classify_failure_server_errors() {
        assert_eq!(classify_failure(Some(500), "x"), Outcome::UpstreamError);
        assert_eq!(classify_failure(Some(503), "x"), Outcome::UpstreamError);
    }

    #[test]
    fn test_classify_failure_other_status_is_unknown() {
        assert_eq!(
            classify_failure(Some(403), "top scorers").to_string(),
            "Error fetching top scorers from API"
        );
    }

    #[test]
    fn test_classify_failure_network_is_unknown() {
        assert_eq!(
            classify_failure(None, "live matches"),
            Outcome::unknown("live matches")
        );
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(
            Outcome::AuthError.to_string(),
            "Authentication error: Please check your API key"
        );
        assert_eq!(
            Outcome::RateLimited.to_string(),
            "Rate limit exceeded: Please try again later"
        );
        assert_eq!(
            Outcome::UpstreamError.to_string(),
            "Server error: Football API is temporarily unavailable"
        );
        assert_eq!(Outcome::Ok("report".to_string()).into_text(), "report");
    }

    #[test]
    fn test_outcome_is_error() {
        assert!(!Outcome::Ok(String::new()).is_error());
        assert!(!Outcome::NotFound("Team 'x' not found".to_string()).is_error());
        assert!(Outcome::ValidationError("bad".to_string()).is_error());
        assert!(Outcome::AuthError.is_error());
        assert!(Outcome::unknown("x").is_error());
    }
}
