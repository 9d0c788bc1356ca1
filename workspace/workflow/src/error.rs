use thiserror::Error;

/// Failure modes of a prediction submission.
///
/// All of these resolve into [`crate::WorkflowState::Failed`]; none of them
/// propagate past the submit callback. A response that arrives after the
/// user has navigated away is not an error value at all — the reducer drops
/// it via the epoch check and the user never sees it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// Form input rejected before any request was sent.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The request could not be sent or no response was received.
    #[error("request failed: {0}")]
    Network(String),

    /// The service answered with a non-2xx status or an unreadable body.
    #[error("service error: {0}")]
    Service(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failure() {
        let err = PredictError::Validation("locality must not be empty".to_string());
        assert_eq!(err.to_string(), "invalid input: locality must not be empty");

        let err = PredictError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "request failed: connection refused");

        let err = PredictError::Service("HTTP 500".to_string());
        assert_eq!(err.to_string(), "service error: HTTP 500");
    }
}
