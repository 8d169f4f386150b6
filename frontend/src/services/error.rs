use thiserror::Error;

/// Failure talking to the finance API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let error = ApiError::Status {
            status: 401,
            body: "Access denied".to_string(),
        };
        assert_eq!(error.to_string(), "Server error 401: Access denied");
        assert!(error.is_unauthorized());

        let error = ApiError::Network("connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: connection refused");
        assert!(!error.is_unauthorized());
    }
}
