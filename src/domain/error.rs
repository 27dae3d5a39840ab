use thiserror::Error;

use crate::api::ApiError;

/// Fallback shown when the backend rejects a download without a readable reason.
pub const GENERIC_DOWNLOAD_FAILURE: &str = "Download failed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Please enter a YouTube URL.")]
    Validation,

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Application(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { message, .. } => AppError::Application(message),
            other => AppError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_is_shown_verbatim() {
        let err: AppError = ApiError::Status {
            status: 429,
            message: "quota exceeded".to_string(),
        }
        .into();
        assert_eq!(err, AppError::Application("quota exceeded".to_string()));
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn test_invalid_response_becomes_transport_error() {
        let err: AppError = ApiError::InvalidResponse("expected value".to_string()).into();
        assert!(matches!(err, AppError::Transport(_)));
        assert_eq!(err.to_string(), "Invalid response format: expected value");
    }
}
