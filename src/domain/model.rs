use super::AppError;

/// A validated download submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    url: String,
}

impl DownloadRequest {
    /// Trims the raw input; whitespace-only input is rejected before any network call.
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let url = raw.trim();
        if url.is_empty() {
            return Err(AppError::Validation);
        }
        Ok(Self {
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A finished server-side download, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    pub video_id: String,
    /// Absolute URL or a path relative to the backend origin.
    pub download_url: String,
    pub filename: String,
}

/// Sequence number handed out per submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

impl RequestToken {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Pending,
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_trimmed() {
        let request = DownloadRequest::new("  https://youtu.be/abc123 \n").unwrap();
        assert_eq!(request.url(), "https://youtu.be/abc123");
    }

    #[test]
    fn test_blank_request_is_rejected() {
        assert_eq!(DownloadRequest::new(""), Err(AppError::Validation));
        assert_eq!(DownloadRequest::new(" \t\n "), Err(AppError::Validation));
    }

    #[test]
    fn test_tokens_increase() {
        let first = RequestToken::default().next();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second, RequestToken(2));
    }
}
