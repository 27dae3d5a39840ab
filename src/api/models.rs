use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Body of `POST /api/youtube/download`
#[derive(Debug, Clone, Serialize)]
pub struct DownloadRequestBody<'a> {
    pub url: &'a str,
}

/// Successful response from `POST /api/youtube/download`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadResponse {
    pub video_id: String,
    pub download_url: String,
    pub filename: String,
    /// Server-side path; informational only.
    #[serde(default)]
    pub video_path: Option<String>,
}

/// Error body the backend attaches to non-2xx responses.
/// `detail` is usually a string but framework validation errors send a list.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<&str> {
        self.detail.as_ref().and_then(Value::as_str)
    }
}

/// Response from `GET /api/hello`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HelloResponse {
    pub message: String,
}

/// Response from `GET /api/weather`; the backend formats every value as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeatherReport {
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub feels_like: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub humidity: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Response from `GET /healthz`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub backend_origin: Url,
}

impl ApiConfig {
    pub fn new(backend_origin: Url) -> Self {
        Self { backend_origin }
    }

    /// Origin without a trailing slash, ready to have a root-relative path appended.
    pub fn origin(&self) -> &str {
        self.backend_origin.as_str().trim_end_matches('/')
    }
}
