use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::models::{
    ApiConfig, DownloadRequestBody, DownloadResponse, ErrorBody, HealthResponse, HelloResponse,
    WeatherReport,
};
use crate::domain::GENERIC_DOWNLOAD_FAILURE;

const DOWNLOAD_PATH: &str = "/api/youtube/download";
const HELLO_PATH: &str = "/api/hello";
const WEATHER_PATH: &str = "/api/weather";
const HEALTH_PATH: &str = "/healthz";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the backend's `detail` or a fallback.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.origin(), path)
    }

    /// Turns a response into `T`, or into `ApiError::Status` carrying the
    /// backend's `detail` (or `fallback` when there is none).
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message().map(str::to_string))
                .unwrap_or_else(|| fallback.to_string());
            tracing::warn!(status = status.as_u16(), %message, "backend returned an error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("JSON decode error: {}", e)))
    }

    /// Ask the backend to fetch `video_url` server-side.
    pub async fn request_download(&self, video_url: &str) -> Result<DownloadResponse> {
        let endpoint = self.endpoint(DOWNLOAD_PATH);
        tracing::info!(%endpoint, video_url, "requesting server-side download");

        let response = self
            .http
            .post(&endpoint)
            .json(&DownloadRequestBody { url: video_url })
            .send()
            .await?;

        self.handle_response(response, GENERIC_DOWNLOAD_FAILURE).await
    }

    pub async fn hello(&self) -> Result<HelloResponse> {
        let response = self.http.get(self.endpoint(HELLO_PATH)).send().await?;
        self.handle_response(response, "Greeting unavailable").await
    }

    pub async fn weather(&self) -> Result<WeatherReport> {
        let response = self.http.get(self.endpoint(WEATHER_PATH)).send().await?;
        self.handle_response(response, "Weather unavailable").await
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self.http.get(self.endpoint(HEALTH_PATH)).send().await?;
        self.handle_response(response, "Backend unavailable").await
    }

    /// Stream the file behind an already resolved download link.
    /// Returns (total_size, stream)
    pub async fn download_file_stream(
        &self,
        download_url: &str,
    ) -> Result<(Option<u64>, BoxStream<'static, Result<bytes::Bytes>>)> {
        let response = self.http.get(download_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: format!("File request failed with status {}", status),
            });
        }

        let total_size = response.content_length();
        let stream = response
            .bytes_stream()
            .map_err(ApiError::RequestError)
            .boxed();

        Ok((total_size, stream))
    }
}
