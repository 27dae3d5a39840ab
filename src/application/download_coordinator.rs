use std::path::PathBuf;

use futures::{stream::BoxStream, StreamExt};
use tokio::io::AsyncWriteExt;

use crate::{
    api::ApiClient,
    domain::{AppError, DownloadRequest, DownloadResult},
    utils::sanitize_filename,
};

#[derive(Debug, Clone)]
pub enum SaveEvent {
    Progress(f32),
    Completed(PathBuf),
    Failed(AppError),
}

#[derive(Clone)]
pub struct DownloadCoordinator {
    api_client: ApiClient,
}

impl DownloadCoordinator {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api_client
    }

    /// One POST per call; the backend does the actual fetching.
    pub async fn request_download(
        &self,
        request: DownloadRequest,
    ) -> Result<DownloadResult, AppError> {
        let response = self.api_client.request_download(request.url()).await?;

        tracing::info!(
            video_id = %response.video_id,
            filename = %response.filename,
            "server-side download ready"
        );

        Ok(DownloadResult {
            video_id: response.video_id,
            download_url: response.download_url,
            filename: response.filename,
        })
    }

    pub async fn choose_save_path(&self, filename: String) -> Option<PathBuf> {
        rfd::AsyncFileDialog::new()
            .set_file_name(sanitize_filename(&filename))
            .save_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    }

    /// Streams `href` into `path`, yielding progress and a final event.
    /// The file is only created once the server answered with a body, and is
    /// removed again if the transfer fails part way.
    pub fn save_stream(&self, href: String, path: PathBuf) -> BoxStream<'static, SaveEvent> {
        let client = self.api_client.clone();

        futures::stream::once(async move { SaveJob::open(&client, &href, path).await })
            .flat_map(|opened| {
                let (first, job) = match opened {
                    Ok(job) => (SaveEvent::Progress(0.0), Some(job)),
                    Err(e) => (SaveEvent::Failed(e), None),
                };
                let rest = futures::stream::unfold(job, |job| async move {
                    match job {
                        Some(job) => job.advance().await,
                        None => None,
                    }
                });
                futures::stream::once(futures::future::ready(first)).chain(rest)
            })
            .boxed()
    }
}

/// An in-flight save: the open target file and the remaining body.
struct SaveJob {
    file: tokio::fs::File,
    body: BoxStream<'static, crate::api::Result<bytes::Bytes>>,
    written: u64,
    total: Option<u64>,
    path: PathBuf,
}

impl SaveJob {
    async fn open(client: &ApiClient, href: &str, path: PathBuf) -> Result<Self, AppError> {
        let (total, body) = client.download_file_stream(href).await?;

        let file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| AppError::Io(format!("Failed to create file: {}", e)))?;

        tracing::info!(%href, path = %path.display(), ?total, "saving file");

        Ok(Self {
            file,
            body,
            written: 0,
            total,
            path,
        })
    }

    /// Pulls one chunk; `None` for the job means this was the last event.
    async fn advance(mut self) -> Option<(SaveEvent, Option<Self>)> {
        let event = match self.body.next().await {
            Some(Ok(chunk)) => {
                if let Err(e) = self.file.write_all(&chunk).await {
                    let err = AppError::Io(format!("Write error: {}", e));
                    return Some((self.abandon(err).await, None));
                }
                self.written += chunk.len() as u64;
                let progress = self.progress();
                return Some((SaveEvent::Progress(progress), Some(self)));
            }
            Some(Err(e)) => self.abandon(e.into()).await,
            None => self.finish().await,
        };
        Some((event, None))
    }

    // Unknown length reports 0 until the body ends.
    fn progress(&self) -> f32 {
        match self.total {
            Some(total) if total > 0 => self.written as f32 / total as f32,
            _ => 0.0,
        }
    }

    async fn finish(self) -> SaveEvent {
        if let Err(e) = self.file.sync_all().await {
            return self
                .abandon(AppError::Io(format!("Failed to sync file: {}", e)))
                .await;
        }
        tracing::info!(bytes = self.written, path = %self.path.display(), "file saved");
        SaveEvent::Completed(self.path)
    }

    async fn abandon(self, err: AppError) -> SaveEvent {
        let Self { file, path, .. } = self;
        drop(file);

        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove partial file");
        }
        tracing::warn!(path = %path.display(), error = %err, "save abandoned");
        SaveEvent::Failed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiConfig;
    use serde_json::json;
    use url::Url;

    fn coordinator_for(server: &mockito::Server) -> DownloadCoordinator {
        let origin = Url::parse(&server.url()).unwrap();
        DownloadCoordinator::new(ApiClient::new(ApiConfig::new(origin)))
    }

    fn request(raw: &str) -> DownloadRequest {
        DownloadRequest::new(raw).unwrap()
    }

    #[tokio::test]
    async fn test_request_is_trimmed_and_mapped() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/youtube/download")
            .match_body(mockito::Matcher::Json(
                json!({ "url": "https://youtu.be/abc123" }),
            ))
            .with_status(200)
            .with_body(
                json!({
                    "video_id": "abc123",
                    "filename": "abc123.mp4",
                    "download_url": "/api/youtube/downloads/abc123"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let result = coordinator_for(&server)
            .request_download(request("  https://youtu.be/abc123  "))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            result,
            DownloadResult {
                video_id: "abc123".to_string(),
                download_url: "/api/youtube/downloads/abc123".to_string(),
                filename: "abc123.mp4".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_backend_detail_becomes_application_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/youtube/download")
            .with_status(400)
            .with_body(json!({ "detail": "quota exceeded" }).to_string())
            .create_async()
            .await;

        let err = coordinator_for(&server)
            .request_download(request("https://youtu.be/abc123"))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Application("quota exceeded".to_string()));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Nothing listens on port 9 locally.
        let origin = Url::parse("http://127.0.0.1:9").unwrap();
        let coordinator = DownloadCoordinator::new(ApiClient::new(ApiConfig::new(origin)));

        let err = coordinator
            .request_download(request("https://youtu.be/abc123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
    }

    #[tokio::test]
    async fn test_save_stream_writes_file() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/youtube/downloads/abc123")
            .with_status(200)
            .with_body("0123456789")
            .create_async()
            .await;

        let path = std::env::temp_dir().join(format!(
            "video-download-frontend-{}.mp4",
            std::process::id()
        ));
        let href = format!("{}/api/youtube/downloads/abc123", server.url());

        let events: Vec<SaveEvent> = coordinator_for(&server)
            .save_stream(href, path.clone())
            .collect()
            .await;

        assert!(matches!(events.first(), Some(SaveEvent::Progress(p)) if *p == 0.0));
        assert!(matches!(events.last(), Some(SaveEvent::Completed(p)) if *p == path));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"0123456789");

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_save_stream_reports_missing_file() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/gone.mp4")
            .with_status(404)
            .create_async()
            .await;

        let path = std::env::temp_dir().join(format!(
            "video-download-frontend-missing-{}.mp4",
            std::process::id()
        ));
        let href = format!("{}/gone.mp4", server.url());

        let events: Vec<SaveEvent> = coordinator_for(&server)
            .save_stream(href, path.clone())
            .collect()
            .await;

        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], SaveEvent::Failed(AppError::Application(_))));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_existing_file() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/broken.mp4")
            .with_status(500)
            .create_async()
            .await;

        let path = std::env::temp_dir().join(format!(
            "video-download-frontend-existing-{}.mp4",
            std::process::id()
        ));
        tokio::fs::write(&path, b"earlier download").await.unwrap();
        let href = format!("{}/broken.mp4", server.url());

        let events: Vec<SaveEvent> = coordinator_for(&server)
            .save_stream(href, path.clone())
            .collect()
            .await;

        assert!(matches!(events.last(), Some(SaveEvent::Failed(_))));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"earlier download");

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_unwritable_target_is_io_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/clip.mp4")
            .with_status(200)
            .with_body("data")
            .create_async()
            .await;

        let path = std::env::temp_dir()
            .join(format!("video-download-frontend-no-dir-{}", std::process::id()))
            .join("clip.mp4");
        let href = format!("{}/clip.mp4", server.url());

        let events: Vec<SaveEvent> = coordinator_for(&server)
            .save_stream(href, path.clone())
            .collect()
            .await;

        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], SaveEvent::Failed(AppError::Io(_))));
        assert!(!path.exists());
    }
}
