use std::path::PathBuf;

use super::{AppError, DownloadResult, RequestToken, StatusKind};

pub const IDLE_MESSAGE: &str = "Paste a YouTube link and press Download.";
pub const PENDING_MESSAGE: &str =
    "Downloading on the server. This can take a minute for longer videos...";

/// Everything the download panel renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub status: StatusKind,
    pub message: String,
    pub result: Option<DownloadResult>,
    pub save_progress: Option<f32>,
    latest: RequestToken,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusKind::Info,
            message: IDLE_MESSAGE.to_string(),
            result: None,
            save_progress: None,
            latest: RequestToken::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Transition {
    /// Input failed validation; no request was issued.
    Rejected(AppError),
    Submitted(RequestToken),
    Succeeded(RequestToken, DownloadResult),
    Failed(RequestToken, AppError),
    /// Save dialog is open; blocks new submissions and saves until it closes.
    SaveRequested,
    SaveStarted(PathBuf),
    SaveProgress(f32),
    SaveCompleted(PathBuf),
    SaveFailed(AppError),
    SaveCancelled,
    LinkOpenFailed(String),
}

impl UiState {
    /// Token to attach to the next submission.
    pub fn next_token(&self) -> RequestToken {
        self.latest.next()
    }

    pub fn latest_token(&self) -> RequestToken {
        self.latest
    }

    pub fn is_busy(&self) -> bool {
        self.status == StatusKind::Pending
    }

    pub fn apply(self, transition: Transition) -> Self {
        match transition {
            Transition::Rejected(err) => Self {
                status: StatusKind::Error,
                message: err.to_string(),
                ..self
            },
            Transition::Submitted(token) => Self {
                status: StatusKind::Pending,
                message: PENDING_MESSAGE.to_string(),
                result: None,
                save_progress: None,
                latest: token,
            },
            Transition::Succeeded(token, result) => {
                if token != self.latest {
                    tracing::debug!(?token, latest = ?self.latest, "dropping stale download result");
                    return self;
                }
                Self {
                    status: StatusKind::Success,
                    message: format!("Download ready: {}", result.filename),
                    result: Some(result),
                    ..self
                }
            }
            Transition::Failed(token, err) => {
                if token != self.latest {
                    tracing::debug!(?token, latest = ?self.latest, "dropping stale download error");
                    return self;
                }
                Self {
                    status: StatusKind::Error,
                    message: err.to_string(),
                    result: None,
                    ..self
                }
            }
            Transition::SaveRequested => Self {
                status: StatusKind::Pending,
                message: "Choose where to save the file...".to_string(),
                ..self
            },
            Transition::SaveStarted(path) => Self {
                status: StatusKind::Pending,
                message: format!("Saving to: {}", path.display()),
                save_progress: Some(0.0),
                ..self
            },
            Transition::SaveProgress(progress) => {
                let message = if progress >= 1.0 {
                    "Download complete, finalizing...".to_string()
                } else {
                    format!("Saving: {:.1}%", progress * 100.0)
                };
                Self {
                    status: StatusKind::Pending,
                    message,
                    save_progress: Some(progress),
                    ..self
                }
            }
            Transition::SaveCompleted(path) => Self {
                status: StatusKind::Success,
                message: format!("Saved: {}", path.display()),
                save_progress: None,
                ..self
            },
            Transition::SaveFailed(err) => Self {
                status: StatusKind::Error,
                message: format!("Save failed: {}", err),
                save_progress: None,
                ..self
            },
            Transition::SaveCancelled => Self {
                status: StatusKind::Info,
                message: "Save cancelled".to_string(),
                save_progress: None,
                ..self
            },
            Transition::LinkOpenFailed(reason) => Self {
                status: StatusKind::Error,
                message: format!("Could not open link: {}", reason),
                ..self
            },
        }
    }
}
