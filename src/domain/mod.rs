pub mod error;
pub mod model;
pub mod state;

pub use error::{AppError, GENERIC_DOWNLOAD_FAILURE};
pub use model::{DownloadRequest, DownloadResult, RequestToken, StatusKind};
pub use state::{Transition, UiState};
