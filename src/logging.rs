use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "video_download_frontend=info";

/// `RUST_LOG` wins over the built-in filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
