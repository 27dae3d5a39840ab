use clap::ValueEnum;
use thiserror::Error;
use url::Url;

use crate::api::ApiConfig;

pub const LOCAL_ORIGIN: &str = "http://127.0.0.1:8000";
pub const PRODUCTION_ORIGIN: &str = "https://indicators-backend.onrender.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid backend origin `{value}`: {source}")]
    InvalidOrigin {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Backend origin `{0}` must be an http(s) URL with a host")]
    UnsupportedOrigin(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    #[value(alias = "dev", alias = "local")]
    Development,
    #[default]
    #[value(alias = "prod")]
    Production,
}

impl Profile {
    pub fn default_origin(self) -> &'static str {
        match self {
            Profile::Development => LOCAL_ORIGIN,
            Profile::Production => PRODUCTION_ORIGIN,
        }
    }
}

/// Resolved once at startup and handed to the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub profile: Profile,
    pub api: ApiConfig,
}

impl AppConfig {
    /// An explicit origin beats the profile default.
    pub fn resolve(profile: Profile, origin_override: Option<&str>) -> Result<Self, ConfigError> {
        let raw = origin_override
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| profile.default_origin());

        let origin = parse_origin(raw)?;
        Ok(Self {
            profile,
            api: ApiConfig::new(origin),
        })
    }
}

fn parse_origin(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidOrigin {
        value: raw.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigError::UnsupportedOrigin(raw.to_string()));
    }
    Ok(url)
}
