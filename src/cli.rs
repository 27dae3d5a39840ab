use clap::Parser;

use crate::config::Profile;

#[derive(Debug, Parser)]
#[command(name = "video-download-frontend")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Desktop client for the server-side video download backend")]
pub struct Cli {
    /// Backend origin, e.g. https://api.example.com (overrides the profile default)
    #[arg(long, env = "BACKEND_ORIGIN")]
    pub backend_origin: Option<String>,

    /// Which built-in backend to talk to
    #[arg(long, value_enum, env = "APP_ENV", default_value_t = Profile::Production)]
    pub profile: Profile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "video-download-frontend",
            "--profile",
            "dev",
            "--backend-origin",
            "https://x.test",
        ])
        .unwrap();
        assert_eq!(cli.profile, Profile::Development);
        assert_eq!(cli.backend_origin.as_deref(), Some("https://x.test"));
    }
}
