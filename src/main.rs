mod api;
mod app;
mod application;
mod cli;
mod config;
mod domain;
mod logging;
mod ui;
mod utils;

use clap::Parser;

use cli::Cli;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.profile, cli.backend_origin.as_deref())?;
    tracing::info!(
        profile = ?config.profile,
        origin = config.api.origin(),
        "starting video download frontend"
    );

    iced::application(
        move || app::FrontendApp::new(config.clone()),
        app::update,
        app::view,
    )
    .title("Video Download Frontend")
    .run()?;

    Ok(())
}
