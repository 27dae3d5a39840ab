use iced::{
    widget::{button, column, row, text},
    Element,
};

use super::DownloadMessage;
use crate::api::WeatherReport;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WeatherPanel {
    #[default]
    Loading,
    Ready(WeatherReport),
    Unavailable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl BackendStatus {
    fn label(self) -> &'static str {
        match self {
            BackendStatus::Unknown => "Backend: checking...",
            BackendStatus::Online => "Backend: online",
            BackendStatus::Offline => "Backend: offline",
        }
    }
}

/// Missing fields render as a dash.
pub fn weather_lines(report: &WeatherReport) -> Vec<String> {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    vec![
        format!(
            "{}, {} (feels like {})",
            field(&report.condition),
            field(&report.temperature),
            field(&report.feels_like)
        ),
        format!("Humidity: {}", field(&report.humidity)),
        format!("Updated: {}", field(&report.timestamp)),
    ]
}

pub fn view<'a>(
    greeting: Option<&'a str>,
    weather: &'a WeatherPanel,
    backend: BackendStatus,
    origin: &'a str,
) -> Element<'a, DownloadMessage> {
    let mut panel = column![row![
        text(backend.label()).size(12),
        text(origin).size(12).style(text::secondary),
    ]
    .spacing(8)]
    .spacing(4);

    if let Some(greeting) = greeting {
        panel = panel.push(text(greeting).size(16));
    }

    let weather_block = match weather {
        WeatherPanel::Loading => column![text("Loading weather...").size(14)],
        WeatherPanel::Ready(report) => column(
            weather_lines(report)
                .into_iter()
                .map(|line| -> Element<'a, DownloadMessage> { text(line).size(14).into() }),
        ),
        WeatherPanel::Unavailable => column![text("Weather unavailable").size(14)],
    };

    panel
        .push(
            row![
                weather_block,
                button("Refresh").on_press(DownloadMessage::RefreshWeather)
            ]
            .spacing(10),
        )
        .into()
}
