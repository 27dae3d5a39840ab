use iced::{
    widget::{button, column, row, text},
    Element, Font,
};

use super::DownloadMessage;
use crate::{api::ApiConfig, domain::DownloadResult};

const LINK_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Absolute links pass through untouched; anything else hangs off the backend origin.
pub fn resolve_link(download_url: &str, config: &ApiConfig) -> String {
    let is_absolute = LINK_SCHEMES.iter().any(|scheme| {
        download_url
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    });
    if is_absolute {
        return download_url.to_string();
    }

    let path = download_url.trim_start_matches('/');
    format!("{}/{}", config.origin(), path)
}

/// What the result area shows for a finished download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFragment {
    /// Shown as inline code.
    pub video_id: String,
    pub href: String,
    /// Suggested name when the link is saved.
    pub download_hint: String,
    pub label: String,
}

impl ResultFragment {
    pub fn render(result: Option<&DownloadResult>, config: &ApiConfig) -> Option<Self> {
        let result = result?;
        Some(Self {
            video_id: result.video_id.clone(),
            href: resolve_link(&result.download_url, config),
            download_hint: result.filename.clone(),
            label: format!("Download {}", result.filename),
        })
    }

    /// `can_save` is false while another operation owns the status line.
    pub fn view(&self, can_save: bool) -> Element<'_, DownloadMessage> {
        column![
            row![
                text("Video ID:").size(14),
                text(&self.video_id).font(Font::MONOSPACE).size(14),
            ]
            .spacing(6),
            row![
                button(text(&self.label))
                    .on_press(DownloadMessage::OpenLink(self.href.clone()))
                    .style(button::text),
                button("Save as...")
                    .on_press_maybe(can_save.then(|| DownloadMessage::SaveFile {
                        href: self.href.clone(),
                        filename: self.download_hint.clone(),
                    })),
            ]
            .spacing(10),
            text(&self.href).size(12).style(text::secondary),
        ]
        .spacing(8)
        .into()
    }
}
