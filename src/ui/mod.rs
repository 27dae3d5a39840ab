pub mod info;
pub mod result;

use iced::{
    widget::{button, column, progress_bar, row, text, text_input, Space},
    Element, Length, Theme,
};

use crate::domain::{StatusKind, UiState};
pub use result::ResultFragment;

/// Form input; everything else the panel shows comes from `UiState`.
#[derive(Default)]
pub struct DownloadView {
    pub video_url: String,
}

#[derive(Debug, Clone)]
pub enum DownloadMessage {
    VideoUrlChanged(String),
    DownloadPressed,
    OpenLink(String),
    SaveFile { href: String, filename: String },
    RefreshWeather,
}

fn status_style(kind: StatusKind) -> fn(&Theme) -> text::Style {
    match kind {
        StatusKind::Info => text::default,
        StatusKind::Pending => text::primary,
        StatusKind::Success => text::success,
        StatusKind::Error => text::danger,
    }
}

impl DownloadView {
    pub fn update(&mut self, message: &DownloadMessage) {
        if let DownloadMessage::VideoUrlChanged(url) = message {
            self.video_url = url.clone();
        }
    }

    pub fn view<'a>(
        &'a self,
        state: &'a UiState,
        fragment: Option<&'a ResultFragment>,
    ) -> Element<'a, DownloadMessage> {
        let busy = state.is_busy();

        let mut form = column![
            text("Video Downloader").size(32),
            Space::new().height(Length::Fixed(20.0)),
            text("YouTube URL:").size(16),
            row![
                text_input("https://www.youtube.com/watch?v=...", &self.video_url)
                    .on_input(DownloadMessage::VideoUrlChanged)
                    .on_submit_maybe((!busy).then_some(DownloadMessage::DownloadPressed))
                    .padding(10),
                button("Download")
                    .on_press_maybe((!busy).then_some(DownloadMessage::DownloadPressed))
                    .padding(10),
            ]
            .spacing(10),
            Space::new().height(Length::Fixed(10.0)),
            text(&state.message).size(14).style(status_style(state.status)),
        ]
        .spacing(5);

        if let Some(progress) = state.save_progress {
            form = form.push(progress_bar(0.0..=1.0, progress));
        }

        if let Some(fragment) = fragment {
            form = form
                .push(Space::new().height(Length::Fixed(20.0)))
                .push(fragment.view(!busy));
        }

        form.into()
    }
}
