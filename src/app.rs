use std::path::PathBuf;

use iced::{
    widget::{column, container, Space},
    Element, Length, Task,
};

use crate::api::WeatherReport;
use crate::application::{DownloadCoordinator, SaveEvent};
use crate::config::AppConfig;
use crate::domain::{AppError, DownloadRequest, DownloadResult, RequestToken, Transition, UiState};
use crate::ui::info::{self, BackendStatus, WeatherPanel};
use crate::ui::{DownloadMessage, DownloadView, ResultFragment};

pub struct FrontendApp {
    view: DownloadView,
    state: UiState,
    /// Rebuilt from `state` on every transition.
    fragment: Option<ResultFragment>,
    coordinator: DownloadCoordinator,
    greeting: Option<String>,
    weather: WeatherPanel,
    /// Latest weather request; older answers are dropped.
    weather_token: RequestToken,
    backend: BackendStatus,
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(DownloadMessage),
    DownloadFinished(RequestToken, Result<DownloadResult, AppError>),
    /// (Selected Path, Resolved Link)
    SavePathSelected(Option<PathBuf>, String),
    Save(SaveEvent),
    GreetingLoaded(Result<String, String>),
    WeatherLoaded(RequestToken, Result<WeatherReport, String>),
    HealthChecked(BackendStatus),
}

impl FrontendApp {
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        let coordinator = DownloadCoordinator::new(crate::api::ApiClient::new(config.api));

        let mut app = Self {
            view: DownloadView::default(),
            state: UiState::default(),
            fragment: None,
            coordinator,
            greeting: None,
            weather: WeatherPanel::Loading,
            weather_token: RequestToken::default(),
            backend: BackendStatus::Unknown,
        };

        let startup = Task::batch([
            app.load_greeting(),
            app.load_weather(),
            app.check_health(),
        ]);
        (app, startup)
    }

    fn transition(&mut self, transition: Transition) {
        self.state = std::mem::take(&mut self.state).apply(transition);
        self.fragment =
            ResultFragment::render(self.state.result.as_ref(), self.coordinator.api().config());
    }

    fn load_greeting(&self) -> Task<Message> {
        let api = self.coordinator.api().clone();
        Task::perform(
            async move {
                api.hello()
                    .await
                    .map(|hello| hello.message)
                    .map_err(|e| e.to_string())
            },
            Message::GreetingLoaded,
        )
    }

    fn load_weather(&mut self) -> Task<Message> {
        self.weather = WeatherPanel::Loading;
        self.weather_token = self.weather_token.next();

        let token = self.weather_token;
        let api = self.coordinator.api().clone();
        Task::perform(
            async move { api.weather().await.map_err(|e| e.to_string()) },
            move |result| Message::WeatherLoaded(token, result),
        )
    }

    fn check_health(&self) -> Task<Message> {
        let api = self.coordinator.api().clone();
        Task::perform(
            async move {
                match api.health().await {
                    Ok(health) if health.is_ok() => BackendStatus::Online,
                    Ok(_) => BackendStatus::Offline,
                    Err(e) => {
                        tracing::warn!(error = %e, "health check failed");
                        BackendStatus::Offline
                    }
                }
            },
            Message::HealthChecked,
        )
    }

    fn submit(&mut self) -> Task<Message> {
        if self.state.is_busy() {
            return Task::none();
        }

        let request = match DownloadRequest::new(&self.view.video_url) {
            Ok(request) => request,
            Err(e) => {
                self.transition(Transition::Rejected(e));
                return Task::none();
            }
        };

        let token = self.state.next_token();
        self.transition(Transition::Submitted(token));

        let coordinator = self.coordinator.clone();
        Task::perform(
            async move { coordinator.request_download(request).await },
            move |result| Message::DownloadFinished(token, result),
        )
    }

    fn open_link(&mut self, href: &str) {
        if let Err(e) = webbrowser::open(href) {
            tracing::warn!(%href, error = %e, "failed to open link");
            if !self.state.is_busy() {
                self.transition(Transition::LinkOpenFailed(e.to_string()));
            }
        }
    }

    fn choose_save_path(&mut self, href: String, filename: String) -> Task<Message> {
        if self.state.is_busy() {
            return Task::none();
        }
        self.transition(Transition::SaveRequested);

        let coordinator = self.coordinator.clone();
        Task::perform(
            async move {
                let path = coordinator.choose_save_path(filename).await;
                (path, href)
            },
            |(path, href)| Message::SavePathSelected(path, href),
        )
    }
}

pub fn update(app: &mut FrontendApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            app.view.update(&ui_msg);

            match ui_msg {
                DownloadMessage::VideoUrlChanged(_) => {}
                DownloadMessage::DownloadPressed => return app.submit(),
                DownloadMessage::OpenLink(href) => app.open_link(&href),
                DownloadMessage::SaveFile { href, filename } => {
                    return app.choose_save_path(href, filename);
                }
                DownloadMessage::RefreshWeather => return app.load_weather(),
            }
        }
        Message::DownloadFinished(token, result) => match result {
            Ok(result) => app.transition(Transition::Succeeded(token, result)),
            Err(e) => {
                tracing::warn!(error = %e, "download request failed");
                app.transition(Transition::Failed(token, e));
            }
        },
        Message::SavePathSelected(path, href) => match path {
            Some(path) => {
                app.transition(Transition::SaveStarted(path.clone()));
                return Task::run(app.coordinator.save_stream(href, path), Message::Save);
            }
            None => app.transition(Transition::SaveCancelled),
        },
        Message::Save(event) => match event {
            SaveEvent::Progress(progress) => app.transition(Transition::SaveProgress(progress)),
            SaveEvent::Completed(path) => app.transition(Transition::SaveCompleted(path)),
            SaveEvent::Failed(e) => app.transition(Transition::SaveFailed(e)),
        },
        Message::GreetingLoaded(result) => match result {
            Ok(message) => app.greeting = Some(message),
            Err(e) => tracing::warn!(error = %e, "greeting unavailable"),
        },
        Message::WeatherLoaded(token, result) => {
            if token != app.weather_token {
                tracing::debug!(
                    ?token,
                    latest = ?app.weather_token,
                    "dropping stale weather report"
                );
                return Task::none();
            }
            app.weather = match result {
                Ok(report) => WeatherPanel::Ready(report),
                Err(e) => {
                    tracing::warn!(error = %e, "weather unavailable");
                    WeatherPanel::Unavailable
                }
            };
        }
        Message::HealthChecked(status) => app.backend = status,
    }
    Task::none()
}

pub fn view(app: &FrontendApp) -> Element<'_, Message> {
    let origin = app.coordinator.api().config().origin();

    let content = column![
        info::view(app.greeting.as_deref(), &app.weather, app.backend, origin),
        Space::new().height(Length::Fixed(10.0)),
        app.view.view(&app.state, app.fragment.as_ref()),
    ]
    .spacing(16);

    container(Element::from(content).map(Message::UiMessage))
        .padding(20)
        .width(Length::Fill)
        .into()
}
