mod app;
mod charts;
mod config;
mod dashboard;
mod data;
mod guides;
mod message;
mod panels;
mod render;
mod screens;
mod state;
mod table;
mod theme;

use std::path::PathBuf;

use app::App;
use config::Settings;
use iced::Settings as WindowSettings;
use lucide_icons::LUCIDE_FONT_BYTES;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("perf_dashboard=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_PATH));

    let settings = Settings::load(&path).unwrap_or_else(|err| {
        tracing::error!(error = %err, "falling back to default settings");
        Settings::default()
    });
    let window = settings.window;

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(dashboard::TITLE)
        .theme(App::theme)
        .settings(WindowSettings {
            fonts: vec![LUCIDE_FONT_BYTES.into()],
            ..Default::default()
        })
        .window_size((window.width, window.height))
        .run()
}
