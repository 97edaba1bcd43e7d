use dioxus::desktop::{Config, WindowBuilder};
use quotedeck::app::App;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quotedeck=info")),
        )
        .init();

    tracing::info!("Starting QuoteDeck");

    let window = WindowBuilder::new()
        .with_title("QuoteDeck")
        .with_inner_size(dioxus::desktop::LogicalSize::new(760.0, 620.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(App);
}
