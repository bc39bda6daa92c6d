//! dealcards entry point.

mod app;
mod config;
mod view;

use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use dealcards_cards::animation;
use dealcards_cards::search::SearchFlow;
use dealcards_catalog::Client;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "dealcards.log";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The terminal belongs to the UI, so logs go to a file.
    init_logging()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting dealcards");

    let app_config = match config::AppConfig::load() {
        Ok(c) => {
            tracing::info!(
                api = %c.api_base_url,
                animations = c.animations,
                "configuration loaded"
            );
            c
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            config::AppConfig::default()
        }
    };

    let endpoints = app_config.endpoints();
    let client = Client::new()?.with_endpoints(endpoints.clone());
    let fade = view::supports_fade(std::env::var("COLORTERM").ok().as_deref());
    if app_config.animations && !fade {
        tracing::info!("terminal does not advertise truecolor, card animations off");
    }
    let flow = SearchFlow::new(
        endpoints,
        animation::animator(app_config.animations && fade),
    );

    let result = app::run(app::App::new(flow), Arc::new(client)).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "dealcards exited with error");
    }
    result
}

fn init_logging() -> anyhow::Result<()> {
    let dir = config::config_dir();
    std::fs::create_dir_all(&dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,dealcards=debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
