use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use glossa_config::Config;
use glossa_translator::{LibreTranslateClient, Translator};
use glossa_types::LanguagePair;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod controller;
pub mod events;
pub mod oneshot;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::Args;
use self::controller::{AppController, supervise};
use self::oneshot::translate_once;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let code = match run(Args::parse()).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("glossa: {e:#}");
            1
        }
    };

    // A blocked stdin read would otherwise keep the runtime alive
    std::process::exit(code);
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("glossa=warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(args: Args) -> anyhow::Result<i32> {
    let config = args.load_config()?;
    let translator = build_translator(&config)?;

    if let Some(text) = args.text {
        let pair = LanguagePair::new(
            config.translator.from_lang.clone(),
            config.translator.to_lang.clone(),
        );
        return translate_once(
            translator,
            text,
            pair,
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        )
        .await;
    }

    let app = AppController::new(config, translator);
    let mut tasks = app.spawn_tasks();

    supervise(&mut tasks, signal::ctrl_c()).await;

    app.shutdown();
    tasks.shutdown().await;
    Ok(0)
}

fn build_translator(config: &Config) -> anyhow::Result<Arc<dyn Translator>> {
    let timeout = match config.translator.timeout_seconds {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };
    let client = LibreTranslateClient::with_timeout(
        config.translator.api_url.clone(),
        config.translator.api_key().map(str::to_string),
        timeout,
    )?;

    Ok(Arc::new(client))
}
