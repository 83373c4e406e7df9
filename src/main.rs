use anyhow::Result;
use is_terminal::IsTerminal;
use pumpdash::upstream::DynUpstream;
use pumpdash::{Config, HttpUpstream, SharedConfig};
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let config = config_init(std::env::args().nth(1))?;
    let upstream: DynUpstream = Arc::new(HttpUpstream::new(config.upstream_timeout));

    tracing::info!("relaying to {}", &config.upstream);
    tracing::info!("serving dashboard {}", config.dashboard_path.display());
    tracing::info!("HTTP listening on {}", &config.bind_addr);
    let http_server = pumpdash::new_http(config, upstream)?;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("quitting from signal");
        },
        res = http_server => res?,
    }
    tracing::info!("goodbye");
    Ok(())
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_ansi(std::io::stdout().is_terminal()))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pumpdash=info".into()),
        )
        .init();
}

fn config_init(config_file: Option<String>) -> Result<SharedConfig> {
    let config = match config_file {
        None => {
            tracing::debug!("no config file given, using defaults");
            Config::default()
        }
        Some(config_file) => {
            tracing::debug!("loaded config from {config_file}");
            Config::try_from_file(&config_file)?
        }
    };
    Ok(Arc::new(config))
}
