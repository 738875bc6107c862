use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leadtime_backend::{config::Config, handlers, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leadtime_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        time_zone = %config.time_zone,
        max_lead_days = config.engine.max_lead_days(),
        cutoff_hour = config.engine.cutoff_hour(),
        bank_holidays_url = %config.bank_holidays_url,
        bank_holidays_division = %config.bank_holidays_division,
        bank_holidays_file = ?config.bank_holidays_file,
        stale_policy = ?config.stale_policy(),
        "Loaded configuration from environment/.env"
    );

    let addr: SocketAddr = config.bind_addr.parse()?;
    let state = AppState::from_config(config)?;

    // Warm the cache; a failing feed is reported but does not stop startup.
    if let Err(err) = state.lead_times.current_holidays().await {
        tracing::warn!(error = %err, "Initial bank holiday load failed");
    }

    let app = handlers::router(state);

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
