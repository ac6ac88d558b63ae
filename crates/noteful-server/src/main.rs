#![forbid(unsafe_code)]

use noteful_server::{build_router, validate_startup_config, AppState, ServerConfig};
use noteful_store::Database;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                warn!("unix signal handlers unavailable; falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cfg = ServerConfig::from_env()?;
    init_tracing(cfg.log_json);
    validate_startup_config(&cfg)?;
    let effective =
        serde_json::to_string(&cfg).map_err(|e| format!("serialize config failed: {e}"))?;
    info!(config = %effective, "effective configuration");

    let db = Database::open_url(&cfg.database_url)
        .map_err(|e| format!("open database {}: {e}", cfg.database_url))?;

    let bind_addr = cfg.bind_addr();
    let environment = cfg.environment;
    let app = build_router(AppState::with_config(db, cfg));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!(addr = %bind_addr, ?environment, "noteful server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))?;
    info!("noteful server stopped");
    Ok(())
}
