//! HTTP server for the Housing Operations Engine.
//!
//! Environment:
//! - `HOUSING_ENGINE_CONFIG`: configuration directory (default `./config/housing`)
//! - `HOUSING_ENGINE_BIND`: listen address (default `0.0.0.0:8080`)
//! - `HOUSING_ENGINE_LOG_JSON`: emit JSON logs when truthy
//! - `RUST_LOG`: log filter (default `info`)

use std::env;

use housing_engine::api::{AppState, create_router};
use housing_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if env_bool("HOUSING_ENGINE_LOG_JSON", false) {
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

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_dir =
        env::var("HOUSING_ENGINE_CONFIG").unwrap_or_else(|_| "./config/housing".to_string());
    let bind_addr = env::var("HOUSING_ENGINE_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        code = %config.metadata().code,
        version = %config.metadata().version,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(bind_addr = %bind_addr, "Housing engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
