//! Marine Policy Validation Server
//!
//! Accepts plain-text insurance policy documents, extracts the policy
//! fields and checks them against business rules and the vessel registry.
//!
//! - `GET /health` registry-aware health check
//! - `GET /version` crate version
//! - `POST /validate` full validation of one document
//!
//! Configuration comes from flags or `APP_*` environment variables; see
//! [`config::Args`].

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use policy_engine::{PolicyValidator, VesselRegistry};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod config;
mod error;

use api::{handle_health, handle_validate, handle_version};
use config::{AppEnv, Args, Settings};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<PolicyValidator>,
    /// Longest accepted document, in characters
    pub max_text_chars: usize,
    pub env: AppEnv,
}

/// Routes plus CORS and request tracing; rate limiting is added in `main`
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/version", get(handle_version))
        .route("/validate", post(handle_validate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::try_from(Args::parse())?;

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(settings.log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting policy server on {}:{} ({})",
        settings.host, settings.port, settings.env
    );

    let registry = Arc::new(VesselRegistry::load_or_empty(&settings.vessels_path));
    let state = AppState {
        validator: Arc::new(PolicyValidator::new(registry)),
        max_text_chars: settings.max_text_chars,
        env: settings.env,
    };

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(settings.rate_limit.into())
            .burst_size(settings.burst_size())
            .finish()
            .ok_or_else(|| anyhow!("Invalid rate limiter configuration"))?,
    );

    let app = build_router(state).layer(GovernorLayer {
        config: governor_conf,
    });

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", settings.rate_limit);
    info!("Max document size: {} characters", settings.max_text_chars);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
