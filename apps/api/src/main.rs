mod backend_client;
mod calendar;
mod config;
mod creditors;
mod errors;
mod models;
mod notes;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend_client::{Backend, BackendClient};
use crate::calendar::business_days::{HolidayCalendar, DEFAULT_HOLIDAYS};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Workdesk API v{}", env!("CARGO_PKG_VERSION"));

    let backend: Option<Arc<dyn Backend>> = match &config.backend_url {
        Some(url) => {
            let client = BackendClient::new(url.clone(), config.backend_token.clone())?;
            info!("Backend client initialized ({url})");
            Some(Arc::new(client) as Arc<dyn Backend>)
        }
        None => {
            warn!("BACKEND_URL not set; submit, batch and report-miss endpoints are disabled");
            None
        }
    };

    let holidays = HolidayCalendar::default();
    info!(
        "Holiday calendar: {} dates, deadlines computed in {}",
        DEFAULT_HOLIDAYS.len(),
        config.timezone
    );

    let state = AppState {
        holidays: Arc::new(holidays),
        backend,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
