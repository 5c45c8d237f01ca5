//! qr-checkin server entry point.
//!
//! Regenerates the printed QR asset, then starts the Axum HTTP server.

use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use qr_checkin::api;
use qr_checkin::app_state::AppState;
use qr_checkin::config::CheckinConfig;
use qr_checkin::persistence::RosterStore;
use qr_checkin::qr;
use qr_checkin::service::RegistrationService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = CheckinConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting qr-checkin");

    // Regenerate the printed QR asset on every start
    let qr_path = qr::write_entry_qr(&config.qr_dir, &config.scan_url, config.qr_min_size_px)?;
    tracing::info!(path = %qr_path.display(), url = %config.scan_url, "entry QR code written");

    // Build service layer
    let store = RosterStore::new(config.data_file.clone());
    let registration = Arc::new(RegistrationService::new(store));

    // Build application state
    let app_state = AppState {
        registration,
        payment_notice: config.payment_notice.clone(),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .nest_service("/qrcodes", ServeDir::new(&config.qr_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
