//! HTTP layer: route handlers, form DTOs, and router composition.
//!
//! Routes are mounted at the root with no version prefix: the printed
//! QR codes encode the bare `/scan_qr` path, so the paths are part of
//! the deployed artifact and must stay stable.

pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete router with all endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}
