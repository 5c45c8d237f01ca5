//! Endpoint handlers organized by concern.

pub mod checkin;
pub mod pages;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes the attendee-facing routes.
pub fn routes() -> Router<AppState> {
    Router::new().merge(pages::routes()).merge(checkin::routes())
}
