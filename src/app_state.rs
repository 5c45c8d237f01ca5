//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::RegistrationService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registration service for the check-in workflow.
    pub registration: Arc<RegistrationService>,
    /// Notice shown to walk-ins on the registration page.
    pub payment_notice: String,
}
