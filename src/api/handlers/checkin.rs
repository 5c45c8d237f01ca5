//! Check-in submission handler.

use askama::Template;
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Html;
use axum::routing::post;
use axum::{Form, Router};

use crate::api::dto::CheckinForm;
use crate::app_state::AppState;
use crate::error::CheckinError;
use crate::service::Resolution;

/// Confirmation fragment shown to attendees found on the roster.
#[derive(Debug, Template)]
#[template(path = "confirmed.html")]
struct ConfirmedTemplate {
    name: String,
    affiliation: String,
    position: String,
    code: String,
}

/// Fragment shown to walk-ins who were just added to the roster.
#[derive(Debug, Template)]
#[template(path = "registered.html")]
struct RegisteredTemplate {
    payment_notice: String,
}

/// `POST /check` — Resolve the submitted identity to a badge code.
///
/// A form missing any of the three fields is rejected with 400 before
/// it reaches the roster. Submissions from the form always carry
/// `preregistered = false`, so an unknown identity is registered as a
/// walk-in.
///
/// # Errors
///
/// Returns [`CheckinError::MissingField`] on an undecodable form and
/// [`CheckinError::Storage`] or [`CheckinError::Template`] on internal
/// failures.
pub async fn check_handler(
    State(state): State<AppState>,
    form: Result<Form<CheckinForm>, FormRejection>,
) -> Result<Html<String>, CheckinError> {
    let Form(form) = form.map_err(|rejection| CheckinError::MissingField(rejection.body_text()))?;
    let identity = form.into_identity();

    let resolution = state.registration.resolve(&identity, false).await?;
    let html = match resolution {
        Resolution::Existing(record) => ConfirmedTemplate {
            name: record.name,
            affiliation: record.affiliation,
            position: record.position,
            code: record.code.to_string(),
        }
        .render()?,
        Resolution::Registered(_) => RegisteredTemplate {
            payment_notice: state.payment_notice,
        }
        .render()?,
    };
    Ok(Html(html))
}

/// Check-in routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/check", post(check_handler))
}
