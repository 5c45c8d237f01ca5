//! Static page handlers: landing page and check-in form.

use askama::Template;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::app_state::AppState;
use crate::error::CheckinError;

/// Landing page body. Staff bookmark this; attendees arrive via the QR.
const HOME_BODY: &str = "<p>Scan the event QR code to check in.</p>\n\
    <p><a href=\"/scan_qr\">Open the check-in form</a></p>";

/// Check-in form page, the target every printed QR code points at.
#[derive(Debug, Template)]
#[template(path = "scan_qr.html")]
struct ScanFormTemplate;

/// `GET /` — Landing page.
pub async fn home_handler() -> Html<&'static str> {
    Html(HOME_BODY)
}

/// `GET /scan_qr` — Check-in form.
///
/// # Errors
///
/// Returns [`CheckinError::Template`] if rendering fails.
pub async fn scan_form_handler() -> Result<Html<String>, CheckinError> {
    Ok(Html(ScanFormTemplate.render()?))
}

/// Page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/scan_qr", get(scan_form_handler))
}
