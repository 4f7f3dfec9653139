//! HTTP Handlers

use axum::{
    Json,
    extract::{Query, State},
    response::Redirect,
};
use serde::Serialize;

use insight_core::{SiteMetadata, Submission, SubmitError, URL_PARAM};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Document metadata as JSON
pub async fn site_metadata(State(state): State<AppState>) -> Json<SiteMetadata> {
    Json(*state.site)
}

/// Landing form fallback for clients without JavaScript
///
/// Redirects to the analysis route, or back to the landing page when the
/// field was blank. Only the first `url` parameter counts.
pub async fn submit_form(Query(params): Query<Vec<(String, String)>>) -> Redirect {
    let url = params
        .into_iter()
        .find_map(|(key, value)| (key == URL_PARAM).then_some(value))
        .unwrap_or_default();

    match Submission::submit_raw(url) {
        Ok(target) => {
            tracing::info!(href = %target, "Handing off to analysis");
            Redirect::to(&target.to_href())
        }
        Err(SubmitError::EmptyInput | SubmitError::InFlight) => Redirect::to("/"),
    }
}
