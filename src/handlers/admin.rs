//! Admin handlers for server management.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{info, warn};

use super::problem_details;
use crate::api::ReloadResponse;
use crate::server::AppState;

/// POST /api/admin/v1/reload
///
/// Re-fetches the record collection from the configured source. On failure
/// the store keeps its previous records.
pub async fn reload(State(state): State<AppState>) -> Response {
    match state.store.load_from(state.source.as_ref()).await {
        Ok(records) => {
            info!(records, "Reloaded catalog");
            Json(ReloadResponse { records }).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Catalog reload failed");
            problem_details::internal_error(format!("catalog reload failed: {e}")).into_response()
        }
    }
}
