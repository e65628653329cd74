//! Handlers for host-platform carriers not owned by this module.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use shipdesk_db::repositories::CarrierRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /carriers/count
// ---------------------------------------------------------------------------

/// Number of active foreign carriers.
///
/// A storage failure degrades to a count of zero rather than surfacing an
/// error; the admin UI treats the count as informational.
pub async fn count(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = match CarrierRepo::count_foreign_active(&state.pool).await {
        Ok(count) => count,
        Err(err) => {
            tracing::warn!(error = %err, "Carrier count query failed, reporting zero");
            0
        }
    };

    Ok(Json(json!({ "count": count })))
}

// ---------------------------------------------------------------------------
// POST /carriers/disable
// ---------------------------------------------------------------------------

/// Disable every active foreign carrier.
///
/// Carriers are updated one row at a time with no surrounding transaction;
/// a failure mid-loop leaves earlier carriers disabled and propagates.
pub async fn disable(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let ids = match CarrierRepo::list_foreign_active_ids(&state.pool).await {
        Ok(ids) => ids,
        Err(err) => {
            tracing::warn!(error = %err, "Carrier id query failed");
            Vec::new()
        }
    };

    if ids.is_empty() {
        return Err(AppError::bad_request("Failed to disable shipping methods."));
    }

    // Load-then-update per carrier, mirroring how the host platform
    // persists entity changes. No batch statement, no rollback.
    for id in &ids {
        if let Some(carrier) = CarrierRepo::find_by_id(&state.pool, *id).await? {
            CarrierRepo::set_inactive(&state.pool, carrier.id_carrier).await?;
        }
    }

    tracing::info!(count = ids.len(), "Disabled foreign carriers");
    Ok(Json(json!({
        "message": "Successfully disabled shipping methods."
    })))
}
