//! Handlers for shipping-method configuration.
//!
//! These are thin dispatchers: validate request fields, forward to the
//! injected [`ShippingMethodService`] delegate, shape the JSON response.
//! No business computation happens here.
//!
//! [`ShippingMethodService`]: shipdesk_core::delegate::ShippingMethodService

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use shipdesk_core::shipping_method::{self, ShippingMethodConfiguration};
use shipdesk_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of activate/deactivate requests.
#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// GET /shipping-methods
// ---------------------------------------------------------------------------

/// List all configured shipping methods with derived logo URLs.
pub async fn get_all(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut methods = state.shipping.get_all().await?;
    for method in &mut methods {
        method.logo_url = state.logo_url(&method.carrier_name);
    }
    tracing::debug!(count = methods.len(), "Listed shipping methods");
    Ok(Json(methods))
}

// ---------------------------------------------------------------------------
// POST /shipping-methods/activate
// ---------------------------------------------------------------------------

/// Mark a shipping method as selected.
pub async fn activate(
    State(state): State<AppState>,
    Json(body): Json<SelectRequest>,
) -> AppResult<impl IntoResponse> {
    let id = body.id.unwrap_or(0);
    if id == 0 || !state.shipping.activate(id).await? {
        return Err(AppError::bad_request("Failed to select shipping method."));
    }

    tracing::info!(id, "Shipping method activated");
    Ok(Json(json!({
        "message": "Shipping method successfully selected."
    })))
}

// ---------------------------------------------------------------------------
// POST /shipping-methods/deactivate
// ---------------------------------------------------------------------------

/// Mark a shipping method as deselected.
pub async fn deactivate(
    State(state): State<AppState>,
    Json(body): Json<SelectRequest>,
) -> AppResult<impl IntoResponse> {
    let id = body.id.unwrap_or(0);
    if id == 0 || !state.shipping.deactivate(id).await? {
        return Err(AppError::bad_request("Failed to deselect shipping method."));
    }

    tracing::info!(id, "Shipping method deactivated");
    Ok(Json(json!({
        "message": "Shipping method successfully deselected."
    })))
}

// ---------------------------------------------------------------------------
// POST /shipping-methods
// ---------------------------------------------------------------------------

/// Save a shipping-method configuration and activate the stored method.
///
/// Validation failures never reach the delegate. On success the returned
/// DTO always carries `selected = true` and a derived `logo_url`.
pub async fn save(
    State(state): State<AppState>,
    Json(config): Json<ShippingMethodConfiguration>,
) -> AppResult<impl IntoResponse> {
    shipping_method::validate_name(&config.name)?;

    let Some(mut model) = state.shipping.save(&config).await? else {
        return Err(AppError::bad_request("Failed to save shipping method."));
    };

    model.logo_url = state.logo_url(&model.carrier_name);

    if model.id == 0 || !state.shipping.activate(model.id).await? {
        return Err(AppError::bad_request("Failed to activate shipping method."));
    }
    model.selected = true;

    tracing::info!(id = model.id, carrier = %model.carrier_name, "Shipping method saved");
    Ok(Json(model))
}
