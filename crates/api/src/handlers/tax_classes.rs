//! Handler for the tax-class dropdown.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use shipdesk_core::shipping_method::TaxClassOption;
use shipdesk_db::repositories::TaxClassRepo;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /tax-classes
// ---------------------------------------------------------------------------

/// Active tax classes as `{value, label}` pairs.
///
/// The synthetic default entry is always first; on a storage failure it is
/// the only entry returned.
pub async fn get_available(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = match TaxClassRepo::list_active(&state.pool).await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!(error = %err, "Tax class query failed, returning default only");
            Vec::new()
        }
    };

    let mut options = vec![TaxClassOption::default_entry()];
    options.extend(rows.into_iter().map(|row| TaxClassOption {
        value: row.id_tax_rules_group,
        label: row.name,
    }));

    Ok(Json(options))
}
