pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /shipping-methods                 list (GET), save (POST)
/// /shipping-methods/activate        select a method (POST)
/// /shipping-methods/deactivate      deselect a method (POST)
///
/// /carriers/count                   number of foreign carriers (GET)
/// /carriers/disable                 disable all foreign carriers (POST)
///
/// /tax-classes                      tax-class dropdown options (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shipping-methods",
            get(handlers::shipping_methods::get_all).post(handlers::shipping_methods::save),
        )
        .route(
            "/shipping-methods/activate",
            post(handlers::shipping_methods::activate),
        )
        .route(
            "/shipping-methods/deactivate",
            post(handlers::shipping_methods::deactivate),
        )
        .route("/carriers/count", get(handlers::carriers::count))
        .route("/carriers/disable", post(handlers::carriers::disable))
        .route("/tax-classes", get(handlers::tax_classes::get_available))
}
