use std::sync::Arc;

use shipdesk_core::delegate::ShippingMethodService;
use shipdesk_core::shipping_method;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: shipdesk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Injected shipping-method business logic.
    pub shipping: Arc<dyn ShippingMethodService>,
}

impl AppState {
    /// Public logo URL for the named carrier.
    pub fn logo_url(&self, carrier_name: &str) -> String {
        shipping_method::carrier_logo_url(
            &self.config.base_url,
            &self.config.base_uri,
            &self.shipping.carrier_logo_path(carrier_name),
        )
    }
}
