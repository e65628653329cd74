//! Row model and DTO mapping for the module's `shipping_method` table.

use serde::Serialize;
use shipdesk_core::shipping_method::ShippingMethodResponse;
use shipdesk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `shipping_method` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShippingMethod {
    pub id: DbId,
    pub name: String,
    pub carrier_name: String,
    pub delivery_type: String,
    pub tax_class: DbId,
    pub pricing_policy: String,
    pub percent_price: Option<f64>,
    pub fixed_price: Option<f64>,
    pub currency: String,
    pub base_price: f64,
    pub show_logo: bool,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ShippingMethod {
    /// Map a stored row to the transport DTO.
    ///
    /// `logo_url` is left empty; the HTTP layer derives it from the
    /// carrier name at response time.
    pub fn into_response(self) -> ShippingMethodResponse {
        ShippingMethodResponse {
            id: self.id,
            name: self.name,
            carrier_name: self.carrier_name,
            delivery_type: self.delivery_type,
            tax_class: self.tax_class,
            pricing_policy: self.pricing_policy,
            currency: self.currency,
            base_price: self.base_price,
            logo_url: String::new(),
            selected: self.active,
        }
    }
}
