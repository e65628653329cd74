//! Core types, constants, and pure validation for shipping-method
//! configuration.
//!
//! This module has zero external dependencies (no DB, no async, no I/O).
//! It provides:
//!
//! - The configuration and response DTOs exchanged with the delegate
//! - Name-length validation
//! - Carrier logo URL construction
//! - Tax-class option types and the synthetic default entry

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a shipping-method title.
pub const MAX_NAME_LENGTH: usize = 64;

/// Module identifier recorded in the host `carrier` table for rows this
/// module owns. Carrier queries only ever touch foreign rows.
pub const OWN_MODULE_NAME: &str = "shipdesk";

/// Sentinel value for the synthetic default tax class.
pub const DEFAULT_TAX_CLASS: DbId = 0;

/// Label of the synthetic default tax class.
pub const DEFAULT_TAX_CLASS_LABEL: &str = "Default";

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Configuration submitted when saving a shipping method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethodConfiguration {
    pub id: Option<DbId>,
    pub name: String,
    pub tax_class: DbId,
    pub carrier_name: String,
    #[serde(default)]
    pub show_logo: bool,
    pub pricing_policy: String,
    pub percent_price: Option<f64>,
    pub fixed_price: Option<f64>,
}

/// A shipping method as returned to the admin UI.
///
/// `logo_url` is derived from configuration at response time and is never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethodResponse {
    pub id: DbId,
    pub name: String,
    pub carrier_name: String,
    pub delivery_type: String,
    pub tax_class: DbId,
    pub pricing_policy: String,
    pub currency: String,
    pub base_price: f64,
    pub logo_url: String,
    pub selected: bool,
}

/// A `{value, label}` pair offered in the tax-class dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxClassOption {
    pub value: DbId,
    pub label: String,
}

impl TaxClassOption {
    /// The synthetic entry that is always first in the tax-class list.
    pub fn default_entry() -> Self {
        Self {
            value: DEFAULT_TAX_CLASS,
            label: DEFAULT_TAX_CLASS_LABEL.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a shipping-method title.
///
/// Length is measured in characters, not bytes, so multi-byte titles are
/// not rejected early.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title can have at most {MAX_NAME_LENGTH} characters."
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Logo URL
// ---------------------------------------------------------------------------

/// Build the public URL for a carrier logo.
///
/// Format: `<base_url><base_uri>modules/<relative_path>`.
pub fn carrier_logo_url(base_url: &str, base_uri: &str, relative_path: &str) -> String {
    format!("{base_url}{base_uri}modules/{relative_path}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_at_limit_accepted() {
        let name = "a".repeat(MAX_NAME_LENGTH);
        assert!(validate_name(&name).is_ok());
    }

    #[test]
    fn name_over_limit_rejected() {
        let name = "a".repeat(MAX_NAME_LENGTH + 1);
        let err = validate_name(&name).unwrap_err();
        assert!(err.to_string().contains("at most 64 characters"));
    }

    #[test]
    fn empty_name_accepted() {
        assert!(validate_name("").is_ok());
    }

    #[test]
    fn multibyte_name_counts_characters_not_bytes() {
        // 64 three-byte characters; would fail a byte-length check.
        let name = "\u{20AC}".repeat(MAX_NAME_LENGTH);
        assert!(validate_name(&name).is_ok());
    }

    #[test]
    fn logo_url_concatenation() {
        let url = carrier_logo_url(
            "https://shop.example.com",
            "/",
            "shipdesk/views/img/carriers/dhl.png",
        );
        assert_eq!(
            url,
            "https://shop.example.com/modules/shipdesk/views/img/carriers/dhl.png"
        );
    }

    #[test]
    fn default_tax_class_entry() {
        let entry = TaxClassOption::default_entry();
        assert_eq!(entry.value, 0);
        assert_eq!(entry.label, "Default");
    }

    #[test]
    fn configuration_deserializes_camel_case() {
        let config: ShippingMethodConfiguration = serde_json::from_value(serde_json::json!({
            "name": "Express",
            "taxClass": 2,
            "carrierName": "DHL",
            "showLogo": true,
            "pricingPolicy": "fixed",
            "fixedPrice": 4.5
        }))
        .unwrap();
        assert_eq!(config.tax_class, 2);
        assert_eq!(config.carrier_name, "DHL");
        assert!(config.id.is_none());
    }

    #[test]
    fn response_serializes_camel_case() {
        let response = ShippingMethodResponse {
            id: 7,
            name: "Express".into(),
            carrier_name: "DHL".into(),
            delivery_type: "express".into(),
            tax_class: 0,
            pricing_policy: "fixed".into(),
            currency: "EUR".into(),
            base_price: 4.5,
            logo_url: String::new(),
            selected: false,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["carrierName"], "DHL");
        assert_eq!(value["logoUrl"], "");
        assert_eq!(value["selected"], false);
    }
}
