//! Domain logic for the shipdesk carrier-administration backend.
//!
//! This crate has no database or HTTP dependencies. It provides:
//!
//! - DTOs and pure validation for shipping-method configuration
//! - The [`delegate::ShippingMethodService`] trait (the seam between
//!   the HTTP layer and the business-logic implementation)
//! - Legacy order-details payload migration
//! - Marker-delimited override-block excision
//! - Explicit shop-scope handling with guaranteed restoration

pub mod delegate;
pub mod error;
pub mod migration;
pub mod platform;
pub mod override_patch;
pub mod scope;
pub mod shipping_method;
pub mod types;
