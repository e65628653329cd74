//! The seam between the HTTP layer and the shipping-method business logic.
//!
//! Handlers never talk to storage directly for shipping-method operations;
//! they go through [`ShippingMethodService`], injected via application
//! state. Tests substitute their own implementations to exercise failure
//! paths.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::shipping_method::{ShippingMethodConfiguration, ShippingMethodResponse};
use crate::types::DbId;

/// Business-logic operations on shipping methods.
///
/// `activate` and `deactivate` return `Ok(false)` when the method does not
/// exist or the state change was refused; `Err` is reserved for storage
/// failures.
#[async_trait]
pub trait ShippingMethodService: Send + Sync {
    /// All configured shipping methods, ordered by id.
    async fn get_all(&self) -> Result<Vec<ShippingMethodResponse>, CoreError>;

    /// Mark a shipping method active.
    async fn activate(&self, id: DbId) -> Result<bool, CoreError>;

    /// Mark a shipping method inactive.
    async fn deactivate(&self, id: DbId) -> Result<bool, CoreError>;

    /// Persist a configuration, returning the stored method or `None` when
    /// the delegate refused it.
    async fn save(
        &self,
        config: &ShippingMethodConfiguration,
    ) -> Result<Option<ShippingMethodResponse>, CoreError>;

    /// Relative path (under the public `modules/` directory) of the logo
    /// for the named carrier.
    fn carrier_logo_path(&self, carrier_name: &str) -> String;
}
