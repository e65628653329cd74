//! Postgres-backed implementation of the shipping-method delegate.

use async_trait::async_trait;
use sqlx::PgPool;

use shipdesk_core::delegate::ShippingMethodService;
use shipdesk_core::error::CoreError;
use shipdesk_core::shipping_method::{ShippingMethodConfiguration, ShippingMethodResponse};
use shipdesk_core::types::DbId;

use crate::repositories::ShippingMethodRepo;

/// Relative logo path used when a carrier name yields no usable slug.
const FALLBACK_LOGO: &str = "shipdesk/views/img/carriers/carrier.png";

/// The production [`ShippingMethodService`]: persists configurations in
/// the `shipping_method` table.
pub struct PgShippingMethodService {
    pool: PgPool,
}

impl PgShippingMethodService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShippingMethodService for PgShippingMethodService {
    async fn get_all(&self) -> Result<Vec<ShippingMethodResponse>, CoreError> {
        let rows = ShippingMethodRepo::list(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().map(|row| row.into_response()).collect())
    }

    async fn activate(&self, id: DbId) -> Result<bool, CoreError> {
        ShippingMethodRepo::set_active(&self.pool, id, true)
            .await
            .map_err(storage_error)
    }

    async fn deactivate(&self, id: DbId) -> Result<bool, CoreError> {
        ShippingMethodRepo::set_active(&self.pool, id, false)
            .await
            .map_err(storage_error)
    }

    async fn save(
        &self,
        config: &ShippingMethodConfiguration,
    ) -> Result<Option<ShippingMethodResponse>, CoreError> {
        let saved = match config.id {
            // Update of a nonexistent id is a refusal, not a storage error.
            Some(id) => ShippingMethodRepo::update(&self.pool, id, config)
                .await
                .map_err(storage_error)?,
            None => Some(
                ShippingMethodRepo::create(&self.pool, config)
                    .await
                    .map_err(storage_error)?,
            ),
        };
        Ok(saved.map(|row| row.into_response()))
    }

    fn carrier_logo_path(&self, carrier_name: &str) -> String {
        let slug: String = carrier_name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        let slug = slug.trim_matches('-');
        if slug.is_empty() {
            FALLBACK_LOGO.to_string()
        } else {
            format!("shipdesk/views/img/carriers/{slug}.png")
        }
    }
}

fn storage_error(err: sqlx::Error) -> CoreError {
    CoreError::Internal(format!("shipping method storage failure: {err}"))
}
