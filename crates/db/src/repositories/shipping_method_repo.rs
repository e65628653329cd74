//! Repository for the module's `shipping_method` table.

use sqlx::PgPool;

use shipdesk_core::shipping_method::ShippingMethodConfiguration;
use shipdesk_core::types::DbId;

use crate::models::shipping_method::ShippingMethod;

const COLUMNS: &str = "id, name, carrier_name, delivery_type, tax_class, pricing_policy, \
     percent_price, fixed_price, currency, base_price, show_logo, active, \
     created_at, updated_at";

/// CRUD operations for configured shipping methods.
pub struct ShippingMethodRepo;

impl ShippingMethodRepo {
    /// All configured shipping methods, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShippingMethod>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shipping_method ORDER BY id");
        sqlx::query_as::<_, ShippingMethod>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a shipping method by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ShippingMethod>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shipping_method WHERE id = $1");
        sqlx::query_as::<_, ShippingMethod>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new shipping method from a configuration, returning the
    /// created row. New methods start inactive; activation is a separate
    /// step.
    pub async fn create(
        pool: &PgPool,
        config: &ShippingMethodConfiguration,
    ) -> Result<ShippingMethod, sqlx::Error> {
        let query = format!(
            "INSERT INTO shipping_method \
                (name, carrier_name, tax_class, pricing_policy, percent_price, \
                 fixed_price, show_logo) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShippingMethod>(&query)
            .bind(&config.name)
            .bind(&config.carrier_name)
            .bind(config.tax_class)
            .bind(&config.pricing_policy)
            .bind(config.percent_price)
            .bind(config.fixed_price)
            .bind(config.show_logo)
            .fetch_one(pool)
            .await
    }

    /// Update an existing shipping method from a configuration. Returns
    /// `None` when no row with that id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        config: &ShippingMethodConfiguration,
    ) -> Result<Option<ShippingMethod>, sqlx::Error> {
        let query = format!(
            "UPDATE shipping_method SET \
                name = $2, carrier_name = $3, tax_class = $4, pricing_policy = $5, \
                percent_price = $6, fixed_price = $7, show_logo = $8, \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShippingMethod>(&query)
            .bind(id)
            .bind(&config.name)
            .bind(&config.carrier_name)
            .bind(config.tax_class)
            .bind(&config.pricing_policy)
            .bind(config.percent_price)
            .bind(config.fixed_price)
            .bind(config.show_logo)
            .fetch_optional(pool)
            .await
    }

    /// Set a method's active flag. Returns whether a row was updated.
    pub async fn set_active(pool: &PgPool, id: DbId, active: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE shipping_method SET active = $2, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .bind(active)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
