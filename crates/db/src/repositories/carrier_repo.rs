//! Repository for the host `carrier` table.
//!
//! Every query filters to foreign carriers: rows whose
//! `external_module_name` differs from this module's own identifier,
//! that are active and not soft-deleted.

use sqlx::PgPool;

use shipdesk_core::shipping_method::OWN_MODULE_NAME;
use shipdesk_core::types::DbId;

use crate::models::carrier::Carrier;

const COLUMNS: &str = "id_carrier, name, active, deleted, external_module_name";

/// Read and update access to carriers owned by other modules.
pub struct CarrierRepo;

impl CarrierRepo {
    /// Count foreign carriers that are active and not deleted.
    pub async fn count_foreign_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM carrier \
             WHERE external_module_name <> $1 AND active AND NOT deleted",
        )
        .bind(OWN_MODULE_NAME)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Ids of foreign carriers that are active and not deleted.
    pub async fn list_foreign_active_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT id_carrier FROM carrier \
             WHERE external_module_name <> $1 AND active AND NOT deleted \
             ORDER BY id_carrier",
        )
        .bind(OWN_MODULE_NAME)
        .fetch_all(pool)
        .await
    }

    /// Find a carrier by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Carrier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM carrier WHERE id_carrier = $1");
        sqlx::query_as::<_, Carrier>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set a single carrier inactive. Returns whether a row was updated.
    ///
    /// Callers disable carriers one row at a time; there is no batch
    /// statement and no transaction around the loop.
    pub async fn set_inactive(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE carrier SET active = false WHERE id_carrier = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
