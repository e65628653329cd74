//! Repository for the generic `shipdesk_entity` storage table.

use sqlx::PgPool;

use shipdesk_core::types::DbId;

use crate::models::entity::EntityRecord;

const COLUMNS: &str = "id, type, data";

/// Access to the type-discriminated JSON entity store.
pub struct EntityRepo;

impl EntityRepo {
    /// All records of the given type, ordered by id.
    pub async fn list_by_type(
        pool: &PgPool,
        entity_type: &str,
    ) -> Result<Vec<EntityRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shipdesk_entity WHERE type = $1 ORDER BY id");
        sqlx::query_as::<_, EntityRecord>(&query)
            .bind(entity_type)
            .fetch_all(pool)
            .await
    }

    /// Number of records of the given type.
    pub async fn count_by_type(pool: &PgPool, entity_type: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM shipdesk_entity WHERE type = $1")
            .bind(entity_type)
            .fetch_one(pool)
            .await
    }

    /// Rewrite a record's type and payload by id. Returns whether a row
    /// was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        entity_type: &str,
        data: &serde_json::Value,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE shipdesk_entity SET type = $2, data = $3 WHERE id = $1")
            .bind(id)
            .bind(entity_type)
            .bind(data)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
