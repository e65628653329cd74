//! Repository for the host `tax_rules_group` table.

use sqlx::PgPool;

use crate::models::tax_class::TaxClass;

/// Read access to the host platform's tax classes.
pub struct TaxClassRepo;

impl TaxClassRepo {
    /// All active tax classes, ordered by id.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<TaxClass>, sqlx::Error> {
        sqlx::query_as::<_, TaxClass>(
            "SELECT id_tax_rules_group, name FROM tax_rules_group \
             WHERE active ORDER BY id_tax_rules_group",
        )
        .fetch_all(pool)
        .await
    }
}
