//! Row model for the host platform's `tax_rules_group` table.

use serde::Serialize;
use shipdesk_core::types::DbId;
use sqlx::FromRow;

/// An active tax class as read from `tax_rules_group`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaxClass {
    pub id_tax_rules_group: DbId,
    pub name: String,
}
