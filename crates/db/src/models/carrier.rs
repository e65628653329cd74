//! Row model for the host platform's `carrier` table.
//!
//! Column names follow the host schema (`id_carrier`, not `id`); this
//! module only reads and updates rows owned by other modules.

use serde::Serialize;
use shipdesk_core::types::DbId;
use sqlx::FromRow;

/// A row from the `carrier` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Carrier {
    pub id_carrier: DbId,
    pub name: String,
    pub active: bool,
    pub deleted: bool,
    pub external_module_name: String,
}
