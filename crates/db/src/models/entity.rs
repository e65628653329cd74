//! Row model for the generic `shipdesk_entity` storage table.
//!
//! The table is a key-value style store: a type discriminator plus a JSON
//! payload. The 2.0.2 upgrade rewrites rows of the legacy order-details
//! type in place.

use serde::Serialize;
use shipdesk_core::types::DbId;
use sqlx::FromRow;

/// A row from the `shipdesk_entity` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EntityRecord {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub entity_type: String,
    pub data: serde_json::Value,
}
