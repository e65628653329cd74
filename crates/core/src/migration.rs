//! Pure payload transformation for the legacy order-details migration.
//!
//! Version 2.0.2 renamed the stored order-details entity: the type
//! discriminator changed from `ShopOrderDetails` to `OrderShipmentDetails`
//! and two payload fields were renamed. This module performs the JSON
//! rewrite; the database walk lives in the upgrade runner.

use serde_json::Value;

/// Type discriminator of records written by pre-2.0.2 versions.
pub const LEGACY_TYPE: &str = "ShopOrderDetails";

/// Type discriminator those records carry after migration.
pub const CURRENT_TYPE: &str = "OrderShipmentDetails";

/// Renamed payload fields, `(old, new)`.
const FIELD_RENAMES: &[(&str, &str)] = &[
    ("shipmentReference", "reference"),
    ("packlinkShippingPrice", "shippingCost"),
];

/// Rewrite a legacy order-details payload in place.
///
/// Renamed fields are moved under their new keys and the old keys removed;
/// every other field is preserved verbatim. Fields absent from the payload
/// are skipped, so a partially migrated payload is not corrupted further.
pub fn migrate_order_details_payload(payload: &mut Value) {
    let Some(map) = payload.as_object_mut() else {
        return;
    };
    for (old, new) in FIELD_RENAMES {
        if let Some(value) = map.remove(*old) {
            map.insert((*new).to_string(), value);
        }
    }
}
