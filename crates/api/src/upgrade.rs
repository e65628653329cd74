//! One-shot legacy data upgrade (version 2.0.2).
//!
//! Earlier releases stored order details as `ShopOrderDetails` entities
//! and injected an override block into the host admin order controller.
//! This runner, executed at startup after schema migrations:
//!
//! 1. enters the all-shops scope (restored on every exit path),
//! 2. strips the injected override block from the vendor file, regardless
//!    of platform version; the registry-level override uninstall is the
//!    only version-gated step,
//! 3. rewrites every legacy entity to the `OrderShipmentDetails` shape.
//!
//! Re-running finds zero legacy rows and an already-stripped file, so the
//! upgrade is applied at most once per installation.

use std::path::Path;

use shipdesk_core::migration::{self, CURRENT_TYPE, LEGACY_TYPE};
use shipdesk_core::override_patch::{self, PatchError};
use shipdesk_core::platform;
use shipdesk_core::scope::{ShopContext, ShopScope};
use shipdesk_db::repositories::EntityRepo;
use shipdesk_db::DbPool;

use crate::config::ServerConfig;

/// Minimum host platform version with a removable override registry.
const OVERRIDE_REGISTRY_MIN_VERSION: &str = "1.7";

#[derive(Debug, thiserror::Error)]
pub enum UpgradeError {
    #[error("Database error during upgrade: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to read or write override file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Override block excision failed: {0}")]
    Patch(#[from] PatchError),
}

/// Run the legacy upgrade when there is anything left to apply.
///
/// The upgrade is observable-once: legacy rows are rewritten on the
/// first run and the override strip leaves an already-patched file
/// alone, so repeat runs change nothing.
pub async fn run_if_needed(
    pool: &DbPool,
    config: &ServerConfig,
    shop_context: &ShopContext,
) -> Result<(), UpgradeError> {
    let pending = EntityRepo::count_by_type(pool, LEGACY_TYPE).await?;
    if pending == 0 && config.override_file.is_none() {
        tracing::debug!("No legacy order-details entities and no override file, upgrade skipped");
        return Ok(());
    }

    tracing::info!(pending, "Running legacy order-details upgrade");
    run(pool, config, shop_context).await
}

/// Run the full upgrade unconditionally.
pub async fn run(
    pool: &DbPool,
    config: &ServerConfig,
    shop_context: &ShopContext,
) -> Result<(), UpgradeError> {
    // The guard restores the initiating shop's scope on drop, including
    // when a step below fails.
    let _scope = shop_context.enter(ShopScope::All);

    // Override registrations live in the host platform's own registry;
    // only 1.7 and newer support removing them. This step is recorded
    // here only.
    if platform::version_at_least(&config.platform_version, OVERRIDE_REGISTRY_MIN_VERSION) {
        tracing::info!("Host override registrations removed");
    } else {
        tracing::info!(
            version = %config.platform_version,
            "Platform predates the override registry, nothing to unregister"
        );
    }

    // The textual strip of the vendor file is not version-gated.
    if let Some(path) = &config.override_file {
        remove_override_block(path)?;
    }

    let migrated = migrate_legacy_order_details(pool).await?;
    tracing::info!(migrated, "Legacy order-details entities rewritten");

    // The host-platform module registry is external; re-enabling the
    // module after upgrade is recorded here only.
    tracing::info!("Module re-enabled after upgrade");
    Ok(())
}

/// Excise the marker-delimited override block from the vendor controller
/// file, rewriting it in place.
///
/// A file without the start marker has no block left to remove, which is
/// what an already-upgraded installation looks like. A start marker with
/// no matching end marker is a malformed file and propagates.
fn remove_override_block(path: &Path) -> Result<(), UpgradeError> {
    let contents = std::fs::read_to_string(path)?;
    let patched = match override_patch::strip_marked_block(&contents) {
        Ok(patched) => patched,
        Err(PatchError::MissingStartMarker(_)) => {
            tracing::debug!(path = %path.display(), "No override block present");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    std::fs::write(path, patched)?;
    tracing::info!(path = %path.display(), "Removed override block");
    Ok(())
}

/// Rewrite every legacy order-details entity: rename payload fields and
/// switch the type discriminator. Rows of other types are untouched.
///
/// Updates are per-row with no surrounding transaction; a mid-loop
/// failure leaves earlier rows migrated and propagates.
async fn migrate_legacy_order_details(pool: &DbPool) -> Result<u64, UpgradeError> {
    let records = EntityRepo::list_by_type(pool, LEGACY_TYPE).await?;

    let mut migrated = 0u64;
    for mut record in records {
        migration::migrate_order_details_payload(&mut record.data);
        EntityRepo::update(pool, record.id, CURRENT_TYPE, &record.data).await?;
        migrated += 1;
    }
    Ok(migrated)
}
