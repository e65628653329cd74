//! Integration tests for the legacy order-details upgrade runner.

mod common;

use std::io::Write;

use assert_matches::assert_matches;
use serde_json::json;
use sqlx::PgPool;

use shipdesk_api::upgrade::{self, UpgradeError};
use shipdesk_core::override_patch::{END_MARKER, START_MARKER};
use shipdesk_core::scope::{ShopContext, ShopScope};

async fn seed_entity(pool: &PgPool, entity_type: &str, data: serde_json::Value) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO shipdesk_entity (type, data) VALUES ($1, $2) RETURNING id",
    )
    .bind(entity_type)
    .bind(data)
    .fetch_one(pool)
    .await
    .unwrap()
}

fn shop_context() -> ShopContext {
    ShopContext::new(ShopScope::Shop(1))
}

// ---------------------------------------------------------------------------
// Entity rewrite
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_legacy_records_rewritten(pool: PgPool) {
    let id = seed_entity(
        &pool,
        "ShopOrderDetails",
        json!({ "shipmentReference": "R1", "packlinkShippingPrice": 9.5 }),
    )
    .await;

    let config = common::test_config();
    let ctx = shop_context();
    upgrade::run_if_needed(&pool, &config, &ctx).await.unwrap();

    let (entity_type, data): (String, serde_json::Value) =
        sqlx::query_as("SELECT type, data FROM shipdesk_entity WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(entity_type, "OrderShipmentDetails");
    assert_eq!(data, json!({ "reference": "R1", "shippingCost": 9.5 }));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_other_types_untouched(pool: PgPool) {
    seed_entity(
        &pool,
        "ShopOrderDetails",
        json!({ "shipmentReference": "R1", "packlinkShippingPrice": 1.0 }),
    )
    .await;
    let other = seed_entity(&pool, "QueueItem", json!({ "shipmentReference": "keepme" })).await;

    let config = common::test_config();
    let ctx = shop_context();
    upgrade::run_if_needed(&pool, &config, &ctx).await.unwrap();

    // Exactly the legacy rows changed type.
    let migrated: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM shipdesk_entity WHERE type = 'OrderShipmentDetails'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(migrated, 1);

    let (entity_type, data): (String, serde_json::Value) =
        sqlx::query_as("SELECT type, data FROM shipdesk_entity WHERE id = $1")
            .bind(other)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(entity_type, "QueueItem");
    assert_eq!(data["shipmentReference"], "keepme");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_rerun_is_a_noop(pool: PgPool) {
    seed_entity(
        &pool,
        "ShopOrderDetails",
        json!({ "shipmentReference": "R2", "packlinkShippingPrice": 2.5 }),
    )
    .await;

    let config = common::test_config();
    let ctx = shop_context();
    upgrade::run_if_needed(&pool, &config, &ctx).await.unwrap();
    // Second run finds no legacy rows and changes nothing.
    upgrade::run_if_needed(&pool, &config, &ctx).await.unwrap();

    let legacy: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM shipdesk_entity WHERE type = 'ShopOrderDetails'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(legacy, 0);
}

// ---------------------------------------------------------------------------
// Override removal
// ---------------------------------------------------------------------------

fn override_file_with_block() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "<?php\nclass AdminOrdersController\n{{\n    {START_MARKER}\n    \
         public function injected()\n    {{\n    }}\n    {END_MARKER}\n}}\n"
    )
    .unwrap();
    file
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_override_block_stripped(pool: PgPool) {
    seed_entity(&pool, "ShopOrderDetails", json!({ "shipmentReference": "R" })).await;
    let file = override_file_with_block();

    let mut config = common::test_config();
    config.platform_version = "1.7.8.2".into();
    config.override_file = Some(file.path().to_path_buf());

    let ctx = shop_context();
    upgrade::run_if_needed(&pool, &config, &ctx).await.unwrap();

    let patched = std::fs::read_to_string(file.path()).unwrap();
    assert!(!patched.contains(START_MARKER));
    assert!(!patched.contains("injected"));
    assert!(patched.contains("AdminOrdersController"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_override_stripped_on_old_platform(pool: PgPool) {
    seed_entity(&pool, "ShopOrderDetails", json!({ "shipmentReference": "R" })).await;
    let file = override_file_with_block();

    // The textual strip does not depend on the platform version; only the
    // registry-level uninstall does.
    let mut config = common::test_config();
    config.platform_version = "1.6.1.24".into();
    config.override_file = Some(file.path().to_path_buf());

    let ctx = shop_context();
    upgrade::run_if_needed(&pool, &config, &ctx).await.unwrap();

    let patched = std::fs::read_to_string(file.path()).unwrap();
    assert!(!patched.contains(START_MARKER));
    assert!(!patched.contains("injected"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_override_stripped_without_legacy_rows(pool: PgPool) {
    // No legacy entities seeded; the strip still applies.
    let file = override_file_with_block();

    let mut config = common::test_config();
    config.override_file = Some(file.path().to_path_buf());

    let ctx = shop_context();
    upgrade::run_if_needed(&pool, &config, &ctx).await.unwrap();

    let patched = std::fs::read_to_string(file.path()).unwrap();
    assert!(!patched.contains(START_MARKER));
    assert!(!patched.contains("injected"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_already_stripped_file_left_alone(pool: PgPool) {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "<?php\nclass AdminOrdersController\n{{\n}}\n").unwrap();
    let before = std::fs::read_to_string(file.path()).unwrap();

    let mut config = common::test_config();
    config.override_file = Some(file.path().to_path_buf());

    let ctx = shop_context();
    upgrade::run_if_needed(&pool, &config, &ctx).await.unwrap();
    // A second pass is equally harmless.
    upgrade::run_if_needed(&pool, &config, &ctx).await.unwrap();

    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), before);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unterminated_block_surfaces_an_error(pool: PgPool) {
    seed_entity(&pool, "ShopOrderDetails", json!({ "shipmentReference": "R" })).await;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "<?php\n{START_MARKER}\n// never closed\n").unwrap();

    let mut config = common::test_config();
    config.override_file = Some(file.path().to_path_buf());

    let ctx = shop_context();
    let result = upgrade::run_if_needed(&pool, &config, &ctx).await;
    assert_matches!(result, Err(UpgradeError::Patch(_)));
}

// ---------------------------------------------------------------------------
// Scope handling
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_scope_restored_after_run(pool: PgPool) {
    seed_entity(&pool, "ShopOrderDetails", json!({ "shipmentReference": "R" })).await;

    let config = common::test_config();
    let ctx = ShopContext::new(ShopScope::Shop(3));
    upgrade::run_if_needed(&pool, &config, &ctx).await.unwrap();

    assert_eq!(ctx.current(), ShopScope::Shop(3));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_scope_restored_after_failed_run(pool: PgPool) {
    seed_entity(&pool, "ShopOrderDetails", json!({ "shipmentReference": "R" })).await;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{START_MARKER}\n// never closed\n").unwrap();

    let mut config = common::test_config();
    config.override_file = Some(file.path().to_path_buf());

    let ctx = ShopContext::new(ShopScope::Shop(3));
    let result = upgrade::run_if_needed(&pool, &config, &ctx).await;
    assert!(result.is_err());
    assert_eq!(ctx.current(), ShopScope::Shop(3));
}
