//! Cloudflare Provider 集成测试
//!
//! 运行方式:
//! ```bash
//! CLOUDFLARE_API_TOKEN=xxx TEST_ZONE=example.com \
//!     cargo test -p cdnscli-provider --test cloudflare_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use cdnscli_provider::{ListRecordsParams, ProviderError};
use common::{TestContext, run_crud_flow};

#[tokio::test]
#[ignore = "integration test: requires CLOUDFLARE_API_TOKEN and TEST_ZONE"]
async fn test_cloudflare_list_zones() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::cloudflare(), "创建测试上下文失败");
    let zones = require_ok!(ctx.provider.list_zones().await, "list_zones 调用失败");
    assert!(zones.iter().any(|z| z.name == ctx.zone), "zone 列表中应包含测试 zone");

    println!("✓ list_zones 测试通过，共 {} 个 zone", zones.len());
}

#[tokio::test]
#[ignore = "integration test: requires CLOUDFLARE_API_TOKEN and TEST_ZONE"]
async fn test_cloudflare_list_zones_by_name() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::cloudflare(), "创建测试上下文失败");
    let zones = require_ok!(
        ctx.provider.list_zones_by_name(&ctx.zone).await,
        "list_zones_by_name 调用失败"
    );
    assert_eq!(zones.len(), 1);
    assert!(!zones[0].name_servers.is_empty(), "zone 应该有 NS");

    println!("✓ list_zones_by_name 测试通过: {:?}", zones[0].name_servers);
}

#[tokio::test]
#[ignore = "integration test: requires CLOUDFLARE_API_TOKEN and TEST_ZONE"]
async fn test_cloudflare_list_records() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::cloudflare(), "创建测试上下文失败");
    let records = require_ok!(
        ctx.provider
            .list_records(&ListRecordsParams::new(&ctx.zone))
            .await,
        "list_records 调用失败"
    );
    println!("✓ list_records 测试通过，共 {} 条记录", records.len());
}

#[tokio::test]
#[ignore = "integration test: requires CLOUDFLARE_API_TOKEN and TEST_ZONE"]
async fn test_cloudflare_unknown_zone() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::cloudflare(), "创建测试上下文失败");
    let result = ctx
        .provider
        .list_records(&ListRecordsParams::new("no-such-zone.invalid"))
        .await;
    assert!(matches!(result, Err(ProviderError::ZoneNotFound { .. })));
}

#[tokio::test]
#[ignore = "integration test: requires CLOUDFLARE_API_TOKEN and TEST_ZONE"]
async fn test_cloudflare_crud() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::cloudflare(), "创建测试上下文失败");
    run_crud_flow(&ctx).await;
    println!("✓ CRUD 测试通过");
}

/// 清理所有残留的测试记录（手动运行）
#[tokio::test]
#[ignore = "integration test: requires CLOUDFLARE_API_TOKEN and TEST_ZONE"]
async fn test_cloudflare_cleanup_test_records() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::cloudflare(), "创建测试上下文失败");
    ctx.cleanup_all_test_records().await;
    println!("✓ 清理完成");
}
