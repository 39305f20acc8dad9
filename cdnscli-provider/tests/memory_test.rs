//! 内存 Provider 测试（无需凭证，默认运行）

mod common;

use cdnscli_provider::{ListRecordsParams, ProviderError};
use common::{TestContext, run_crud_flow};

#[tokio::test]
async fn test_memory_crud() {
    let ctx = TestContext::memory();
    run_crud_flow(&ctx).await;
}

#[tokio::test]
async fn test_memory_created_record_is_listed() {
    let ctx = TestContext::memory();
    let record = require_some!(ctx.create_test_record().await, "创建测试记录失败");

    let records = require_ok!(
        ctx.provider
            .list_records(&ListRecordsParams::new(&ctx.zone))
            .await,
        "list_records 调用失败"
    );
    assert_eq!(records.last(), Some(&record), "新记录应追加在末尾");

    ctx.cleanup_all_test_records().await;
    let records = require_ok!(
        ctx.provider
            .list_records(&ListRecordsParams::new(&ctx.zone))
            .await,
        "list_records 调用失败"
    );
    assert!(records.iter().all(|r| !r.name.starts_with("_test-")));
}

#[tokio::test]
async fn test_memory_get_missing_record() {
    let ctx = TestContext::memory();
    let result = ctx.provider.get_rr_by_name(&ctx.zone, "missing").await;
    assert!(matches!(
        result,
        Err(ProviderError::RecordNotFound { record, .. }) if record == "missing.example.com"
    ));
}
