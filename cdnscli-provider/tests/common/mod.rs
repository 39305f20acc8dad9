//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use cdnscli_provider::{
    CreateRecordParams, DnsProvider, DnsRecord, ListRecordsParams, ProviderCredentials,
    create_provider,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装 Provider 和测试 zone
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub zone: String,
}

impl TestContext {
    /// 创建 Cloudflare 测试上下文
    pub fn cloudflare() -> Option<Self> {
        let api_token = env::var("CLOUDFLARE_API_TOKEN").ok()?;
        let zone = env::var("TEST_ZONE").ok()?;
        let provider = create_provider(ProviderCredentials::Cloudflare { api_token }).ok()?;
        Some(Self { provider, zone })
    }

    /// 创建 REG.RU 测试上下文
    pub fn regru() -> Option<Self> {
        let username = env::var("REGRU_USERNAME").ok()?;
        let password = env::var("REGRU_PASSWORD").ok()?;
        let zone = env::var("TEST_ZONE").ok()?;
        let provider = create_provider(ProviderCredentials::RegRu { username, password }).ok()?;
        Some(Self { provider, zone })
    }

    /// 创建内存 Provider 上下文（演示数据）
    pub fn memory() -> Self {
        let provider = create_provider(ProviderCredentials::Memory { zones: Vec::new() })
            .unwrap_or_else(|e| panic!("memory provider: {e}"));
        Self {
            provider,
            zone: "example.com".to_string(),
        }
    }

    pub fn txt_params(&self, name: &str, text: &str) -> CreateRecordParams {
        CreateRecordParams {
            name: name.to_string(),
            ttl: 600,
            record_type: "TXT".to_string(),
            proxied: false,
            content: text.to_string(),
            zone_name: self.zone.clone(),
        }
    }

    /// 创建测试记录并返回创建的记录
    pub async fn create_test_record(&self) -> Option<DnsRecord> {
        let params = self.txt_params(&generate_test_record_name(), "integration-test");
        self.provider.add_rr(&self.zone, &params).await.ok()
    }

    /// 清理测试记录
    pub async fn cleanup_record(&self, record: &DnsRecord) {
        let _ = self.provider.delete_rr(&self.zone, record).await;
    }

    /// 查找并清理所有测试记录（以 _test- 开头的记录）
    pub async fn cleanup_all_test_records(&self) {
        let params = ListRecordsParams::new(&self.zone);
        if let Ok(records) = self.provider.list_records(&params).await {
            for record in records.iter().filter(|r| r.name.starts_with("_test-")) {
                println!("清理测试记录: {}", record.name);
                self.cleanup_record(record).await;
            }
        }
    }
}

/// 通用 CRUD 流程：创建 → 按名称查询 → 更新 → 删除
pub async fn run_crud_flow(ctx: &TestContext) {
    let name = generate_test_record_name();
    let params = ctx.txt_params(&name, "crud-create");

    let created = require_ok!(ctx.provider.add_rr(&ctx.zone, &params).await, "add_rr 调用失败");
    assert_eq!(created.content, "crud-create");
    assert_eq!(created.record_type, "TXT");

    let fetched = require_ok!(
        ctx.provider.get_rr_by_name(&ctx.zone, &name).await,
        "get_rr_by_name 调用失败"
    );
    assert_eq!(fetched.content, "crud-create");

    let mut edited = fetched.clone();
    edited.content = "crud-update".to_string();
    let updated = require_ok!(
        ctx.provider.update_rr(&ctx.zone, &edited).await,
        "update_rr 调用失败"
    );
    assert_eq!(updated.content, "crud-update");

    require_ok!(
        ctx.provider.delete_rr(&ctx.zone, &updated).await,
        "delete_rr 调用失败"
    );
    assert!(
        ctx.provider.get_rr_by_name(&ctx.zone, &name).await.is_err(),
        "删除后不应再能查到记录"
    );
}
