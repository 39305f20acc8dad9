//! Provider 调用服务
//!
//! 把 update 返回的 [`Command`] 变成 tokio 任务。每个任务：
//! 1. 在 `tokio::time::timeout` 内调用一次 Provider
//! 2. 记录日志（预期内的错误 warn，其余 error）
//! 3. 把结果包装成 [`AppMessage`] 送回主循环
//!
//! 任务之间互不等待，完成顺序不固定；结果只经由消息通道进入 Model。

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use cdnscli_provider::{DnsProvider, ListRecordsParams, ProviderError};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, Command, ProviderResult};

/// Provider 调用服务
pub struct ProviderService {
    provider: Arc<dyn DnsProvider>,
    timeout: Duration,
    handle: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl ProviderService {
    pub fn new(
        provider: Arc<dyn DnsProvider>,
        timeout: Duration,
        handle: Handle,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            provider,
            timeout,
            handle,
            tx,
        }
    }

    /// 执行命令（立即返回）
    pub fn execute(&self, command: Command) {
        match command {
            Command::None => {}

            Command::Batch(commands) => {
                for command in commands {
                    self.execute(command);
                }
            }

            Command::LoadZones => {
                self.spawn(
                    "list_zones",
                    |provider| async move { provider.list_zones().await },
                    AppMessage::ZonesLoaded,
                );
            }

            Command::LoadRecords { zone } => {
                let params = ListRecordsParams::new(&zone);
                self.spawn(
                    "list_records",
                    |provider| async move { provider.list_records(&params).await },
                    |result| AppMessage::RecordsLoaded { zone, result },
                );
            }

            Command::CreateRecord { zone, params } => {
                let target = zone.clone();
                self.spawn(
                    "add_rr",
                    |provider| async move { provider.add_rr(&target, &params).await },
                    |result| AppMessage::RecordCreated { zone, result },
                );
            }

            Command::UpdateRecord { zone, record } => {
                let target = zone.clone();
                let previous_id = record.id.clone();
                self.spawn(
                    "update_rr",
                    |provider| async move { provider.update_rr(&target, &record).await },
                    |result| AppMessage::RecordUpdated {
                        zone,
                        previous_id,
                        result,
                    },
                );
            }
        }
    }

    fn spawn<T, F, Fut, M>(&self, operation: &'static str, call: F, into_message: M)
    where
        T: Send + 'static,
        F: FnOnce(Arc<dyn DnsProvider>) -> Fut,
        Fut: Future<Output = ProviderResult<T>> + Send + 'static,
        M: FnOnce(ProviderResult<T>) -> AppMessage + Send + 'static,
    {
        let provider_id = self.provider.id();
        let call = call(Arc::clone(&self.provider));
        let timeout = self.timeout;
        let tx = self.tx.clone();

        log::debug!("[{provider_id}] {operation} started");

        self.handle.spawn(async move {
            let result = tokio::time::timeout(timeout, call)
                .await
                .unwrap_or_else(|_| {
                    Err(ProviderError::Timeout {
                        provider: provider_id.to_string(),
                        detail: format!("{operation} did not finish within {timeout:?}"),
                    })
                });

            match &result {
                Ok(_) => log::debug!("[{provider_id}] {operation} finished"),
                Err(e) if e.is_expected() => log::warn!("{operation} failed: {e}"),
                Err(e) => log::error!("{operation} failed: {e}"),
            }

            // 主循环退出后接收端已关闭，结果直接丢弃
            if tx.send(into_message(result)).is_err() {
                log::debug!("[{provider_id}] {operation} result dropped, UI is gone");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use cdnscli_provider::{CreateRecordParams, DnsRecord, MemoryProvider, Result, Zone};
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    use super::*;

    fn service(
        provider: Arc<dyn DnsProvider>,
        timeout: Duration,
    ) -> (ProviderService, UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            ProviderService::new(provider, timeout, Handle::current(), tx),
            rx,
        )
    }

    #[tokio::test]
    async fn batch_reports_every_zone() {
        let (service, mut rx) = service(Arc::new(MemoryProvider::demo()), Duration::from_secs(5));

        service.execute(Command::LoadZones);
        let Some(AppMessage::ZonesLoaded(Ok(zones))) = rx.recv().await else {
            panic!("expected zones");
        };
        assert_eq!(zones.len(), 2);

        service.execute(Command::Batch(
            zones
                .iter()
                .map(|z| Command::LoadRecords {
                    zone: z.name.clone(),
                })
                .collect(),
        ));

        let mut loaded = Vec::new();
        for _ in 0..2 {
            match rx.recv().await {
                Some(AppMessage::RecordsLoaded { zone, result }) => {
                    assert!(result.is_ok());
                    loaded.push(zone);
                }
                other => panic!("unexpected message {other:?}"),
            }
        }
        loaded.sort();
        assert_eq!(loaded, ["example.com", "test.com"]);
    }

    #[tokio::test]
    async fn create_then_update_round_trip() {
        let (service, mut rx) = service(Arc::new(MemoryProvider::demo()), Duration::from_secs(5));

        service.execute(Command::CreateRecord {
            zone: "test.com".to_string(),
            params: CreateRecordParams {
                name: "api".to_string(),
                ttl: 3600,
                record_type: "A".to_string(),
                proxied: false,
                content: "192.0.2.10".to_string(),
                zone_name: "test.com".to_string(),
            },
        });
        let Some(AppMessage::RecordCreated { zone, result: Ok(created) }) = rx.recv().await else {
            panic!("expected a created record");
        };
        assert_eq!(zone, "test.com");
        assert!(!created.id.is_empty());

        let record = DnsRecord {
            ttl: 60,
            ..created.clone()
        };
        service.execute(Command::UpdateRecord {
            zone: "test.com".to_string(),
            record,
        });
        let Some(AppMessage::RecordUpdated {
            previous_id,
            result: Ok(updated),
            ..
        }) = rx.recv().await
        else {
            panic!("expected an updated record");
        };
        assert_eq!(previous_id, created.id);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.ttl, 60);
    }

    #[tokio::test]
    async fn unknown_zone_is_an_error_message() {
        let (service, mut rx) = service(Arc::new(MemoryProvider::demo()), Duration::from_secs(5));
        service.execute(Command::LoadRecords {
            zone: "missing.org".to_string(),
        });
        let Some(AppMessage::RecordsLoaded { result, .. }) = rx.recv().await else {
            panic!("expected records result");
        };
        assert!(matches!(result, Err(ProviderError::ZoneNotFound { .. })));
    }

    /// 永远不返回的 Provider
    struct StuckProvider;

    #[async_trait]
    impl DnsProvider for StuckProvider {
        fn id(&self) -> &'static str {
            "stuck"
        }

        async fn list_zones(&self) -> Result<Vec<Zone>> {
            std::future::pending().await
        }

        async fn list_zones_by_name(&self, _name: &str) -> Result<Vec<Zone>> {
            std::future::pending().await
        }

        async fn list_records(&self, _params: &ListRecordsParams) -> Result<Vec<DnsRecord>> {
            std::future::pending().await
        }

        async fn add_rr(&self, _zone: &str, _params: &CreateRecordParams) -> Result<DnsRecord> {
            std::future::pending().await
        }

        async fn update_rr(&self, _zone: &str, _record: &DnsRecord) -> Result<DnsRecord> {
            std::future::pending().await
        }

        async fn delete_rr(&self, _zone: &str, _record: &DnsRecord) -> Result<()> {
            std::future::pending().await
        }

        async fn get_rr_by_name(&self, _zone: &str, _name: &str) -> Result<DnsRecord> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn slow_calls_time_out() {
        let (service, mut rx) = service(Arc::new(StuckProvider), Duration::from_millis(20));
        service.execute(Command::LoadZones);
        let Some(AppMessage::ZonesLoaded(Err(err))) = rx.recv().await else {
            panic!("expected a timeout");
        };
        assert!(matches!(err, ProviderError::Timeout { ref provider, .. } if provider == "stuck"));
    }
}
