//! 凭证查找服务
//!
//! 配置文件中缺失的凭证从系统钥匙串读取：
//! - Windows: Credential Manager
//! - macOS: Keychain
//! - Linux: Secret Service (GNOME Keyring / KWallet)
//!
//! 条目的 service 为 `cdnscli`，user 为 `<provider>/<key>`，例如 `cf/api_token`。

use keyring::Entry;

const SERVICE_NAME: &str = "cdnscli";

/// 按 Provider 名称和凭证键查找凭证
pub trait CredentialSource {
    fn get(&self, provider: &str, key: &str) -> Option<String>;
}

/// 基于系统钥匙串的凭证来源
#[derive(Debug, Default)]
pub struct KeyringCredentialStore;

impl KeyringCredentialStore {
    fn entry_user(provider: &str, key: &str) -> String {
        format!("{provider}/{key}")
    }
}

impl CredentialSource for KeyringCredentialStore {
    fn get(&self, provider: &str, key: &str) -> Option<String> {
        let user = Self::entry_user(provider, key);
        let entry = match Entry::new(SERVICE_NAME, &user) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Failed to open keyring entry {user}: {e}");
                return None;
            }
        };

        match entry.get_password() {
            Ok(secret) => Some(secret),
            Err(keyring::Error::NoEntry) => None,
            // 钥匙串不可用（如无 Secret Service 的 Linux）不阻止启动
            Err(e) => {
                log::warn!("Failed to read keyring entry {user}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_user_format() {
        assert_eq!(
            KeyringCredentialStore::entry_user("cf", "api_token"),
            "cf/api_token"
        );
    }
}
