//! 求人API接続設定

use crate::utils::store::KeyValueStore;

pub const DEFAULT_BASE_URL: &str = "https://jsearch.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "jsearch.p.rapidapi.com";

/// 実行時にAPIキーを差し替えるためのストアキー
///
/// アプリからは書き込まない。開発者ツールで
/// `localStorage.setItem("rapidApiKey", "...")` を実行し、再読み込みすると反映される。
pub const API_KEY_OVERRIDE_KEY: &str = "rapidApiKey";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub host: String,
    pub api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            host: DEFAULT_API_HOST.to_string(),
            api_key: build_time_api_key().to_string(),
        }
    }
}

/// ビルド時に埋め込まれたAPIキー (build.rs 参照)
pub fn build_time_api_key() -> &'static str {
    option_env!("RAPIDAPI_KEY").unwrap_or("")
}

impl ApiConfig {
    /// ストアに保存されたキーがあればそちらを優先
    ///
    /// キーが空でもエラーにはしない (リクエストは送信され、上流で拒否される)。
    pub fn resolve(store: &dyn KeyValueStore) -> Self {
        let mut config = ApiConfig::default();
        if let Ok(Some(key)) = store.read(API_KEY_OVERRIDE_KEY) {
            let key = key.trim();
            if !key.is_empty() {
                config.api_key = key.to_string();
            }
        }
        config
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::store::MemoryStore;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::resolve(&MemoryStore::new());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.host, DEFAULT_API_HOST);
        assert_eq!(config.api_key, build_time_api_key());
    }

    #[test]
    fn test_stored_key_overrides() {
        let store = MemoryStore::new();
        store.write(API_KEY_OVERRIDE_KEY, "  secret-key ").unwrap();
        let config = ApiConfig::resolve(&store);
        assert_eq!(config.api_key, "secret-key");
        assert!(config.has_api_key());
    }

    #[test]
    fn test_blank_stored_key_ignored() {
        let store = MemoryStore::new();
        store.write(API_KEY_OVERRIDE_KEY, "   ").unwrap();
        assert_eq!(ApiConfig::resolve(&store).api_key, build_time_api_key());
    }
}
