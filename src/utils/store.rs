//! 永続キーバリューストア
//!
//! ブラウザの localStorage を `KeyValueStore` として抽象化する。
//! リポジトリはこのトレイト越しにしか触らないので、テストでは `MemoryStore` に差し替える。

use std::rc::Rc;

use crate::error::StoreError;
#[cfg(test)]
use std::{cell::RefCell, collections::HashMap};

/// 生文字列を保存するストア
pub trait KeyValueStore {
    /// 未設定なら `Ok(None)`
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// 既存値は上書き
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// 未設定でもエラーにしない
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

pub type SharedStore = Rc<dyn KeyValueStore>;

/// `window.localStorage` 実装
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    window
        .local_storage()
        .map_err(|_| StoreError::Unavailable)?
        .ok_or(StoreError::Unavailable)
}

// wasm以外 (ネイティブテスト等) では常に利用不可
impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|_| StoreError::Unavailable)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StoreError::Write {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StoreError::Write {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}

/// メモリ上のストア (テスト用)
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// 読み込みだけ成功し、書き込みと削除は容量超過で失敗するストア (テスト用)
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ReadOnlyStore {
    inner: MemoryStore,
}

#[cfg(test)]
impl ReadOnlyStore {
    pub fn with(key: &str, value: &str) -> Self {
        let inner = MemoryStore::new();
        inner
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Self { inner }
    }
}

#[cfg(test)]
impl KeyValueStore for ReadOnlyStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        })
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        Err(StoreError::Write {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.read("userProfile"), Ok(None));

        store.write("userProfile", "{}").unwrap();
        store.write("userProfile", "[]").unwrap();
        assert_eq!(store.read("userProfile"), Ok(Some("[]".to_string())));

        store.delete("userProfile").unwrap();
        store.delete("userProfile").unwrap();
        assert!(store.is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_browser_store_unavailable_off_wasm() {
        let store = BrowserStore;
        assert_eq!(store.read("likedJobs"), Err(StoreError::Unavailable));
        assert_eq!(store.write("likedJobs", "[]"), Err(StoreError::Unavailable));
        assert_eq!(store.delete("likedJobs"), Err(StoreError::Unavailable));
    }

    #[test]
    fn test_read_only_store_rejects_writes() {
        let store = ReadOnlyStore::with("likedJobs", "[]");
        assert_eq!(store.read("likedJobs"), Ok(Some("[]".to_string())));
        assert!(matches!(store.write("likedJobs", "[1]"), Err(StoreError::Write { .. })));
        assert!(matches!(store.delete("likedJobs"), Err(StoreError::Write { .. })));
        assert_eq!(store.read("likedJobs"), Ok(Some("[]".to_string())));
    }
}
