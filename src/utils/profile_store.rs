//! ユーザープロフィールの保存
//!
//! プロフィールは1件のみ。保存のたびに丸ごと上書きする。

use crate::error::StoreError;
use crate::models::UserProfile;
use crate::utils::log_trace::{log_debug, log_warn};
use crate::utils::store::SharedStore;

pub const USER_PROFILE_KEY: &str = "userProfile";

#[derive(Clone)]
pub struct ProfileRepository {
    store: SharedStore,
}

impl ProfileRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// 未保存と破損を区別して読み込む
    pub fn load_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        let Some(json) = self.store.read(USER_PROFILE_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                key: USER_PROFILE_KEY.to_string(),
                reason: e.to_string(),
            })
    }

    /// 読めない場合は `None`
    pub fn get_profile(&self) -> Option<UserProfile> {
        match self.load_profile() {
            Ok(profile) => profile,
            Err(e) => {
                report("プロフィール読み込み失敗", &e);
                None
            }
        }
    }

    pub fn save_profile(&self, profile: &UserProfile) {
        let result = serde_json::to_string(profile)
            .map_err(|e| StoreError::Serialize(e.to_string()))
            .and_then(|json| self.store.write(USER_PROFILE_KEY, &json));
        if let Err(e) = result {
            report("プロフィール保存失敗", &e);
        }
    }

    pub fn clear_profile(&self) {
        if let Err(e) = self.store.delete(USER_PROFILE_KEY) {
            report("プロフィール削除失敗", &e);
        }
    }
}

// ストアが無いのは正常系なのでdebug、それ以外はwarn
fn report(context: &str, err: &StoreError) {
    let message = format!("{}: {}", context, err);
    match err {
        StoreError::Unavailable => log_debug("profile", &message),
        _ => log_warn("profile", &message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::log_trace::{clear_logs, get_logs};
    use crate::utils::store::{BrowserStore, KeyValueStore, MemoryStore, ReadOnlyStore};
    use std::rc::Rc;

    fn profile(name: &str, title: &str, about: &str) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            desired_job_title: title.to_string(),
            about_me: about.to_string(),
        }
    }

    #[test]
    fn test_save_and_get() {
        let repo = ProfileRepository::new(MemoryStore::shared());
        assert_eq!(repo.get_profile(), None);

        let p = profile("Ada", "Engineer", "Builds analytical engines");
        repo.save_profile(&p);
        assert_eq!(repo.get_profile(), Some(p));
    }

    #[test]
    fn test_save_overwrites_without_merging() {
        let repo = ProfileRepository::new(MemoryStore::shared());
        repo.save_profile(&profile("Ada", "Engineer", "First profile text"));
        let b = profile("Grace", "Admiral", "");
        repo.save_profile(&b);
        assert_eq!(repo.get_profile(), Some(b));
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::shared();
        let repo = ProfileRepository::new(store.clone());
        repo.save_profile(&profile("Ada", "Engineer", "About me text"));
        repo.clear_profile();
        assert_eq!(repo.get_profile(), None);
        assert!(store.is_empty());

        // 2回目の削除もエラーにならない
        repo.clear_profile();
    }

    #[test]
    fn test_corrupt_value_reads_as_absent() {
        clear_logs();
        let store = MemoryStore::shared();
        store.write(USER_PROFILE_KEY, "{not json").unwrap();
        let repo = ProfileRepository::new(store);

        assert!(matches!(repo.load_profile(), Err(StoreError::Corrupt { .. })));
        assert_eq!(repo.get_profile(), None);
        assert!(get_logs().iter().any(|l| l.level == "warn" && l.category == "profile"));
    }

    #[test]
    fn test_wrong_shape_reads_as_absent() {
        let store = MemoryStore::shared();
        store.write(USER_PROFILE_KEY, "[1, 2, 3]").unwrap();
        let repo = ProfileRepository::new(store);
        assert_eq!(repo.get_profile(), None);
    }

    #[test]
    fn test_write_failure_keeps_previous_profile() {
        let saved = r#"{"name":"Ada","desiredJobTitle":"Engineer","aboutMe":"Builds analytical engines"}"#;
        let store = Rc::new(ReadOnlyStore::with(USER_PROFILE_KEY, saved));
        let repo = ProfileRepository::new(store.clone());
        clear_logs();

        repo.save_profile(&profile("Grace", "Admiral", "Writes compilers all day"));
        repo.clear_profile();
        assert_eq!(repo.get_profile(), Some(profile("Ada", "Engineer", "Builds analytical engines")));
        assert_eq!(store.read(USER_PROFILE_KEY), Ok(Some(saved.to_string())));

        let warnings = get_logs()
            .into_iter()
            .filter(|l| l.level == "warn" && l.category == "profile")
            .count();
        assert_eq!(warnings, 2);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_unavailable_store_is_noop() {
        let repo = ProfileRepository::new(Rc::new(BrowserStore));
        repo.save_profile(&profile("Ada", "Engineer", "About me text"));
        repo.clear_profile();
        assert_eq!(repo.load_profile(), Err(StoreError::Unavailable));
        assert_eq!(repo.get_profile(), None);
    }
}
