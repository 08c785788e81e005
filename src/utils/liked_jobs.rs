//! お気に入り求人リストの保存
//!
//! リストはお気に入り登録順。`job_id` の重複は持たない。
//! 読み込み→書き込みはアトミックではないため、複数タブから同時に更新すると後勝ちになる。

use crate::error::StoreError;
use crate::models::Job;
use crate::utils::log_trace::{log_debug, log_info, log_warn};
use crate::utils::store::SharedStore;

pub const LIKED_JOBS_KEY: &str = "likedJobs";

#[derive(Clone)]
pub struct LikedJobsRepository {
    store: SharedStore,
}

impl LikedJobsRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// 未保存なら空リスト、破損ならエラー
    pub fn load(&self) -> Result<Vec<Job>, StoreError> {
        let Some(json) = self.store.read(LIKED_JOBS_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&json).map_err(|e| StoreError::Corrupt {
            key: LIKED_JOBS_KEY.to_string(),
            reason: e.to_string(),
        })
    }

    fn persist(&self, jobs: &[Job]) -> Result<(), StoreError> {
        let json = serde_json::to_string(jobs).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.store.write(LIKED_JOBS_KEY, &json)
    }

    pub fn get_liked_jobs(&self) -> Vec<Job> {
        self.load().unwrap_or_else(|e| {
            report("お気に入り読み込み失敗", &e);
            Vec::new()
        })
    }

    pub fn is_liked(&self, job_id: &str) -> bool {
        self.get_liked_jobs().iter().any(|job| job.job_id == job_id)
    }

    /// 更新の起点となるリスト。破損していれば空リストから作り直す
    fn load_for_update(&self) -> Result<Vec<Job>, StoreError> {
        match self.load() {
            Err(e @ StoreError::Corrupt { .. }) => {
                report("破損したお気に入りを破棄", &e);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// 登録済みなら何もしない
    pub fn add_liked_job(&self, job: &Job) {
        let result = self.load_for_update().and_then(|mut jobs| {
            if jobs.iter().any(|liked| liked.job_id == job.job_id) {
                return Ok(false);
            }
            jobs.push(job.clone());
            self.persist(&jobs).map(|()| true)
        });
        match result {
            Ok(true) => log_info("liked-jobs", &format!("お気に入り追加: {}", job.job_id)),
            Ok(false) => log_debug("liked-jobs", &format!("登録済み: {}", job.job_id)),
            Err(e) => report("お気に入り追加失敗", &e),
        }
    }

    /// 一致する `job_id` をすべて除外して保存
    pub fn remove_liked_job(&self, job_id: &str) {
        let result = self.load_for_update().and_then(|jobs| {
            let remaining: Vec<Job> = jobs.into_iter().filter(|job| job.job_id != job_id).collect();
            self.persist(&remaining)
        });
        match result {
            Ok(()) => log_info("liked-jobs", &format!("お気に入り解除: {}", job_id)),
            Err(e) => report("お気に入り解除失敗", &e),
        }
    }

    /// お気に入りを全件削除
    pub fn clear_all(&self) {
        match self.store.delete(LIKED_JOBS_KEY) {
            Ok(()) => log_info("liked-jobs", "お気に入りを全件削除"),
            Err(e) => report("お気に入り全件削除失敗", &e),
        }
    }

    /// 登録状態を反転し、保存後の状態を返す
    pub fn toggle(&self, job: &Job) -> bool {
        if self.is_liked(&job.job_id) {
            self.remove_liked_job(&job.job_id);
        } else {
            self.add_liked_job(job);
        }
        self.is_liked(&job.job_id)
    }
}

fn report(context: &str, err: &StoreError) {
    let message = format!("{}: {}", context, err);
    match err {
        StoreError::Unavailable => log_debug("liked-jobs", &message),
        _ => log_warn("liked-jobs", &message),
    }
}
