//! ユーティリティモジュール

pub mod format;
pub mod job_api;
pub mod latest_request;
pub mod liked_jobs;
pub mod log_trace;
pub mod profile_store;
pub mod store;

pub use job_api::JobApiClient;
pub use latest_request::LatestRequest;
pub use liked_jobs::LikedJobsRepository;
pub use profile_store::ProfileRepository;
pub use store::{BrowserStore, SharedStore};
