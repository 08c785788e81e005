//! ビューモジュール

pub mod job_details;
pub mod liked;
pub mod profile;
pub mod search;

pub use job_details::JobDetailsView;
pub use liked::LikedView;
pub use profile::ProfileView;
pub use search::SearchView;
